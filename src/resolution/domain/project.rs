use crate::resolution::domain::{Identifier, Scope};
use serde::{Deserialize, Serialize};

/// Version control information attached to projects and packages.
///
/// Normalization of provider-specific URL shapes is deliberately left to the
/// downstream consumer; values are carried as extracted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcsInfo {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vcs_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub revision: String,
}

impl VcsInfo {
    pub fn new(
        vcs_type: impl Into<String>,
        url: impl Into<String>,
        revision: impl Into<String>,
    ) -> Self {
        Self {
            vcs_type: vcs_type.into(),
            url: url.into(),
            revision: revision.into(),
        }
    }

    /// VcsInfo with a URL only, as derived from descriptor metadata.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            vcs_type: String::new(),
            url: url.into(),
            revision: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vcs_type.is_empty() && self.url.is_empty() && self.revision.is_empty()
    }
}

/// The analyzed build itself: its identifier, VCS location, and the scopes
/// holding its dependency trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Identifier,
    #[serde(default, skip_serializing_if = "VcsInfo::is_empty")]
    pub vcs: VcsInfo,
    pub scopes: Vec<Scope>,
}

impl Project {
    pub fn new(id: Identifier, vcs: VcsInfo, scopes: Vec<Scope>) -> Self {
        Self { id, vcs, scopes }
    }
}
