use crate::resolution::domain::{Identifier, VcsInfo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Sentinel value carried by artifacts whose checksum could not be verified.
pub const UNKNOWN_HASH: &str = "UNKNOWN";

/// Checksum algorithms published as sibling resources in Maven-layout
/// repositories (`<artifact-url>.<algorithm>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Number of hex digits a digest of this algorithm has.
    pub fn hex_digits(self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 40,
            HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Sha512 => 128,
        }
    }

    /// File extension of the sibling checksum resource.
    pub fn extension(self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// True when the token is a plausible digest for this algorithm.
    pub fn matches(self, token: &str) -> bool {
        token.len() == self.hex_digits() && token.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(HashAlgorithm::Sha1),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "sha512" | "sha-512" => Ok(HashAlgorithm::Sha512),
            _ => Err(format!(
                "Invalid checksum algorithm: {}. Please specify 'sha1', 'sha256' or 'sha512'",
                s
            )),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// A verified (or explicitly unverified) artifact checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hash {
    pub value: String,
    pub algorithm: String,
}

impl Hash {
    pub fn new(value: impl Into<String>, algorithm: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            algorithm: algorithm.into(),
        }
    }

    /// The explicit "could not be verified" sentinel. Checksum failures are
    /// data, never errors.
    pub fn unknown() -> Self {
        Self {
            value: UNKNOWN_HASH.to_string(),
            algorithm: String::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.value == UNKNOWN_HASH
    }

    /// Extracts a digest from a checksum resource body.
    ///
    /// Repository checksum files are messy in practice: some contain the bare
    /// digest, some append the file name, some prepend junk. The body is
    /// scanned token by token and the first token that is a plausible digest
    /// for the requested algorithm wins. A body with no valid token yields
    /// the unknown sentinel.
    pub fn from_checksum_response(body: &str, algorithm: HashAlgorithm) -> Self {
        body.split_whitespace()
            .find(|token| algorithm.matches(token))
            .map(|token| Hash::new(token.to_lowercase(), algorithm.extension()))
            .unwrap_or_else(Hash::unknown)
    }
}

impl Default for Hash {
    fn default() -> Self {
        Hash::unknown()
    }
}

/// Location of a binary or source artifact together with its checksum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteArtifact {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default)]
    pub hash: Hash,
}

impl RemoteArtifact {
    pub fn new(url: impl Into<String>, hash: Hash) -> Self {
        Self {
            url: url.into(),
            hash,
        }
    }

    /// An artifact whose location is not known. Serialized with empty fields
    /// rather than omitted so that consumers see a stable shape.
    pub fn empty() -> Self {
        Self {
            url: String::new(),
            hash: Hash::unknown(),
        }
    }
}

/// Fully resolved metadata for one external package.
///
/// A "placeholder" package carries only the identifier; it stands in for
/// packages whose descriptor could not be located or parsed so that the
/// package set still covers every reachable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: Identifier,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub authors: BTreeSet<String>,
    /// Declared licenses as found in the descriptor. Combining these into a
    /// single license expression is the job of a downstream utility.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub declared_licenses: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub homepage_url: String,
    #[serde(default)]
    pub binary_artifact: RemoteArtifact,
    #[serde(default)]
    pub source_artifact: RemoteArtifact,
    #[serde(default, skip_serializing_if = "VcsInfo::is_empty")]
    pub vcs: VcsInfo,
}

impl Package {
    /// A package with only the identifier populated.
    pub fn placeholder(id: Identifier) -> Self {
        Self {
            id,
            authors: BTreeSet::new(),
            declared_licenses: BTreeSet::new(),
            description: String::new(),
            homepage_url: String::new(),
            binary_artifact: RemoteArtifact::empty(),
            source_artifact: RemoteArtifact::empty(),
            vcs: VcsInfo::default(),
        }
    }

    /// True when nothing beyond the identifier is populated.
    pub fn is_placeholder(&self) -> bool {
        self.authors.is_empty()
            && self.declared_licenses.is_empty()
            && self.description.is_empty()
            && self.homepage_url.is_empty()
            && self.binary_artifact.url.is_empty()
            && self.source_artifact.url.is_empty()
            && self.vcs.is_empty()
    }
}
