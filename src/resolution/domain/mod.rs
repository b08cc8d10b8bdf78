/// Domain model of the resolution pipeline.
///
/// These are the tool-agnostic value objects that outlive a resolution call:
/// identifiers, reference trees, scopes, packages and issues. Raw tool output
/// never leaks past the graph builder.
pub mod identifier;
pub mod issue;
pub mod package;
pub mod project;
pub mod reference;
pub mod result;
pub mod scope;

pub use identifier::Identifier;
pub use issue::{Issue, Severity};
pub use package::{Hash, HashAlgorithm, Package, RemoteArtifact, UNKNOWN_HASH};
pub use project::{Project, VcsInfo};
pub use reference::{Linkage, PackageReference};
pub use result::{ResolutionMetadata, ResolutionResult};
pub use scope::Scope;
