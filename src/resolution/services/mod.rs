/// Services layer - Pure transformation logic of the resolution pipeline
pub mod graph_builder;
pub mod scope_excludes;

pub use graph_builder::{DescriptorIndex, GraphBuildOutcome, GraphBuilder};
pub use scope_excludes::ScopeExcludes;
