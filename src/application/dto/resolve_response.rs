use crate::resolution::domain::ResolutionResult;

/// ResolveResponse - Internal response DTO from the resolution use case
///
/// This DTO carries the complete resolution result, which adapters can
/// then format into the appropriate output format.
#[derive(Debug, Clone)]
pub struct ResolveResponse {
    pub result: ResolutionResult,
}

impl ResolveResponse {
    pub fn new(result: ResolutionResult) -> Self {
        Self { result }
    }
}
