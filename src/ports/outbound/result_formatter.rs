use crate::resolution::domain::ResolutionResult;
use crate::shared::Result;

/// ResultFormatter port for rendering a resolution result
///
/// This port abstracts output formatting so the application core stays
/// independent of concrete output formats (JSON, Markdown, ...).
pub trait ResultFormatter {
    /// Renders the resolution result into the target format
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, result: &ResolutionResult) -> Result<String>;
}
