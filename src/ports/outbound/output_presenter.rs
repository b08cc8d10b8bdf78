use crate::shared::Result;

/// OutputPresenter port for presenting the formatted resolution result
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the formatted result is presented.
pub trait OutputPresenter {
    /// Presents the formatted content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    /// - Disk space is insufficient
    fn present(&self, content: &str) -> Result<()>;
}
