/// ProgressReporter port for reporting progress during resolution
///
/// This port abstracts progress reporting (e.g., to stderr) to provide user
/// feedback while the Gradle session and the metadata resolution run.
///
/// Implementations must be `Send + Sync` because package resolution reports
/// progress from the bounded worker pool.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress with a position out of a known total
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
