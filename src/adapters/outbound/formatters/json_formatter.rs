use crate::ports::outbound::ResultFormatter;
use crate::resolution::domain::ResolutionResult;
use crate::shared::Result;

/// JsonFormatter adapter for serializing the resolution result
///
/// This adapter implements the ResultFormatter port for JSON output. The
/// document shape follows the domain model directly so downstream license
/// and vulnerability tooling can consume it without an extra mapping layer.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for JsonFormatter {
    fn format(&self, result: &ResolutionResult) -> Result<String> {
        let mut output = serde_json::to_string_pretty(result)
            .map_err(|e| anyhow::anyhow!("Failed to serialize resolution result: {}", e))?;
        output.push('\n');
        Ok(output)
    }
}
