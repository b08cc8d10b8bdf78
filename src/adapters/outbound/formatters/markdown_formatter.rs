use crate::ports::outbound::ResultFormatter;
use crate::resolution::domain::{Package, ResolutionResult, Severity};
use crate::shared::Result;

/// Markdown table header for package information
const PACKAGE_TABLE_HEADER: &str = "| Package | Licenses | Homepage | Binary Checksum |\n";

/// Markdown table separator line
const PACKAGE_TABLE_SEPARATOR: &str = "|---------|----------|----------|-----------------|\n";

/// MarkdownFormatter adapter for a human-readable resolution report
///
/// This adapter implements the ResultFormatter port for Markdown format:
/// a project summary, one line per scope, the resolved package table and
/// the issue list.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_header(&self, result: &ResolutionResult, output: &mut String) {
        output.push_str("# Dependency Resolution Report\n\n");
        output.push_str(&format!("- Project: `{}`\n", result.project.id));
        if !result.project.vcs.is_empty() {
            output.push_str(&format!("- VCS: {}\n", result.project.vcs.url));
        }
        output.push_str(&format!(
            "- Generated: {} by {} {}\n\n",
            result.metadata.timestamp, result.metadata.tool_name, result.metadata.tool_version
        ));
    }

    fn render_scopes(&self, result: &ResolutionResult, output: &mut String) {
        output.push_str("## Scopes\n\n");
        if result.project.scopes.is_empty() {
            output.push_str("No scopes were resolved.\n\n");
            return;
        }
        for scope in &result.project.scopes {
            let node_count: usize = scope
                .dependencies
                .iter()
                .map(|root| root.node_count())
                .sum();
            output.push_str(&format!(
                "- `{}`: {} root dependencies, {} tree nodes\n",
                scope.name,
                scope.dependencies.len(),
                node_count
            ));
        }
        output.push('\n');
    }

    fn render_package_row(&self, package: &Package, output: &mut String) {
        let licenses = if package.declared_licenses.is_empty() {
            "-".to_string()
        } else {
            package
                .declared_licenses
                .iter()
                .map(|license| Self::escape_table_cell(license))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let homepage = if package.homepage_url.is_empty() {
            "-".to_string()
        } else {
            Self::escape_table_cell(&package.homepage_url)
        };
        let checksum = if package.binary_artifact.hash.is_unknown() {
            "unknown".to_string()
        } else {
            format!(
                "{} ({})",
                package.binary_artifact.hash.value, package.binary_artifact.hash.algorithm
            )
        };
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            Self::escape_table_cell(&package.id.coordinates()),
            licenses,
            homepage,
            checksum
        ));
    }

    fn render_packages(&self, result: &ResolutionResult, output: &mut String) {
        output.push_str(&format!("## Packages ({})\n\n", result.packages.len()));
        if result.packages.is_empty() {
            output.push_str("No external packages were found.\n\n");
            return;
        }
        output.push_str(PACKAGE_TABLE_HEADER);
        output.push_str(PACKAGE_TABLE_SEPARATOR);
        for package in &result.packages {
            self.render_package_row(package, output);
        }
        output.push('\n');
    }

    fn render_issues(&self, result: &ResolutionResult, output: &mut String) {
        output.push_str(&format!(
            "## Issues ({} errors, {} warnings)\n\n",
            result.error_count(),
            result.warning_count()
        ));
        if result.issues.is_empty() {
            output.push_str("No issues. The result is complete.\n");
            return;
        }
        for issue in &result.issues {
            let marker = match issue.severity {
                Severity::Error => "❌",
                Severity::Warning => "⚠️",
            };
            output.push_str(&format!(
                "- {} `{}`: {}\n",
                marker, issue.source, issue.message
            ));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for MarkdownFormatter {
    fn format(&self, result: &ResolutionResult) -> Result<String> {
        let mut output = String::new();
        self.render_header(result, &mut output);
        self.render_scopes(result, &mut output);
        self.render_packages(result, &mut output);
        self.render_issues(result, &mut output);
        Ok(output)
    }
}
