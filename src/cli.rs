use clap::Parser;

use crate::application::dto::OutputFormat;
use crate::resolution::domain::HashAlgorithm;

/// Resolve the dependency graph and package metadata of a Gradle project
#[derive(Parser, Debug)]
#[command(name = "gradle-resolve")]
#[command(version)]
#[command(
    about = "Resolve the dependency graph and package metadata of a Gradle project",
    long_about = None
)]
pub struct Args {
    /// Output format: json or markdown (defaults to json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to the Gradle project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Exclude scopes matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "test*" -e "checkstyle"
    #[arg(short = 'e', long = "exclude-scope", value_name = "PATTERN")]
    pub exclude_scope: Vec<String>,

    /// Gradle version to use instead of the project-declared one
    #[arg(long, value_name = "VERSION")]
    pub gradle_version: Option<String>,

    /// Checksum algorithm for artifact verification: sha1, sha256 or sha512
    /// (defaults to sha1)
    #[arg(long, value_name = "ALGORITHM")]
    pub checksum_algorithm: Option<HashAlgorithm>,

    /// Root of the local artifact repository (defaults to ~/.m2/repository)
    #[arg(long, value_name = "DIR")]
    pub repository_root: Option<String>,

    /// Exit with code 1 when the result contains ERROR issues
    #[arg(long)]
    pub fail_on_issues: bool,

    /// Path to a config file (defaults to gradle-resolve.config.yml in the
    /// project directory when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(args)
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["gradle-resolve"]);
        assert!(args.format.is_none());
        assert!(args.path.is_none());
        assert!(args.output.is_none());
        assert!(args.exclude_scope.is_empty());
        assert!(args.gradle_version.is_none());
        assert!(args.checksum_algorithm.is_none());
        assert!(!args.fail_on_issues);
    }

    #[test]
    fn test_format_markdown() {
        let args = parse(&["gradle-resolve", "-f", "markdown"]);
        assert_eq!(args.format, Some(OutputFormat::Markdown));
    }

    #[test]
    fn test_multiple_scope_excludes() {
        let args = parse(&[
            "gradle-resolve",
            "-e",
            "test*",
            "--exclude-scope",
            "checkstyle",
        ]);
        assert_eq!(
            args.exclude_scope,
            vec!["test*".to_string(), "checkstyle".to_string()]
        );
    }

    #[test]
    fn test_gradle_version_override() {
        let args = parse(&["gradle-resolve", "--gradle-version", "8.5"]);
        assert_eq!(args.gradle_version.as_deref(), Some("8.5"));
    }

    #[test]
    fn test_checksum_algorithm() {
        let args = parse(&["gradle-resolve", "--checksum-algorithm", "sha256"]);
        assert_eq!(args.checksum_algorithm, Some(HashAlgorithm::Sha256));
    }

    #[test]
    fn test_fail_on_issues_flag() {
        let args = parse(&["gradle-resolve", "--fail-on-issues"]);
        assert!(args.fail_on_issues);
    }
}
