use gradle_resolve::adapters::outbound::console::StderrProgressReporter;
use gradle_resolve::adapters::outbound::gradle::GradleToolingConnector;
use gradle_resolve::adapters::outbound::maven::{CachingDescriptorSource, MavenLocalRepository};
use gradle_resolve::adapters::outbound::network::HttpChecksumClient;
use gradle_resolve::application::dto::{OutputFormat, ResolveRequest};
use gradle_resolve::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use gradle_resolve::application::use_cases::ResolveProjectUseCase;
use gradle_resolve::cli::Args;
use gradle_resolve::config::{self, ConfigFile};
use gradle_resolve::resolution::domain::HashAlgorithm;
use gradle_resolve::shared::error::{ExitCode, ResolveError};
use gradle_resolve::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;
use std::time::Duration;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);
    validate_project_path(&project_path)?;

    // Load config file: explicit path wins, otherwise discover in the project
    let config_file = match &args.config {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(&project_path)?,
    }
    .unwrap_or_default();

    let settings = EffectiveSettings::merge(&args, &config_file)?;

    // Create adapters (Dependency Injection)
    let tooling_connector = GradleToolingConnector::new();
    let descriptor_source = CachingDescriptorSource::new(match &settings.repository_root {
        Some(root) => MavenLocalRepository::new(PathBuf::from(root)),
        None => MavenLocalRepository::discover(),
    });
    let checksum_fetcher = HttpChecksumClient::new()?;
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = ResolveProjectUseCase::new(
        tooling_connector,
        descriptor_source,
        checksum_fetcher,
        progress_reporter,
    );

    // Execute use case
    let request = ResolveRequest::new(
        project_path,
        settings.gradle_version.clone(),
        settings.excluded_scopes.clone(),
        settings.checksum_algorithm,
        settings.timeout,
    );
    let response = use_case.execute(request).await?;
    let result = &response.result;

    // Format and present the result
    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(result)?;

    let presenter = PresenterFactory::create(match args.output {
        Some(output_path) => PresenterType::File(PathBuf::from(output_path)),
        None => PresenterType::Stdout,
    });
    presenter.present(&formatted_output)?;

    // Issue summary with severity coloring
    if result.error_count() > 0 {
        eprintln!(
            "{}",
            format!("❗ {} resolution error(s)", result.error_count()).red()
        );
    }
    if result.warning_count() > 0 {
        eprintln!(
            "{}",
            format!("⚠️  {} warning(s)", result.warning_count()).yellow()
        );
    }

    if settings.fail_on_issues && result.has_errors() {
        return Ok(ExitCode::IssuesDetected);
    }
    Ok(ExitCode::Success)
}

/// CLI arguments merged with the config file; CLI always wins.
struct EffectiveSettings {
    format: OutputFormat,
    gradle_version: Option<String>,
    excluded_scopes: Vec<String>,
    checksum_algorithm: HashAlgorithm,
    repository_root: Option<String>,
    timeout: Duration,
    fail_on_issues: bool,
}

impl EffectiveSettings {
    fn merge(args: &Args, config: &ConfigFile) -> Result<Self> {
        let format = match (&args.format, &config.format) {
            (Some(format), _) => *format,
            (None, Some(raw)) => OutputFormat::from_str(raw)
                .map_err(|e| anyhow::anyhow!("Invalid config format: {}", e))?,
            (None, None) => OutputFormat::Json,
        };

        let checksum_algorithm = match (&args.checksum_algorithm, &config.checksum_algorithm) {
            (Some(algorithm), _) => *algorithm,
            (None, Some(raw)) => HashAlgorithm::from_str(raw)
                .map_err(|e| anyhow::anyhow!("Invalid config checksum_algorithm: {}", e))?,
            (None, None) => HashAlgorithm::Sha1,
        };

        // Exclusions combine: the config holds the project's standing list,
        // the CLI adds one-off patterns
        let mut excluded_scopes = config.excluded_scopes.clone().unwrap_or_default();
        excluded_scopes.extend(args.exclude_scope.iter().cloned());

        Ok(Self {
            format,
            gradle_version: args
                .gradle_version
                .clone()
                .or_else(|| config.gradle_version.clone()),
            excluded_scopes,
            checksum_algorithm,
            repository_root: args
                .repository_root
                .clone()
                .or_else(|| config.repository_root.clone()),
            timeout: config
                .timeout_seconds
                .map(Duration::from_secs)
                .unwrap_or(gradle_resolve::ports::outbound::DEFAULT_SESSION_TIMEOUT),
            fail_on_issues: args.fail_on_issues || config.fail_on_issues.unwrap_or(false),
        })
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ResolveError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| ResolveError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(ResolveError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(ResolveError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_project_path(temp_dir.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let nonexistent_path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let result = validate_project_path(&nonexistent_path);
        assert!(result.is_err());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test_file.txt");
        fs::write(&file_path, "test content").unwrap();

        let result = validate_project_path(&file_path);
        assert!(result.is_err());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Not a directory"));
    }

    #[test]
    fn test_merge_cli_wins_over_config() {
        let args = Args::parse_from(["gradle-resolve", "-f", "json", "--gradle-version", "9.0"]);
        let config = ConfigFile {
            format: Some("markdown".to_string()),
            gradle_version: Some("8.5".to_string()),
            ..Default::default()
        };

        let settings = EffectiveSettings::merge(&args, &config).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.gradle_version.as_deref(), Some("9.0"));
    }

    #[test]
    fn test_merge_config_fills_cli_gaps() {
        let args = Args::parse_from(["gradle-resolve"]);
        let config = ConfigFile {
            format: Some("markdown".to_string()),
            checksum_algorithm: Some("sha512".to_string()),
            timeout_seconds: Some(120),
            fail_on_issues: Some(true),
            ..Default::default()
        };

        let settings = EffectiveSettings::merge(&args, &config).unwrap();
        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.checksum_algorithm, HashAlgorithm::Sha512);
        assert_eq!(settings.timeout, Duration::from_secs(120));
        assert!(settings.fail_on_issues);
    }

    #[test]
    fn test_merge_scope_excludes_combine() {
        let args = Args::parse_from(["gradle-resolve", "-e", "bench*"]);
        let config = ConfigFile {
            excluded_scopes: Some(vec!["test*".to_string()]),
            ..Default::default()
        };

        let settings = EffectiveSettings::merge(&args, &config).unwrap();
        assert_eq!(
            settings.excluded_scopes,
            vec!["test*".to_string(), "bench*".to_string()]
        );
    }

    #[test]
    fn test_merge_defaults() {
        let args = Args::parse_from(["gradle-resolve"]);
        let settings = EffectiveSettings::merge(&args, &ConfigFile::default()).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.checksum_algorithm, HashAlgorithm::Sha1);
        assert!(!settings.fail_on_issues);
    }

    #[test]
    fn test_merge_invalid_config_format_is_an_error() {
        let args = Args::parse_from(["gradle-resolve"]);
        let config = ConfigFile {
            format: Some("yaml".to_string()),
            ..Default::default()
        };
        assert!(EffectiveSettings::merge(&args, &config).is_err());
    }
}
