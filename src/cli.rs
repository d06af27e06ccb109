/// CLI argument parsing and runtime configuration

use clap::{ArgAction, Parser};

use resource_report::core::stats_source::DEFAULT_DOCKER_BIN;
use resource_report::report::ReportFormat;

// Build timestamp injected at compile time
pub const VERSION_WITH_BUILD: &str = concat!(env!("CARGO_PKG_VERSION"), " (built: ", env!("BUILD_TIMESTAMP"), ")");

#[derive(Parser, Debug)]
#[command(name = "resource-report")]
#[command(author, version = VERSION_WITH_BUILD, about, long_about = None)]
#[command(after_help = "Examples:\n  resource-report\n  resource-report --json web\n  resource-report --html > report.html")]
pub struct Cli {
    /// Only report services whose name contains one of these strings
    pub services: Vec<String>,

    /// Output JSON (same as --format json)
    #[arg(long, conflicts_with_all = ["html", "format"])]
    pub json: bool,

    /// Output an HTML document (same as --format html)
    #[arg(long, conflicts_with = "format")]
    pub html: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Container CLI used to query stats
    #[arg(long, env = "RESOURCE_REPORT_DOCKER", default_value = DEFAULT_DOCKER_BIN)]
    pub docker: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Settings for one report run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub format: ReportFormat,
    pub filters: Vec<String>,
    pub docker_bin: String,
    pub color: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let format = if cli.json {
            ReportFormat::Json
        } else if cli.html {
            ReportFormat::Html
        } else {
            cli.format
        };

        Self {
            format,
            // Empty arguments would match every service
            filters: cli.services.into_iter().filter(|s| !s.is_empty()).collect(),
            docker_bin: cli.docker,
            color: !cli.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Config {
        let argv = std::iter::once("resource-report").chain(args.iter().copied());
        Config::from(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_no_arguments_reports_everything() {
        let config = config(&[]);
        assert_eq!(config.format, ReportFormat::Text);
        assert!(config.filters.is_empty());
        assert!(config.color);
    }

    #[test]
    fn test_format_shortcuts() {
        assert_eq!(config(&["--json"]).format, ReportFormat::Json);
        assert_eq!(config(&["--html", "web"]).format, ReportFormat::Html);
        assert_eq!(config(&["--format", "html"]).format, ReportFormat::Html);
    }

    #[test]
    fn test_conflicting_formats_rejected() {
        let argv = ["resource-report", "--json", "--html"];
        assert!(Cli::try_parse_from(argv).is_err());

        let argv = ["resource-report", "--json", "--format", "text"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_service_filters_keep_order() {
        let config = config(&["web", "", "cache", "--no-color"]);
        assert_eq!(config.filters, vec!["web", "cache"]);
        assert!(!config.color);
    }

    #[test]
    fn test_docker_override_and_verbosity() {
        let argv = ["resource-report", "--docker", "/usr/local/bin/podman", "-vv"];
        let cli = Cli::try_parse_from(argv).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(Config::from(cli).docker_bin, "/usr/local/bin/podman");
    }
}
