//! Command-line argument parsing.
//!
//! Flags are matched by hand; unknown arguments are ignored.

use std::path::PathBuf;

use crate::config::DashboardConfig;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Fetch the roster once and write the CSV without starting the TUI
    Export { dir: Option<PathBuf> },
    /// Run the TUI application (default)
    RunTui,
}

/// Command plus the flags that override configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// `--api-url`
    pub api_url: Option<String>,
}

impl CliArgs {
    /// Layer CLI overrides on top of `config`.
    pub fn apply(&self, mut config: DashboardConfig) -> DashboardConfig {
        if let Some(url) = &self.api_url {
            config.api_base_url = url.clone();
        }
        if let CliCommand::Export { dir: Some(dir) } = &self.command {
            config.export_dir = dir.clone();
        }
        config
    }
}

/// Parse command-line arguments.
///
/// # Examples
///
/// ```
/// use minidash::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["minidash".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: Iterator<Item = String>,
{
    let mut command = CliCommand::RunTui;
    let mut api_url = None;
    // Skip the program name
    let mut args = args.skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return with(CliCommand::Version, api_url),
            "--help" | "-h" => return with(CliCommand::Help, api_url),
            "--api-url" => api_url = args.next(),
            "--export" => {
                let dir = args.next_if(|next| !next.starts_with('-')).map(PathBuf::from);
                command = CliCommand::Export { dir };
            }
            other => {
                if let Some(url) = other.strip_prefix("--api-url=") {
                    api_url = Some(url.to_string());
                }
            }
        }
    }

    with(command, api_url)
}

fn with(command: CliCommand, api_url: Option<String>) -> CliArgs {
    CliArgs { command, api_url }
}

pub const USAGE: &str = "\
Usage: minidash [OPTIONS]

Options:
  --api-url <URL>   Base URL of the dashboard API (default http://localhost:8000)
  --export [DIR]    Fetch the roster once, write researchers_data.csv and exit
  -V, --version     Print version
  -h, --help        Print this help

Environment:
  MINIDASH_API_URL, MINIDASH_EXPORT_DIR, MINIDASH_REFRESH_SECS,
  MINIDASH_TIMEOUT_SECS, MINIDASH_RECOUNT, MINIDASH_LOG, RUST_LOG";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        let mut all = vec!["minidash".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]).command, CliCommand::Version);
        assert_eq!(parse(&["-V"]).command, CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["-h"]).command, CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        let args = parse(&[]);
        assert_eq!(args.command, CliCommand::RunTui);
        assert!(args.api_url.is_none());
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["--unknown"]).command, CliCommand::RunTui);
    }

    #[test]
    fn test_parse_api_url_forms() {
        assert_eq!(
            parse(&["--api-url", "http://a:1"]).api_url.as_deref(),
            Some("http://a:1")
        );
        assert_eq!(
            parse(&["--api-url=http://b:2"]).api_url.as_deref(),
            Some("http://b:2")
        );
    }

    #[test]
    fn test_parse_export_with_and_without_dir() {
        assert_eq!(
            parse(&["--export", "/tmp/out"]).command,
            CliCommand::Export {
                dir: Some(PathBuf::from("/tmp/out"))
            }
        );
        let args = parse(&["--export", "--api-url", "http://c"]);
        assert_eq!(args.command, CliCommand::Export { dir: None });
        assert_eq!(args.api_url.as_deref(), Some("http://c"));
    }

    #[test]
    fn test_apply_overrides_config() {
        let args = parse(&["--api-url", "http://x", "--export", "out"]);
        let config = args.apply(DashboardConfig::default());
        assert_eq!(config.api_base_url, "http://x");
        assert_eq!(config.export_dir, PathBuf::from("out"));

        let untouched = parse(&[]).apply(DashboardConfig::default());
        assert_eq!(untouched, DashboardConfig::default());
    }
}
