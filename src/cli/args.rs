//! Command-line argument parsing.
//!
//! Flags:
//!
//! - `--version` / `-V`: print the version and exit
//! - `--help` / `-h`: print usage and exit
//! - `--endpoint <url>` / `--endpoint=<url>`: posts endpoint override
//! - `--page-size <n>` / `--page-size=<n>`: posts per page override
//!
//! Overrides win over the `NEWSDECK_*` environment variables.

use crate::config::{BrowserConfig, ConfigError};

/// Settings given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub page_size: Option<usize>,
}

impl CliOverrides {
    /// Build the runtime config: defaults, then the environment, then these
    /// overrides, validated once at the end.
    pub fn resolve(self) -> Result<BrowserConfig, ConfigError> {
        BrowserConfig::from_env_with(self.endpoint, self.page_size)
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(CliOverrides),
    /// Arguments could not be parsed
    Invalid(String),
}

fn flag_value<I>(flag: &str, inline: Option<&str>, rest: &mut I) -> Result<String, String>
where
    I: Iterator<Item = String>,
{
    match inline {
        Some(value) => Ok(value.to_string()),
        None => rest.next().ok_or_else(|| format!("{} requires a value", flag)),
    }
}

/// Parse command-line arguments, program name included.
///
/// # Examples
///
/// ```
/// use newsdeck::cli::args::{parse_args, CliCommand, CliOverrides};
///
/// let args = vec!["newsdeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
///
/// let args = vec!["newsdeck".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::RunTui(CliOverrides::default()));
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value)),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--endpoint" => match flag_value(&flag, inline, &mut args) {
                Ok(url) => overrides.endpoint = Some(url),
                Err(e) => return CliCommand::Invalid(e),
            },
            "--page-size" => {
                let raw = match flag_value(&flag, inline, &mut args) {
                    Ok(raw) => raw,
                    Err(e) => return CliCommand::Invalid(e),
                };
                match raw.parse::<usize>() {
                    Ok(n) if n > 0 => overrides.page_size = Some(n),
                    _ => {
                        return CliCommand::Invalid(format!(
                            "--page-size must be a positive integer, got {:?}",
                            raw
                        ))
                    }
                }
            }
            other => return CliCommand::Invalid(format!("unknown argument: {}", other)),
        }
    }

    CliCommand::RunTui(overrides)
}

/// Usage text for `--help`.
pub fn usage() -> String {
    format!(
        "newsdeck {}\n\
         Browse a news feed in the terminal.\n\n\
         USAGE:\n    newsdeck [OPTIONS]\n\n\
         OPTIONS:\n\
         \x20   --endpoint <URL>     Posts endpoint (env: NEWSDECK_ENDPOINT)\n\
         \x20   --page-size <N>      Posts per page (env: NEWSDECK_PAGE_SIZE)\n\
         \x20   -h, --help           Print help\n\
         \x20   -V, --version        Print version\n\n\
         Logs are written to the local data directory; set NEWSDECK_LOG to change the filter.",
        super::VERSION
    )
}
