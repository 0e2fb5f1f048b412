//! Command-line interface.
//!
//! Flags are handled before the terminal is touched:
//!
//! ```ignore
//! use newsdeck::cli::{parse_args, run_cli_command};
//!
//! let overrides = run_cli_command(parse_args(std::env::args()));
//! // only reached for CliCommand::RunTui
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, usage, CliCommand, CliOverrides};
pub use version::{handle_version_command, version_string, VERSION};

/// Run a CLI command if applicable.
///
/// Returns the overrides for `RunTui`; every other command prints its output
/// and exits the process.
pub fn run_cli_command(command: CliCommand) -> CliOverrides {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", usage());
            std::process::exit(0)
        }
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, usage());
            std::process::exit(2)
        }
        CliCommand::RunTui(overrides) => overrides,
    }
}
