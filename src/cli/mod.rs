//! CLI module for solidlens.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and usage display
//!
//! # Usage
//!
//! The CLI dispatcher should be called early in main() to handle command-line
//! flags before initializing the TUI:
//!
//! ```ignore
//! use solidlens::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&command) {
//!     // CLI command was executed, exit with result
//!     std::process::exit(if result.is_ok() { 0 } else { 1 });
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, RunOptions, USAGE};
pub use version::{handle_version_command, version_string, VERSION};

use color_eyre::Result;

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `Run` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
///
/// # Note
///
/// The `Version` command never returns as it calls `std::process::exit(0)`.
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            // This function never returns (calls exit)
            handle_version_command();
        }
        CliCommand::Help => {
            println!("{}\n\n{}", version_string(), USAGE);
            Some(Ok(()))
        }
        CliCommand::Run(_) => None,
    }
}
