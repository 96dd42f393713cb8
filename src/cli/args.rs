//! Command-line argument parsing for the solidlens CLI.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Language;

/// Overrides given on the command line for a dashboard run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// `--url <ws-url>`
    pub url: Option<String>,
    /// `--debounce-ms <n>`
    pub debounce_ms: Option<u64>,
    /// `--file <path>`: preload the snippet from a file
    pub file: Option<PathBuf>,
    /// `--language <name>`
    pub language: Option<Language>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    Run(RunOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

pub const USAGE: &str = "\
Usage: solidlens [OPTIONS]

Options:
  --url <ws-url>        Analyzer WebSocket endpoint
  --debounce-ms <n>     Quiet time before an edit is sent (milliseconds)
  --file <path>         Preload the editor from a file
  --language <name>     python, javascript, java or cpp
  -V, --version         Print version
  -h, --help            Print this help

Environment:
  SOLIDLENS_WS_URL, SOLIDLENS_DEBOUNCE_MS, SOLIDLENS_LOG";

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win over everything else on the line.
///
/// # Examples
///
/// ```
/// use solidlens::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["solidlens".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--url" => {
                options.url = Some(take_value(&flag, inline, &mut args)?);
            }
            "--debounce-ms" => {
                let value = take_value(&flag, inline, &mut args)?;
                let ms = value.parse::<u64>().map_err(|_| ArgsError::InvalidValue {
                    flag: flag.clone(),
                    value: value.clone(),
                })?;
                options.debounce_ms = Some(ms);
            }
            "--file" => {
                options.file = Some(PathBuf::from(take_value(&flag, inline, &mut args)?));
            }
            "--language" => {
                let value = take_value(&flag, inline, &mut args)?;
                let language = value
                    .parse::<Language>()
                    .map_err(|_| ArgsError::InvalidValue {
                        flag: flag.clone(),
                        value: value.clone(),
                    })?;
                options.language = Some(language);
            }
            _ => return Err(ArgsError::UnknownArgument(arg)),
        }
    }

    Ok(CliCommand::Run(options))
}

fn take_value<I>(flag: &str, inline: Option<String>, args: &mut I) -> Result<String, ArgsError>
where
    I: Iterator<Item = String>,
{
    match inline.or_else(|| args.next()) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ArgsError::MissingValue(flag.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        let mut all = vec!["solidlens".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["--url", "ws://x", "--help"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_no_args_runs_tui() {
        assert_eq!(parse(&[]), Ok(CliCommand::Run(RunOptions::default())));
    }

    #[test]
    fn test_parse_run_options() {
        let parsed = parse(&[
            "--url",
            "ws://localhost:9000/ws/analyze",
            "--debounce-ms=250",
            "--file",
            "snippet.py",
            "--language",
            "js",
        ]);
        assert_eq!(
            parsed,
            Ok(CliCommand::Run(RunOptions {
                url: Some("ws://localhost:9000/ws/analyze".to_string()),
                debounce_ms: Some(250),
                file: Some(PathBuf::from("snippet.py")),
                language: Some(Language::JavaScript),
            }))
        );
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse(&["--url"]),
            Err(ArgsError::MissingValue("--url".to_string()))
        );
        assert_eq!(
            parse(&["--file="]),
            Err(ArgsError::MissingValue("--file".to_string()))
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            parse(&["--debounce-ms", "soon"]),
            Err(ArgsError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse(&["--language", "cobol"]),
            Err(ArgsError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_unknown_argument() {
        assert_eq!(
            parse(&["--sync"]),
            Err(ArgsError::UnknownArgument("--sync".to_string()))
        );
    }
}
