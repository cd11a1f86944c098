//! Command-line options for the `toyfront` binary

use std::fmt;
use std::path::PathBuf;

/// Program analysed when no file is given on the command line
pub const SAMPLE_PROGRAM: &str = include_str!("../demos/sample.toy");

/// What the binary does with the parse result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Interactive viewer (default)
    Tui,
    /// Print the tree, or the diagnostics, to the console
    Print,
    /// Dump the token stream
    Tokens,
    /// Print the derivation trace
    Trace,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    /// Source file; `None` means the built-in sample program
    pub path: Option<PathBuf>,
}

/// Bad command line
#[derive(Debug)]
pub struct UsageError {
    pub message: String,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for UsageError {}

/// Parse arguments, program name already removed
pub fn parse_args<I>(args: I) -> Result<Options, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut mode = Mode::Tui;
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--tui" => mode = Mode::Tui,
            "--print" => mode = Mode::Print,
            "--tokens" => mode = Mode::Tokens,
            "--trace" => mode = Mode::Trace,
            "-h" | "--help" => {
                return Ok(Options {
                    mode: Mode::Help,
                    path: None,
                })
            }
            flag if flag.starts_with('-') => {
                return Err(UsageError {
                    message: format!("Unknown option '{}'", flag),
                });
            }
            file => {
                if path.is_some() {
                    return Err(UsageError {
                        message: format!("Unexpected extra argument '{}'", file),
                    });
                }
                path = Some(PathBuf::from(file));
            }
        }
    }

    Ok(Options { mode, path })
}

pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {0} [--tui | --print | --tokens | --trace] [file.toy]\n\
         \n\
         Options:\n  \
           --tui      Browse source, tree, diagnostics and trace (default)\n  \
           --print    Print the syntax tree, or every diagnostic\n  \
           --tokens   Print the token stream\n  \
           --trace    Print the derivation trace\n  \
           -h, --help Show this message\n\
         \n\
         Without a file the built-in sample program is analysed.\n\
         Examples:\n  \
           {0} demos/sample.toy\n  \
           {0} --print demos/errors.toy\n",
        program_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let options = parse_args(args(&[])).unwrap();

        assert_eq!(options.mode, Mode::Tui);
        assert_eq!(options.path, None);
    }

    #[test]
    fn test_mode_and_file() {
        let options = parse_args(args(&["--print", "demos/errors.toy"])).unwrap();

        assert_eq!(options.mode, Mode::Print);
        assert_eq!(options.path, Some(PathBuf::from("demos/errors.toy")));
    }

    #[test]
    fn test_last_mode_wins() {
        let options = parse_args(args(&["--tokens", "--trace"])).unwrap();
        assert_eq!(options.mode, Mode::Trace);
    }

    #[test]
    fn test_help_flag() {
        // Read left to right: a bad flag before -h is still an error
        let options = parse_args(args(&["--bogus", "-h"]));
        assert!(options.is_err());

        let options = parse_args(args(&["-h", "--bogus"])).unwrap();
        assert_eq!(options.mode, Mode::Help);
    }

    #[test]
    fn test_rejects_unknown_flag_and_extra_file() {
        let err = parse_args(args(&["--verbose"])).unwrap_err();
        assert_eq!(err.to_string(), "Unknown option '--verbose'");

        let err = parse_args(args(&["a.toy", "b.toy"])).unwrap_err();
        assert!(err.message.contains("b.toy"));
    }

    #[test]
    fn test_sample_program_is_embedded() {
        assert!(SAMPLE_PROGRAM.contains("int counter;"));
    }
}
