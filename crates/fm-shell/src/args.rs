//! Command Line

use std::path::PathBuf;

/// Usage line printed for `--help` and argument errors
pub const USAGE: &str = "usage: fm-shell [--config FILE] [URI...]";

/// Parsed command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// Shell configuration file
    pub config: Option<PathBuf>,
    /// Locations to visit in order; the first opens the window
    pub uris: Vec<String>,
    pub help: bool,
}

/// Command-line error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("{0} needs a value")]
    MissingValue(String),

    #[error("unknown option {0}")]
    UnknownOption(String),
}

impl Args {
    /// Parse arguments, program name excluded
    pub fn parse<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-c" | "--config" => {
                    let path = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "-h" | "--help" => parsed.help = true,
                "--" => parsed.uris.extend(args.by_ref()),
                _ if arg.starts_with('-') && arg.len() > 1 => {
                    return Err(ArgsError::UnknownOption(arg.clone()));
                }
                _ => parsed.uris.push(arg.clone()),
            }
        }

        Ok(parsed)
    }
}
