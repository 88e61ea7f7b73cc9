use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use log::LevelFilter;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::fence::{DEFAULT_LANGUAGE, FenceMarkers};

/// Fallback when argv[0] is missing or has no file name
pub const DEFAULT_PROGRAM_NAME: &str = "mdcode";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Extract fenced code blocks from a Markdown file",
    long_about = "Copies every line between a '~~~~cpp' line and the next '~~~~' line from INFILE to OUTFILE. \
                  Marker lines and surrounding prose are dropped. Options such as --lang, -v and -q are not \
                  counted among the two arguments; a path starting with '-' is taken as a file name."
)]
pub struct Cli {
    /// Markdown file to read
    #[arg(value_name = "INFILE", allow_hyphen_values = true)]
    pub input: PathBuf,

    /// File to write the extracted code to (created or truncated)
    #[arg(value_name = "OUTFILE", allow_hyphen_values = true)]
    pub output: PathBuf,

    /// Language tag of the opening fence (`~~~~<LANG>`)
    #[arg(long, value_name = "LANG", default_value = DEFAULT_LANGUAGE, value_parser = NonEmptyStringValueParser::new())]
    pub lang: String,

    /// Show detailed output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Outcome of parsing the command line
#[derive(Debug)]
pub enum ParsedArgs {
    Run(Cli),
    /// Help or version was requested; clap prints it and exits
    Info(clap::Error),
    /// Anything else, reported with the short usage line
    Usage,
}

impl Cli {
    pub fn parse_args<I, T>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => ParsedArgs::Run(cli),
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                ParsedArgs::Info(err)
            }
            Err(err) => {
                log::debug!("[mdcode] Argument error: {:?}", err.kind());
                ParsedArgs::Usage
            }
        }
    }

    pub fn markers(&self) -> FenceMarkers {
        FenceMarkers::for_language(&self.lang)
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Warn
        }
    }
}

/// File name of argv[0], as shown in the usage line
pub fn program_name(arg0: Option<&OsString>) -> String {
    arg0.and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} INFILE OUTFILE")
}
