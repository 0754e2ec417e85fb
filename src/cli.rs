use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

/// Searches and replaces literal text in files recursively.
///
/// Every file under PATH whose name matches PATTERN is scanned for SEARCH.
/// The files that would change are listed first, and nothing is written
/// until the operator types `yes` at the prompt.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "rrep",
    version,
    about = "rrep - searches and replaces text in files recursively",
    long_about = "rrep - searches and replaces text in files recursively.

Every file under PATH whose base name matches PATTERN is searched for the
literal SEARCH text. Files that would change are listed first; nothing is
written until you type 'yes' at the prompt.

EXAMPLES:
  rrep 'unsigned char' uint8_t '*.c*' .      # Retype C sources
  rrep --backup TODO DONE '*.md' docs/        # Keep .bak copies
  rrep -- -old -new                           # Search text starting with '-'"
)]
pub struct Args {
    /// The literal text to find.
    pub search: String,

    /// The literal text to substitute in. May be empty.
    pub replace: String,

    /// Shell glob matched against file base names.
    #[arg(default_value = "*")]
    pub pattern: String,

    /// Root of the recursive walk.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Write through a temporary file and rename it over the target.
    #[arg(long)]
    pub atomic: bool,

    /// Copy each file to `<file>.bak` before overwriting it.
    #[arg(long)]
    pub backup: bool,

    /// Warn about unreadable or non UTF-8 files and leave them alone instead of aborting.
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Verbosity of the diagnostics written to standard error.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

/// Diagnostic verbosity levels accepted by `--log-level`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Outcome of command-line parsing.
#[derive(Debug)]
pub enum Parsed {
    /// Arguments are complete; run the substitution.
    Run(Args),
    /// The positional argument count is wrong; show the usage text.
    Usage,
}

/// Parses the process arguments.
pub fn parse_args() -> Result<Parsed, clap::Error> {
    parse_args_from(std::env::args_os())
}

/// Parses an explicit argument list, first element being the program name.
///
/// A missing `<search>`/`<replace>` or a fifth positional maps to
/// [`Parsed::Usage`]. Help, version, unknown flags and malformed option
/// values stay clap errors so the caller can let clap print and exit.
pub fn parse_args_from<I, T>(args: I) -> Result<Parsed, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => Ok(Parsed::Run(args)),
        Err(e) if is_usage_error(&e) => Ok(Parsed::Usage),
        Err(e) => Err(e),
    }
}

/// A missing required positional, or an unexpected value that is not
/// flag-shaped (a fifth positional). Unknown flags stay errors so clap can
/// say what was wrong.
fn is_usage_error(e: &clap::Error) -> bool {
    match e.kind() {
        ErrorKind::MissingRequiredArgument => true,
        ErrorKind::UnknownArgument => match e.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(arg)) => !arg.starts_with('-'),
            _ => false,
        },
        _ => false,
    }
}

/// The usage message printed for a wrong number of positional arguments.
pub fn usage(program: &str) -> String {
    format!(
        "rrep - searches and replaces text in files recursively\n\
         \n\
         Usage: {program} <search> <replace> [pattern] [path]\n\
         \n\
         Examples:\n\
         \n\
         {program} 'unsigned char' uint8_t '*.c*' .\n"
    )
}
