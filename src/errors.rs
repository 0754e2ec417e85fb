use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in `rrep`.
///
/// Wrong argument counts are not represented here: the binary answers them
/// with the usage text and a clean exit.
#[derive(Error, Debug)]
pub enum Error {
    /// A candidate file could not be opened, read or written.
    #[error("Cannot access {path}")]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A candidate file's contents are not valid UTF-8.
    #[error("Cannot decode {path} as UTF-8")]
    Encoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// The glob pattern could not be compiled.
    #[error("Invalid file name pattern")]
    Pattern(#[from] glob::PatternError),

    /// An error related to persisting a temporary file.
    #[error("Cannot persist temporary file")]
    Persist(#[from] tempfile::PersistError),

    /// Terminal I/O (report output or confirmation input) failed.
    #[error("Terminal I/O failed")]
    Io(#[from] std::io::Error),

    /// The invocation values are unusable.
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// `true` for failures that concern reading a single candidate file.
    ///
    /// These are the errors `--skip-unreadable` downgrades to warnings.
    pub fn is_unreadable_file(&self) -> bool {
        matches!(self, Error::FileAccess { .. } | Error::Encoding { .. })
    }
}

/// A convenient type alias for `Result<T, rrep::errors::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Config(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Config(s.to_string())
    }
}
