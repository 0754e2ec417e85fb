use crate::cli::Args;
use crate::errors::Result;
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// How changed files are written back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and rewrite the file in place.
    InPlace,
    /// Write a sibling temporary file and rename it over the target.
    Atomic,
}

/// What to do with a candidate that cannot be read or decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadErrorPolicy {
    /// Stop the whole run with the error.
    Abort,
    /// Log a warning and treat the file as unchanged.
    Skip,
}

/// The compiled base-name filter.
///
/// Keeps the text the operator typed so the report can echo it verbatim.
#[derive(Debug, Clone)]
pub struct FilePattern {
    raw: String,
    compiled: Pattern,
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

impl FilePattern {
    pub fn new(raw: &str) -> Result<Self> {
        Ok(Self {
            raw: raw.to_string(),
            compiled: Pattern::new(raw)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Tests a single file name, never a full path.
    pub fn matches_name(&self, name: &str) -> bool {
        self.compiled.matches_with(name, MATCH_OPTIONS)
    }
}

/// Immutable parameters of one run.
///
/// Built once from the command line and handed by reference to every phase.
#[derive(Debug, Clone)]
pub struct ReplaceConfig {
    search: String,
    replace: String,
    pattern: FilePattern,
    root: PathBuf,
    write_mode: WriteMode,
    create_backup: bool,
    read_errors: ReadErrorPolicy,
}

impl ReplaceConfig {
    /// Creates a config with the default write and error policies.
    ///
    /// Fails when `search` is empty or `pattern` is not a valid glob.
    pub fn new(
        search: impl Into<String>,
        replace: impl Into<String>,
        pattern: &str,
        root: impl Into<PathBuf>,
    ) -> Result<Self> {
        let search = search.into();
        if search.is_empty() {
            return Err("search text must not be empty".into());
        }
        Ok(Self {
            search,
            replace: replace.into(),
            pattern: FilePattern::new(pattern)?,
            root: root.into(),
            write_mode: WriteMode::InPlace,
            create_backup: false,
            read_errors: ReadErrorPolicy::Abort,
        })
    }

    pub fn from_args(args: &Args) -> Result<Self> {
        let write_mode = if args.atomic {
            WriteMode::Atomic
        } else {
            WriteMode::InPlace
        };
        let read_errors = if args.skip_unreadable {
            ReadErrorPolicy::Skip
        } else {
            ReadErrorPolicy::Abort
        };
        Ok(
            Self::new(&args.search, &args.replace, &args.pattern, &args.path)?
                .with_write_mode(write_mode)
                .with_backup(args.backup)
                .with_read_errors(read_errors),
        )
    }

    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    pub fn with_backup(mut self, create_backup: bool) -> Self {
        self.create_backup = create_backup;
        self
    }

    pub fn with_read_errors(mut self, policy: ReadErrorPolicy) -> Self {
        self.read_errors = policy;
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn replace(&self) -> &str {
        &self.replace
    }

    pub fn pattern(&self) -> &FilePattern {
        &self.pattern
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    pub fn create_backup(&self) -> bool {
        self.create_backup
    }

    pub fn read_errors(&self) -> ReadErrorPolicy {
        self.read_errors
    }
}
