use crate::config::{ReplaceConfig, WriteMode};
use crate::errors::{Error, Result};
use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, trace};

/// Core engine for literal find-and-replace over file contents.
///
/// A `Replacer` borrows the search and replacement text from the run's
/// [`ReplaceConfig`] together with the write policy. It holds no per-file
/// state, so the preview and apply phases can share one instance.
pub struct Replacer<'a> {
    search: &'a str,
    replace: &'a str,
    write_mode: WriteMode,
    create_backup: bool,
}

/// The result of substituting one file's contents.
#[derive(Debug, PartialEq, Eq)]
pub struct Substitution<'c> {
    /// The contents after replacement. Borrowed when nothing was replaced.
    pub contents: Cow<'c, str>,
    /// `true` if the new contents differ from the original.
    pub changed: bool,
}

impl<'a> Replacer<'a> {
    pub fn new(config: &'a ReplaceConfig) -> Self {
        Self {
            search: config.search(),
            replace: config.replace(),
            write_mode: config.write_mode(),
            create_backup: config.create_backup(),
        }
    }

    /// Replaces every non-overlapping occurrence of the search text, scanning
    /// left to right and resuming after each match.
    ///
    /// `changed` compares contents rather than counting matches, so a search
    /// equal to its replacement never reports a change.
    pub fn compute<'c>(&self, contents: &'c str) -> Substitution<'c> {
        if !contents.contains(self.search) {
            return Substitution {
                contents: Cow::Borrowed(contents),
                changed: false,
            };
        }

        let replaced = contents.replace(self.search, self.replace);
        let changed = replaced != contents;
        Substitution {
            contents: Cow::Owned(replaced),
            changed,
        }
    }

    /// Substitutes `contents`, freshly read from `path`, and writes the result
    /// back when it differs.
    ///
    /// Returns `true` if the file was written.
    pub fn apply(&self, path: &Path, contents: &str) -> Result<bool> {
        let substitution = self.compute(contents);
        if !substitution.changed {
            trace!(path = %path.display(), "unchanged on apply");
            return Ok(false);
        }

        if self.create_backup {
            let backup = backup_path(path);
            fs::copy(path, &backup).map_err(|e| Error::file_access(&backup, e))?;
            debug!(backup = %backup.display(), "backup written");
        }

        match self.write_mode {
            WriteMode::InPlace => write_file(path, &substitution.contents)?,
            WriteMode::Atomic => write_file_atomic(path, &substitution.contents)?,
        }
        Ok(true)
    }
}

/// `<path>.bak`, built on the raw OS string so non UTF-8 names survive.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut backup = path.as_os_str().to_owned();
    backup.push(".bak");
    PathBuf::from(backup)
}

/// Reads the whole file as UTF-8 text.
pub fn read_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::file_access(path, e))?;
    String::from_utf8(bytes).map_err(|source| Error::Encoding {
        path: path.to_path_buf(),
        source,
    })
}

/// Truncates `path` and writes `contents` in its place.
///
/// A crash mid-write can leave the file truncated; see [`write_file_atomic`].
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| Error::file_access(path, e))
}

/// Writes `contents` to a temporary sibling of `path` and renames it over
/// the target, keeping the original permissions.
pub fn write_file_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| Error::file_access(parent, e))?;
    temp_file
        .write_all(contents.as_bytes())
        .map_err(|e| Error::file_access(temp_file.path(), e))?;

    let perms = fs::metadata(path)
        .map_err(|e| Error::file_access(path, e))?
        .permissions();
    fs::set_permissions(temp_file.path(), perms).map_err(|e| Error::file_access(temp_file.path(), e))?;

    temp_file.persist(path)?;
    Ok(())
}
