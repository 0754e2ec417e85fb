use crate::config::ReplaceConfig;
use crate::errors::{Error, Result};
use ignore::WalkBuilder;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Walks the configured root and returns every file whose base name matches
/// the pattern.
///
/// Nothing is filtered out besides the pattern: hidden files and paths a
/// `.gitignore` would exclude are candidates too. Entries are sorted by file
/// name inside each directory, so the dry-run and apply phases (and repeated
/// runs over an unchanged tree) see the same order.
///
/// Symbolic links are not followed into directories. A link that resolves to
/// a regular file is a candidate. Directories that cannot be listed are
/// logged and skipped; a missing root is an error.
pub fn collect_candidates(config: &ReplaceConfig) -> Result<Vec<PathBuf>> {
    let root = config.root();
    fs::metadata(root).map_err(|e| Error::file_access(root, e))?;

    let mut walker = WalkBuilder::new(root);
    walker
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut candidates = Vec::new();
    for entry in walker.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if config.pattern().matches_name(&name) {
            candidates.push(path.to_path_buf());
        }
    }

    debug!(
        root = %root.display(),
        pattern = config.pattern().as_str(),
        count = candidates.len(),
        "collected candidates"
    );
    Ok(candidates)
}
