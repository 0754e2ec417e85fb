use crate::config::{ReadErrorPolicy, ReplaceConfig};
use crate::errors::Result;
use crate::replacer::{self, Replacer};
use crate::report::Report;
use crate::scanner;
use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The exact answer that unlocks the apply phase.
pub const CONFIRMATION: &str = "yes";

/// What the dry-run phase found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Every candidate file, in walk order.
    pub candidates: Vec<PathBuf>,
    /// The candidates whose contents would change, in the same order.
    pub changed: Vec<PathBuf>,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The operator confirmed; these files were written.
    Applied { modified: Vec<PathBuf> },
    /// The operator declined; nothing was written.
    Aborted,
}

/// One interactive run: discover, preview, confirm, apply.
///
/// The input and output are injected so the whole exchange can be driven
/// from memory.
pub struct Session<'a, R: BufRead, W: Write> {
    config: &'a ReplaceConfig,
    replacer: Replacer<'a>,
    input: R,
    report: Report<W>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(config: &'a ReplaceConfig, input: R, output: W) -> Self {
        Self {
            config,
            replacer: Replacer::new(config),
            input,
            report: Report::new(output),
        }
    }

    /// Runs the full sequence.
    ///
    /// No file is written before the operator answers the prompt.
    pub fn run(&mut self) -> Result<Outcome> {
        let candidates = scanner::collect_candidates(self.config)?;
        let preview = self.preview(candidates)?;

        self.report
            .summary(preview.changed.len(), preview.candidates.len(), self.config)?;
        self.report.prompt()?;

        if !read_confirmation(&mut self.input)? {
            self.report.aborted()?;
            info!("operator declined, no files written");
            return Ok(Outcome::Aborted);
        }

        let modified = self.apply(&preview.candidates)?;
        info!(
            modified = modified.len(),
            total = preview.candidates.len(),
            "apply finished"
        );
        Ok(Outcome::Applied { modified })
    }

    /// Dry-run phase: computes which candidates would change and prints one
    /// line for each. Reads only.
    ///
    /// With backups enabled, a candidate that is the `.bak` of another
    /// candidate is dropped from the run: apply overwrites it with the
    /// other file's original before it would be reached.
    pub fn preview(&mut self, candidates: Vec<PathBuf>) -> Result<Preview> {
        let candidates = if self.config.create_backup() {
            without_backups(candidates)
        } else {
            candidates
        };

        let mut changed = Vec::new();
        for path in &candidates {
            let Some(contents) = self.read(path)? else {
                continue;
            };
            if self.replacer.compute(&contents).changed {
                self.report.would_modify(path)?;
                changed.push(path.clone());
            }
        }
        Ok(Preview {
            candidates,
            changed,
        })
    }

    /// Apply phase: re-reads every candidate, recomputes the substitution and
    /// writes the ones that change.
    ///
    /// The dry-run result is not reused, so a file edited between the two
    /// phases is handled according to its current contents.
    pub fn apply(&mut self, candidates: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut modified = Vec::new();
        for path in candidates {
            let Some(contents) = self.read(path)? else {
                continue;
            };
            if self.replacer.apply(path, &contents)? {
                self.report.modified(path)?;
                modified.push(path.clone());
            }
        }
        Ok(modified)
    }

    pub fn into_output(self) -> W {
        self.report.into_inner()
    }

    /// Reads a candidate, downgrading read and decode failures to a warning
    /// when the config asks for it.
    fn read(&self, path: &Path) -> Result<Option<String>> {
        match replacer::read_file(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.is_unreadable_file() && self.config.read_errors() == ReadErrorPolicy::Skip => {
                warn!(error = %e, "skipping file");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

fn without_backups(candidates: Vec<PathBuf>) -> Vec<PathBuf> {
    let backups: HashSet<PathBuf> = candidates.iter().map(|p| replacer::backup_path(p)).collect();
    candidates
        .into_iter()
        .filter(|path| {
            let is_backup = backups.contains(path);
            if is_backup {
                debug!(path = %path.display(), "backup of another candidate, left out");
            }
            !is_backup
        })
        .collect()
}

/// Reads one line and reports whether it is exactly `yes`.
///
/// Only the line terminator is stripped. End of input counts as a refusal.
pub fn read_confirmation<R: BufRead>(input: &mut R) -> Result<bool> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }

    let answer = match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => &line,
    };
    Ok(answer == CONFIRMATION)
}
