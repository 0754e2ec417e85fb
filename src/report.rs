//! Operator-facing output.
//!
//! Everything here goes to the writer handed to [`Report::new`] (standard
//! output in the binary). Diagnostics never pass through it; they are
//! emitted with `tracing` on standard error.

use crate::config::ReplaceConfig;
use crate::errors::Result;
use std::io::Write;
use std::path::Path;

/// The fixed warning shown before the confirmation prompt.
pub const WARNING: &str = "WARNING!!! THIS IS DANGEROUS! BACKUP ALL CHANGES PRIOR!";

/// The prompt written (without a newline) before reading the answer.
pub const PROMPT: &str = "Type 'yes' to continue: ";

/// Printed instead of the apply phase when the operator declines.
pub const ABORTED: &str = "Operation aborted.";

/// Writes the report lines of a run.
pub struct Report<W: Write> {
    out: W,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn would_modify(&mut self, path: &Path) -> Result<()> {
        writeln!(self.out, "{} would be modified.", path.display())?;
        Ok(())
    }

    /// Writes the count line, the parameter echo and the warning.
    pub fn summary(&mut self, changed: usize, total: usize, config: &ReplaceConfig) -> Result<()> {
        writeln!(self.out, "{changed}/{total} files about to be modified!")?;
        writeln!(self.out)?;
        writeln!(self.out, "Replace parameters:")?;
        writeln!(self.out, "FIND: {}", config.search())?;
        writeln!(self.out, "REPL: {}", config.replace())?;
        writeln!(self.out, "PATTERN: {}", config.pattern().as_str())?;
        writeln!(self.out)?;
        writeln!(self.out, "{WARNING}")?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Writes the prompt and flushes so it shows before input is read.
    pub fn prompt(&mut self) -> Result<()> {
        write!(self.out, "{PROMPT}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn modified(&mut self, path: &Path) -> Result<()> {
        writeln!(self.out, "{} has been modified.", path.display())?;
        Ok(())
    }

    pub fn aborted(&mut self) -> Result<()> {
        writeln!(self.out, "{ABORTED}")?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
