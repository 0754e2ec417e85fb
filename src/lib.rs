//! `rrep` searches a directory tree for files whose name matches a glob and
//! replaces literal text in them.
//!
//! A run is one linear pass:
//!
//! - `scanner`: walks the root and collects candidate files.
//! - `replacer`: reads, substitutes and writes a single file.
//! - `report`: the operator-facing lines on standard output.
//! - `session`: drives preview, confirmation and apply over the candidates.
//!
//! All parameters live in an immutable [`ReplaceConfig`] built once from the
//! command line.

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod replacer;
pub mod report;
pub mod scanner;
pub mod session;

// Re-export main types for easier access by library users.
pub use config::{ReadErrorPolicy, ReplaceConfig, WriteMode};
pub use errors::{Error, Result};
pub use replacer::Replacer;
pub use session::{Outcome, Preview, Session};
