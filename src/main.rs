//! The main entry point for the `rrep` command-line application.

use rrep::cli::{self, Parsed};
use rrep::{ReplaceConfig, Session, logging};
use std::io;
use std::path::Path;
use std::process;

fn main() -> anyhow::Result<()> {
    let args = match cli::parse_args() {
        Ok(Parsed::Run(args)) => args,
        Ok(Parsed::Usage) => {
            print!("{}", cli::usage(&program_name()));
            process::exit(0);
        }
        Err(e) => e.exit(),
    };

    logging::initialize(args.log_level);

    let config = ReplaceConfig::from_args(&args)?;
    let stdin = io::stdin();
    let mut session = Session::new(&config, stdin.lock(), io::stdout().lock());
    session.run()?;
    Ok(())
}

/// The name the binary was invoked as, for the usage text.
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "rrep".to_string())
}
