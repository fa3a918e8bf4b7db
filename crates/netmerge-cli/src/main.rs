//! netmerge
//!
//! Consolidates FPGA net groups with identical connection patterns.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use netmerge_cli::{init_tracing, run, Args};

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            // Usage errors exit with 1 rather than clap's default of 2. As in
            // clap's own `exit`, a failed write of the message is ignored.
            err.print().ok();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    init_tracing(args.verbose);

    let stdout = std::io::stdout();
    run(&args, &mut stdout.lock())?;

    Ok(())
}
