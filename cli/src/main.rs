//! `fixtab` - fixed-point lookup-table source generator.
//!
//! Scans the argument list as an ordered command stream and writes one
//! source-code block per table request to stdout. The process exit status
//! on normal completion is the final byte-address counter (see
//! `fixtab_cli::Outcome`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::Write;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        eprintln!("Error: not enough parameters");
        print!("{}", fixtab_cli::usage());
        process::exit(0);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match fixtab_cli::run(&args, &mut out) {
        Ok(outcome) => {
            let _ = out.flush();
            process::exit(outcome.exit_code());
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    }
}
