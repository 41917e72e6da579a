//! fixtab command-line front end.
//!
//! Executes the scanned command stream against an owned configuration and an
//! output stream: configuration changes mutate the config in place, table
//! requests emit one block each with the configuration in effect at that
//! point. Blocks are written incrementally as they complete.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod scan;

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use fixtab_codegen::banner::{banner, VERSION};
use fixtab_codegen::{special, Emitter};
use fixtab_tables::special::Projection;
use fixtab_tables::{sample, Config};

use scan::{Command, Request, Setting};

/// Result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `-help` was requested; the usage text has been written.
    Help,
    /// Normal completion, carrying the final byte-address counter.
    Done(u32),
}

impl Outcome {
    /// Process exit status: 0 for help, the address counter otherwise.
    ///
    /// The counter is address bookkeeping for downstream placement tooling,
    /// not a pass/fail code; the OS truncates it to the platform exit-code
    /// width.
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Help => 0,
            Outcome::Done(address) => address as i32,
        }
    }
}

/// Executes the full run: scan, then walk the command stream.
///
/// The banner is written with the configuration in effect at the first
/// table request, or with the final configuration when the stream contains
/// no request. `-help` anywhere in the stream short-circuits to the usage
/// text alone.
///
/// # Errors
///
/// Returns scan failures before anything is written, and any I/O failure
/// writing to `out`.
pub fn run(args: &[String], out: &mut impl Write) -> Result<Outcome> {
    let commands = scan::scan(args)?;

    if commands.iter().any(|c| matches!(c, Command::Help)) {
        write!(out, "{}", usage())?;
        return Ok(Outcome::Help);
    }

    let mut config = Config::default();
    let mut emitter = Emitter::new();
    let mut banner_written = false;

    for command in &commands {
        match command {
            Command::Help => {}
            Command::Set(setting) => apply(setting, &mut config, &mut emitter),
            Command::Emit(request) => {
                if !banner_written {
                    write!(out, "{}", banner(&config, unix_time()))?;
                    banner_written = true;
                }
                write!(out, "{}", emit(request, &config, &mut emitter))?;
            }
        }
    }

    if !banner_written {
        write!(out, "{}", banner(&config, unix_time()))?;
    }
    Ok(Outcome::Done(emitter.address()))
}

/// Usage text printed by `-help` and on empty invocation.
#[must_use]
pub fn usage() -> String {
    format!(
        "fixtab (v{VERSION}) - fixed-point lookup-table source generator\n\
         Usage: fixtab [options] [tables]\n\
         Options:\n\
         \x20  -num    <x>      Entries count (precision, default 128)\n\
         \x20  -shift  <x>      Fixed-point shift bits (default 0)\n\
         \x20  -bytes  <x>      Bytes per entry (1: 8-bit, 2: 16-bit, default 2)\n\
         \x20  -prefix <x>      Table name prefix (0 to disable, default g_)\n\
         \x20  -format <x>      Output syntax (C or ASM, default C)\n\
         \x20  -at     <x>      Data start address (decimal or 0x-prefixed hex)\n\
         \x20  -help            This help\n\
         Tables:\n\
         \x20  sin              Sinus table [0:Pi*2[\n\
         \x20  cos              Cosinus table [0:Pi*2[\n\
         \x20  tan              Tangent table [-Pi/2:Pi/2]\n\
         \x20  asin             Arc-sinus table [-1:1]\n\
         \x20  acos             Arc-cosinus table [-1:1]\n\
         \x20  atan             Arc-tangent table [0:num]\n\
         \x20  sq               Square table [0:1]\n\
         \x20  sqrt             Square-root table [0:num[\n\
         \x20  map  A B         Map [0:num[ values to [A:B]\n\
         \x20  proj W H         3D projection tables (W/H: screen size)\n\
         \x20  rot              Rotation-angle table\n\
         \x20  equa A B C D E   Equation y=A+B*(C+x*D)^E\n"
    )
}

fn apply(setting: &Setting, config: &mut Config, emitter: &mut Emitter) {
    match setting {
        Setting::Entries(entries) => config.entries = *entries,
        Setting::Shift(shift) => config.shift = *shift,
        Setting::Bytes(bytes) => config.bytes = *bytes,
        Setting::Prefix(prefix) => config.prefix = prefix.clone(),
        Setting::Format(format) => config.format = *format,
        Setting::Address(address) => {
            config.address = Some(*address);
            emitter.set_address(*address);
        }
    }
}

fn emit(request: &Request, config: &Config, emitter: &mut Emitter) -> String {
    match request {
        Request::Table { op, map } => {
            let values = sample(op, config, *map);
            emitter.table(op, &values, config)
        }
        Request::Projection { width, height } => {
            let proj = Projection::new(*width, *height);
            let mut out =
                special::projection("ProjectionX", &proj.axis(proj.x_scale, config), config);
            out.push_str(&special::projection(
                "ProjectionY",
                &proj.axis(proj.y_scale, config),
                config,
            ));
            out
        }
        Request::Rotation => {
            let n = config.entries;
            let rows: Vec<(i32, Vec<u32>)> = ((1 - n)..n)
                .map(|x| (x, fixtab_tables::special::rotation_row(x, config)))
                .collect();
            special::rotation(&rows, config)
        }
        Request::Equation(eq) => special::equation(&eq.sample(config), config),
    }
}

fn unix_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
