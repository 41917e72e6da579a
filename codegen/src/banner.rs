//! Run banner: program name, version, timestamp, and parameter summary.

use std::fmt::Write as FmtWrite;

use fixtab_tables::Config;

/// Program version, printed in the banner and the usage text.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: [&str; 6] = [
    "   ___ _       _        _     ",
    "  / __(_)_  __| |_ __ _| |__  ",
    " / _\\ | \\ \\/ /| __/ _` | '_ \\ ",
    "/ /   | |>  < | || (_| | |_) |",
    "\\/    |_/_/\\_\\ \\__\\__,_|_.__/ ",
    "                              ",
];

/// Renders the decorative run banner.
///
/// Every line is prefixed with the comment leader of the active output
/// format, so the banner is itself valid C or assembly source. The
/// parameter line spells the fixed-point layout as `Q<int>.<frac>`.
#[must_use]
pub fn banner(config: &Config, timestamp: u64) -> String {
    let leader = config.format.comment_leader();
    let bits = config.bytes * 8;
    let rule = "-".repeat(77);

    let mut out = String::new();
    let _ = writeln!(out, "{leader}{rule}");
    for (i, line) in LOGO.iter().enumerate() {
        if i == 0 {
            let _ = writeln!(out, "{leader} {line}  v{VERSION}");
        } else {
            let _ = writeln!(out, "{leader} {line}");
        }
    }
    let _ = writeln!(out, "{leader} Generated: {timestamp} (unix time)");
    let _ = writeln!(
        out,
        "{leader} Parameters: Entries={}, Bytes={} ({}-bits), Shift={} (Q{}.{})",
        config.entries,
        config.bytes,
        bits,
        config.shift,
        i64::from(bits) - i64::from(config.shift),
        config.shift
    );
    let _ = writeln!(out, "{leader}{rule}");
    out
}

#[cfg(test)]
mod tests {
    use fixtab_tables::{Config, OutputFormat};

    use super::*;

    #[test]
    fn c_banner_lines_are_comments() {
        let config = Config::default();
        let text = banner(&config, 0);
        assert!(text.lines().all(|line| line.starts_with("//")));
    }

    #[test]
    fn asm_banner_lines_are_comments() {
        let config = Config {
            format: OutputFormat::Asm,
            ..Config::default()
        };
        let text = banner(&config, 0);
        assert!(text.lines().all(|line| line.starts_with(';')));
    }

    #[test]
    fn parameter_summary() {
        let config = Config {
            entries: 64,
            bytes: 2,
            shift: 4,
            ..Config::default()
        };
        let text = banner(&config, 1_700_000_000);
        assert!(text.contains("Parameters: Entries=64, Bytes=2 (16-bits), Shift=4 (Q12.4)"));
        assert!(text.contains("Generated: 1700000000 (unix time)"));
    }
}
