//! Rendering for the projection, rotation, and equation generators.
//!
//! These blocks are emitted as C declarations regardless of the configured
//! output format, carry no placement annotation, and leave the byte-address
//! counter untouched. Downstream placement tooling accounts for them
//! separately.

use std::fmt::Write as FmtWrite;

use fixtab_tables::Config;

use crate::emit::{c_type, hex};

/// Renders a projection-axis block (`…ProjectionX<N>` or `…ProjectionY<N>`).
#[must_use]
pub fn projection(axis_name: &str, values: &[u32], config: &Config) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "static const signed {} {}{}{}[{}] =\n{{",
        c_type(config.bytes),
        config.prefix,
        axis_name,
        config.entries,
        values.len()
    );
    for (i, value) in values.iter().enumerate() {
        if i % 8 == 0 {
            out.push('\t');
        }
        let _ = write!(out, "{}, ", hex(*value, config.bytes));
        if i % 8 == 7 || i == values.len() - 1 {
            out.push('\n');
        }
    }
    out.push_str("};\n");
    out
}

/// Renders the rotation grid.
///
/// Each grid row gets a `/* x=<i> */` comment line followed by all of its
/// `2N-1` values on a single line; the declared size is the total entry
/// count `(2N-1)^2`. The element type carries no sign keyword.
#[must_use]
pub fn rotation(rows: &[(i32, Vec<u32>)], config: &Config) -> String {
    let total: usize = rows.iter().map(|(_, row)| row.len()).sum();

    let mut out = String::new();
    let _ = write!(
        out,
        "static const {} {}Rotation{}[{}] =\n{{\n\t",
        c_type(config.bytes),
        config.prefix,
        config.entries,
        total
    );
    for (x, row) in rows {
        let _ = write!(out, "/* x={x} */\n\t");
        for value in row {
            let _ = write!(out, "{}, ", hex(*value, config.bytes));
        }
        out.push_str("\n\t");
    }
    out.push_str("\n};\n");
    out
}

/// Renders the equation block.
///
/// Layout matches the projection block except for the row-break rule: no
/// newline follows the final value, so the closing brace shares its line.
#[must_use]
pub fn equation(values: &[u32], config: &Config) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "static const signed {} {}Equa{}[{}] =\n{{",
        c_type(config.bytes),
        config.prefix,
        config.entries,
        values.len()
    );
    for (i, value) in values.iter().enumerate() {
        if i % 8 == 0 {
            out.push('\t');
        }
        let _ = write!(out, "{}, ", hex(*value, config.bytes));
        if i % 8 == 7 && i < values.len() - 1 {
            out.push('\n');
        }
    }
    out.push_str("};\n");
    out
}
