//! Standard table rendering: C array declarations and assembly data blocks.

use std::fmt::Write as FmtWrite;

use fixtab_tables::{Config, Operator, OutputFormat};

use crate::emit::{c_type, hex, Emitter};

impl Emitter {
    /// Renders one standard table block.
    ///
    /// C mode emits a block comment, a `const` array declaration (with an
    /// `__at(0x…)` placement prefix when a start address is configured), and
    /// 8 hex values per row. Assembly mode emits a comment, a label, and
    /// `.db`/`.dw` rows. The range comment closes with `]` when the
    /// operator's domain is upper-inclusive and `[` otherwise.
    ///
    /// In C mode the byte-address counter advances by the byte width per
    /// value; assembly mode leaves it untouched.
    #[must_use]
    pub fn table(&mut self, op: &Operator, values: &[u32], config: &Config) -> String {
        let mut out = String::new();
        let bracket = if op.upper_inclusive { "]" } else { "[" };

        match config.format {
            OutputFormat::C => {
                let _ = writeln!(out, "\n// {} table. Range [{}{}", op.name, op.note, bracket);
                if config.address.is_some() {
                    let _ = write!(out, "__at(0x{:X}) ", self.address());
                }
                let sign = if op.signed { "signed" } else { "unsigned" };
                let _ = writeln!(
                    out,
                    "const {sign} {} {}{}{}[{}] =\n{{",
                    c_type(config.bytes),
                    config.prefix,
                    op.name,
                    config.entries,
                    values.len()
                );

                for (i, value) in values.iter().enumerate() {
                    if i % 8 == 0 {
                        out.push('\t');
                    }
                    let _ = write!(out, "{}, ", hex(*value, config.bytes));
                    self.advance(config.bytes);
                    if i % 8 == 7 || i == values.len() - 1 {
                        out.push('\n');
                    }
                }
                out.push_str("};\n");
            }
            OutputFormat::Asm => {
                let _ = writeln!(out, "\n; {} table. Range [{}{}", op.name, op.note, bracket);
                let _ = writeln!(out, "{}{}{}:", config.prefix, op.name, config.entries);
                let directive = if config.bytes == 1 { "db" } else { "dw" };

                for (i, value) in values.iter().enumerate() {
                    if i % 8 == 0 {
                        let _ = write!(out, "\t.{directive} ");
                    }
                    let _ = write!(out, "{}", hex(*value, config.bytes));
                    if i % 8 == 7 || i == values.len() - 1 {
                        out.push('\n');
                    } else {
                        out.push_str(", ");
                    }
                }
                out.push('\n');
            }
        }
        out
    }
}
