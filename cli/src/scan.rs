//! Argument scanning: turns the raw argument list into an ordered command
//! stream.
//!
//! Flag names match case-insensitively and consume the token that follows
//! them; table-selector tokens match case-sensitively. The stream preserves
//! argument order, which is load-bearing: a configuration change applies
//! only to the table requests that follow it.

use std::slice;
use std::str::FromStr;

use thiserror::Error;

use fixtab_tables::special::Equation;
use fixtab_tables::{lookup, MapRange, Operator, OperatorKind, OutputFormat};

/// A scanning failure. Scanning is all-or-nothing: any failure aborts the
/// run before a single block is emitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// A flag value or request coefficient failed to parse.
    #[error("malformed value {value:?} for {context}")]
    Malformed {
        /// The offending token.
        value: String,
        /// The flag or coefficient that consumed it.
        context: &'static str,
    },
    /// The argument list ended where a value was expected.
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    /// A token that is neither a flag nor a table selector.
    #[error("unknown token {0:?}")]
    UnknownToken(String),
}

/// One configuration change.
#[derive(Debug, Clone, PartialEq)]
pub enum Setting {
    /// `-num`: sample count.
    Entries(i32),
    /// `-shift`: fixed-point shift bits.
    Shift(u32),
    /// `-bytes`: output byte width.
    Bytes(u32),
    /// `-prefix`: table-name prefix (already cleared when the `0` sentinel
    /// was given).
    Prefix(String),
    /// `-format`: output syntax.
    Format(OutputFormat),
    /// `-at`: starting byte address.
    Address(u32),
}

/// One table-generation request.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Registry operator table (`sin`, `cos`, …; `map A B` carries its
    /// coefficients).
    Table {
        /// The registry descriptor.
        op: &'static Operator,
        /// Coefficients consumed by `map`; zeroed for every other operator.
        map: MapRange,
    },
    /// `proj W H`: the perspective-projection X/Y pair.
    Projection {
        /// Screen width.
        width: i32,
        /// Screen height.
        height: i32,
    },
    /// `rot`: the 2D angle-lookup grid.
    Rotation,
    /// `equa A B C D E`: the power equation.
    Equation(Equation),
}

/// One element of the ordered command stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Apply a configuration change.
    Set(Setting),
    /// Print usage and stop.
    Help,
    /// Emit one block with the configuration in effect.
    Emit(Request),
}

/// Scans the argument list (program name excluded) into a command stream.
///
/// Scanning stops at `-help`; tokens after it are never inspected.
///
/// # Errors
///
/// Returns a [`ScanError`] for malformed values, missing flag values or
/// request coefficients, and unknown tokens.
pub fn scan(args: &[String]) -> Result<Vec<Command>, ScanError> {
    let mut commands = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.to_ascii_lowercase().as_str() {
            "-help" => {
                commands.push(Command::Help);
                break;
            }
            "-num" => {
                commands.push(Command::Set(Setting::Entries(next_parsed(
                    &mut iter, "-num",
                )?)));
            }
            "-shift" => {
                commands.push(Command::Set(Setting::Shift(next_parsed(
                    &mut iter, "-shift",
                )?)));
            }
            "-bytes" => {
                commands.push(Command::Set(Setting::Bytes(next_parsed(
                    &mut iter, "-bytes",
                )?)));
            }
            "-prefix" => {
                let value = next_value(&mut iter, "-prefix")?;
                let prefix = if value == "0" {
                    String::new()
                } else {
                    value.clone()
                };
                commands.push(Command::Set(Setting::Prefix(prefix)));
            }
            "-format" => {
                let value = next_value(&mut iter, "-format")?;
                let format = if value.eq_ignore_ascii_case("C") {
                    OutputFormat::C
                } else if value.eq_ignore_ascii_case("ASM") {
                    OutputFormat::Asm
                } else {
                    return Err(ScanError::Malformed {
                        value: value.clone(),
                        context: "-format",
                    });
                };
                commands.push(Command::Set(Setting::Format(format)));
            }
            "-at" => {
                let value = next_value(&mut iter, "-at")?;
                commands.push(Command::Set(Setting::Address(parse_address(value)?)));
            }
            _ => commands.push(Command::Emit(scan_request(arg, &mut iter)?)),
        }
    }
    Ok(commands)
}

fn scan_request(token: &str, iter: &mut slice::Iter<'_, String>) -> Result<Request, ScanError> {
    match token {
        "proj" => Ok(Request::Projection {
            width: next_parsed(iter, "proj width")?,
            height: next_parsed(iter, "proj height")?,
        }),
        "rot" => Ok(Request::Rotation),
        "equa" => Ok(Request::Equation(Equation {
            a: next_parsed(iter, "equa A")?,
            b: next_parsed(iter, "equa B")?,
            c: next_parsed(iter, "equa C")?,
            d: next_parsed(iter, "equa D")?,
            e: next_parsed(iter, "equa E")?,
        })),
        _ => {
            let op = lookup(token).ok_or_else(|| ScanError::UnknownToken(token.to_string()))?;
            let map = if op.kind == OperatorKind::Map {
                MapRange {
                    a: next_parsed(iter, "map A")?,
                    b: next_parsed(iter, "map B")?,
                }
            } else {
                MapRange::default()
            };
            Ok(Request::Table { op, map })
        }
    }
}

fn next_value<'a>(
    iter: &mut slice::Iter<'a, String>,
    context: &'static str,
) -> Result<&'a String, ScanError> {
    iter.next().ok_or(ScanError::MissingValue(context))
}

fn next_parsed<T: FromStr>(
    iter: &mut slice::Iter<'_, String>,
    context: &'static str,
) -> Result<T, ScanError> {
    let value = next_value(iter, context)?;
    value.parse().map_err(|_| ScanError::Malformed {
        value: value.clone(),
        context,
    })
}

/// Parses a `-at` address, decimal or `0x`-prefixed hexadecimal.
fn parse_address(value: &str) -> Result<u32, ScanError> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => value.parse(),
    };
    parsed.map_err(|_| ScanError::Malformed {
        value: value.to_string(),
        context: "-at",
    })
}
