//! Numeric model for the fixtab table generator.
//!
//! The crate holds everything that computes values: the operator registry,
//! domain resolution, the fixed-point sampler/quantizer, and the math behind
//! the three special generators (projection pair, rotation grid, power
//! equation). It produces sequences of masked bit patterns and nothing else;
//! turning those into C or assembly text is the `fixtab-codegen` crate's job.
//!
//! # Entry Points
//!
//! ```
//! use fixtab_tables::{lookup, sample, Config, MapRange};
//!
//! let sin = lookup("sin").unwrap();
//! let config = Config { entries: 4, shift: 0, ..Config::default() };
//! let values = sample(sin, &config, MapRange::default());
//! assert_eq!(values, vec![0x0000, 0x0001, 0x0000, 0xFFFF]);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod operator;
pub mod sample;
pub mod special;

pub use config::{Config, OutputFormat};
pub use operator::{lookup, Domain, Operator, OperatorKind, REGISTRY};
pub use sample::{mask, quantize, sample, MapRange};
