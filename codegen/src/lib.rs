//! Renderers that turn quantized sample sequences into source-code text.
//!
//! Standard tables render in either C or assembly syntax with 8 values per
//! row; the special generators (projection, rotation, equation) always
//! render as C declarations. The [`Emitter`] owns the run's byte-address
//! counter, which C-mode standard tables advance per value and which becomes
//! the process exit status.
//!
//! # Example
//!
//! ```
//! use fixtab_codegen::Emitter;
//! use fixtab_tables::{lookup, sample, Config, MapRange};
//!
//! let sin = lookup("sin").unwrap();
//! let config = Config { entries: 4, ..Config::default() };
//! let values = sample(sin, &config, MapRange::default());
//!
//! let mut emitter = Emitter::new();
//! let block = emitter.table(sin, &values, &config);
//! assert!(block.contains("const unsigned short g_Sinus4[4]"));
//! assert_eq!(emitter.address(), 8);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod banner;
pub mod emit;
pub mod special;
pub mod table;

pub use emit::Emitter;
