//! Operator descriptors and domain resolution.
//!
//! The registry is a fixed catalog of nine named operators, built once as
//! static data and looked up by selector token. Each descriptor carries its
//! input domain (literal bounds or a placeholder resolved against the sample
//! count), whether the upper bound is part of the table, and which scalar
//! function the sampler evaluates.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Input domain of an operator.
///
/// Placeholder variants scale with the sample count and are resolved by
/// [`Domain::resolve`]; `Literal` bounds are returned unchanged, so a
/// legitimately-zero literal bound can never be mistaken for an unset one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain {
    /// Fixed numeric bounds, independent of the sample count.
    Literal {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// `[0, N]`.
    ZeroToEntries,
    /// `[0, N - 1]`.
    ZeroToEntriesMinusOne,
    /// `[-N, N]`.
    SymmetricEntries,
    /// `[-N/2, N/2]`, integer division truncating toward zero for odd N.
    SymmetricHalfEntries,
}

impl Domain {
    /// Resolves this domain to concrete `(min, max)` bounds for the given
    /// sample count.
    #[must_use]
    pub fn resolve(self, entries: i32) -> (f64, f64) {
        match self {
            Domain::Literal { min, max } => (min, max),
            Domain::ZeroToEntries => (0.0, f64::from(entries)),
            Domain::ZeroToEntriesMinusOne => (0.0, f64::from(entries - 1)),
            Domain::SymmetricEntries => (f64::from(-entries), f64::from(entries)),
            Domain::SymmetricHalfEntries => {
                (f64::from(-(entries / 2)), f64::from(entries / 2))
            }
        }
    }
}

/// Scalar function evaluated by the sampler.
///
/// `Map` is the one data-dependent kind: it consumes the two user
/// coefficients and the sample count (see [`crate::sample::evaluate`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    /// `sin(x)`.
    Sin,
    /// `cos(x)`.
    Cos,
    /// `tan(x)`.
    Tan,
    /// `asin(x)`.
    Asin,
    /// `acos(x)`.
    Acos,
    /// `atan(x)`.
    Atan,
    /// `x^2`.
    Square,
    /// `sqrt(x)`.
    Sqrt,
    /// Linear remap of `[0, N)` into a user interval.
    Map,
}

/// Registry entry describing one named operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operator {
    /// Selector token, matched case-sensitively (`"sin"`, `"cos"`, …).
    pub token: &'static str,
    /// Display name used in table identifiers and comments.
    pub name: &'static str,
    /// Range annotation carried into output comments (`"0:Pi*2"`, …).
    pub note: &'static str,
    /// Input domain.
    pub domain: Domain,
    /// Whether the table includes the upper bound (N+1 samples).
    pub upper_inclusive: bool,
    /// Whether the emitted declaration is signed.
    pub signed: bool,
    /// Scalar function.
    pub kind: OperatorKind,
}

/// The nine-operator registry, in display order.
pub static REGISTRY: [Operator; 9] = [
    Operator {
        token: "sin",
        name: "Sinus",
        note: "0:Pi*2",
        domain: Domain::Literal { min: 0.0, max: TAU },
        upper_inclusive: false,
        signed: false,
        kind: OperatorKind::Sin,
    },
    Operator {
        token: "cos",
        name: "Cosinus",
        note: "0:Pi*2",
        domain: Domain::Literal { min: 0.0, max: TAU },
        upper_inclusive: false,
        signed: false,
        kind: OperatorKind::Cos,
    },
    Operator {
        token: "tan",
        name: "Tangent",
        note: "-Pi/2:Pi/2",
        domain: Domain::Literal {
            min: -FRAC_PI_2,
            max: FRAC_PI_2,
        },
        upper_inclusive: true,
        signed: false,
        kind: OperatorKind::Tan,
    },
    Operator {
        token: "asin",
        name: "ArcSinus",
        note: "-1:1",
        domain: Domain::Literal {
            min: -1.0,
            max: 1.0,
        },
        upper_inclusive: true,
        signed: false,
        kind: OperatorKind::Asin,
    },
    Operator {
        token: "acos",
        name: "ArcCosinus",
        note: "-1:1",
        domain: Domain::Literal {
            min: -1.0,
            max: 1.0,
        },
        upper_inclusive: true,
        signed: false,
        kind: OperatorKind::Acos,
    },
    Operator {
        token: "atan",
        name: "ArcTangent",
        note: "0:N",
        domain: Domain::ZeroToEntries,
        upper_inclusive: true,
        signed: false,
        kind: OperatorKind::Atan,
    },
    Operator {
        token: "sq",
        name: "Square",
        note: "0:1",
        domain: Domain::Literal { min: 0.0, max: 1.0 },
        upper_inclusive: true,
        signed: false,
        kind: OperatorKind::Square,
    },
    Operator {
        token: "sqrt",
        name: "SquareRoot",
        note: "0:N",
        domain: Domain::ZeroToEntries,
        upper_inclusive: false,
        signed: false,
        kind: OperatorKind::Sqrt,
    },
    Operator {
        token: "map",
        name: "Map",
        note: "0:N",
        domain: Domain::ZeroToEntries,
        upper_inclusive: false,
        signed: false,
        kind: OperatorKind::Map,
    },
];

/// Looks up an operator by selector token (case-sensitive).
#[must_use]
pub fn lookup(token: &str) -> Option<&'static Operator> {
    REGISTRY.iter().find(|op| op.token == token)
}
