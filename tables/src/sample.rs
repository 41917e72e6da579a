//! Domain sampling and fixed-point quantization.
//!
//! The sampler walks a resolved domain in N equal steps (N+1 when the
//! operator includes its upper bound), evaluates the operator, scales by
//! `2^shift`, truncates toward zero, and masks the result to the configured
//! byte width. Truncation and masking semantics are load-bearing: values
//! outside the representable range wrap via the masked bit pattern, they are
//! never clamped to the width.

use crate::config::Config;
use crate::operator::{Operator, OperatorKind};

/// Target interval for the `map` operator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapRange {
    /// Interval start, reached at sample 0.
    pub a: f64,
    /// Interval end, reached at sample N-1.
    pub b: f64,
}

/// Evaluates one operator at a domain point.
#[must_use]
pub fn evaluate(kind: OperatorKind, x: f64, entries: i32, map: MapRange) -> f64 {
    match kind {
        OperatorKind::Sin => x.sin(),
        OperatorKind::Cos => x.cos(),
        OperatorKind::Tan => x.tan(),
        OperatorKind::Asin => x.asin(),
        OperatorKind::Acos => x.acos(),
        OperatorKind::Atan => x.atan(),
        OperatorKind::Square => x.powi(2),
        OperatorKind::Sqrt => x.sqrt(),
        OperatorKind::Map => (x / f64::from(entries - 1)) * (map.b - map.a) + map.a,
    }
}

/// Masks a truncated value to the byte width's bit pattern.
///
/// Widths other than 1 and 2 pass the raw pattern through.
#[must_use]
pub fn mask(value: i32, bytes: u32) -> u32 {
    match bytes {
        1 => value as u32 & 0xFF,
        2 => value as u32 & 0xFFFF,
        _ => value as u32,
    }
}

/// Truncates a scaled sample toward zero and masks it.
///
/// The float-to-integer cast follows Rust semantics: truncation toward zero,
/// saturation at `i32::MIN`/`i32::MAX` for out-of-range values, NaN to 0.
#[must_use]
pub fn quantize(value: f64, bytes: u32) -> u32 {
    mask(value as i32, bytes)
}

/// Samples an operator over its resolved domain.
///
/// Produces `entries` quantized values, or `entries + 1` when the domain is
/// upper-inclusive. The stride always divides by `entries`, so the inclusive
/// case deliberately samples one step beyond the normal stride.
#[must_use]
pub fn sample(op: &Operator, config: &Config, map: MapRange) -> Vec<u32> {
    let (min, max) = op.domain.resolve(config.entries);
    let total = if op.upper_inclusive {
        config.entries + 1
    } else {
        config.entries
    };
    let scale = config.scale();

    let mut values = Vec::with_capacity(total.max(0) as usize);
    for i in 0..total {
        let x = f64::from(i) * (max - min) / f64::from(config.entries) + min;
        let y = evaluate(op.kind, x, config.entries, map) * scale;
        values.push(quantize(y, config.bytes));
    }
    values
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operator::lookup;

    fn config(entries: i32, shift: u32, bytes: u32) -> Config {
        Config {
            entries,
            shift,
            bytes,
            ..Config::default()
        }
    }

    #[test]
    fn sine_quarter_turns() {
        // x = 0, pi/2, pi, 3pi/2 -> 0, 1, 0, -1 -> masked
        let sin = lookup("sin").unwrap();
        let values = sample(sin, &config(4, 0, 2), MapRange::default());
        assert_eq!(values, vec![0x0000, 0x0001, 0x0000, 0xFFFF]);
    }

    #[test]
    fn sine_single_byte_wraps() {
        let sin = lookup("sin").unwrap();
        let values = sample(sin, &config(4, 0, 1), MapRange::default());
        assert_eq!(values, vec![0x00, 0x01, 0x00, 0xFF]);
    }

    #[test]
    fn upper_inclusive_adds_one_sample() {
        let asin = lookup("asin").unwrap();
        assert_eq!(sample(asin, &config(8, 0, 2), MapRange::default()).len(), 9);
        let sqrt = lookup("sqrt").unwrap();
        assert_eq!(sample(sqrt, &config(8, 0, 2), MapRange::default()).len(), 8);
    }

    #[test]
    fn shift_scales_before_truncation() {
        // sin(pi/2) = 1 -> 1 * 2^6 = 64
        let sin = lookup("sin").unwrap();
        let values = sample(sin, &config(4, 6, 2), MapRange::default());
        assert_eq!(values[1], 64);
    }

    #[test]
    fn truncation_not_rounding() {
        // sqrt over [0, 8]: sqrt(7) = 2.645... truncates to 2
        let sqrt = lookup("sqrt").unwrap();
        let values = sample(sqrt, &config(8, 0, 2), MapRange::default());
        assert_eq!(values[7], 2);
    }

    #[test]
    fn map_spans_interval_linearly() {
        let map = lookup("map").unwrap();
        let range = MapRange { a: 0.0, b: 100.0 };
        let values = sample(map, &config(16, 0, 1), range);
        assert_eq!(values.len(), 16);
        assert_eq!(values[0], 0);
        assert_eq!(values[15], 100);
        // interior point: (5 / 15) * 100 = 33.3... -> 33
        assert_eq!(values[5], 33);
    }

    #[test]
    fn mask_widths() {
        assert_eq!(mask(-1, 1), 0xFF);
        assert_eq!(mask(-1, 2), 0xFFFF);
        assert_eq!(mask(-1, 4), 0xFFFF_FFFF);
        assert_eq!(mask(0x1_0001, 2), 1);
    }

    #[test]
    fn quantize_saturates_and_masks() {
        assert_eq!(quantize(f64::INFINITY, 2), i32::MAX as u32 & 0xFFFF);
        assert_eq!(quantize(f64::NEG_INFINITY, 2), i32::MIN as u32 & 0xFFFF);
        assert_eq!(quantize(f64::NAN, 2), 0);
        assert_eq!(quantize(-2.9, 2), 0xFFFE);
    }

    #[test]
    fn deterministic() {
        let tan = lookup("tan").unwrap();
        let config = config(100, 8, 2);
        assert_eq!(
            sample(tan, &config, MapRange::default()),
            sample(tan, &config, MapRange::default())
        );
    }
}
