//! Math behind the three non-registry generators.
//!
//! Projection and equation reuse the standard quantization path; the
//! rotation grid has its own rounding-then-modulo quantization that differs
//! deliberately from [`crate::sample::quantize`].

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::config::Config;
use crate::sample::{mask, quantize};

/// Perspective-projection constants shared by the X and Y axis tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Y-axis scale, `cos(pi/4)`.
    pub y_scale: f64,
    /// X-axis scale, `y_scale * height / width`.
    pub x_scale: f64,
    /// Depth ratio `z_far / (z_far - z_near) + 1`.
    pub k: f64,
}

impl Projection {
    /// Builds the projection constants for a screen size.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let y_scale = (PI * 0.25).cos();
        let x_scale = y_scale * f64::from(height) / f64::from(width);
        let z_far = 0.01;
        let z_near = 16.0;
        Self {
            y_scale,
            x_scale,
            k: z_far / (z_far - z_near) + 1.0,
        }
    }

    /// Samples one projection axis: `2^shift * scale / (z * k)` with
    /// `z = i - N/2` for `i` in `[0, N)`.
    ///
    /// For even N the `z = 0` entry divides by zero; the resulting infinity
    /// saturates in the truncating cast instead of being special-cased.
    #[must_use]
    pub fn axis(&self, axis_scale: f64, config: &Config) -> Vec<u32> {
        let scale = config.scale();
        let mut values = Vec::with_capacity(config.entries.max(0) as usize);
        for i in 0..config.entries {
            let z = f64::from(i) - f64::from(config.entries) / 2.0;
            values.push(quantize(scale * axis_scale / (z * self.k), config.bytes));
        }
        values
    }
}

/// Quadrant-correct angle of the vector `(x, y)`, normalized to `[0, 2*pi)`.
///
/// A zero x-component short-circuits to plus or minus `pi/2` depending on the
/// sign of y, with `+pi/2` when y is also zero. Negative x adds `pi`; a
/// negative result wraps by `2*pi`.
#[must_use]
pub fn compute_angle(x: f64, y: f64) -> f64 {
    let mut angle = if x == 0.0 {
        if y < 0.0 {
            -FRAC_PI_2
        } else {
            FRAC_PI_2
        }
    } else {
        let a = (y / x).atan();
        if x < 0.0 {
            a + PI
        } else {
            a
        }
    };
    if angle < 0.0 {
        angle += TAU;
    }
    angle
}

/// One row of the rotation grid: angles of `(x, j)` for `j` in `[1-N, N-1]`.
///
/// Angles are scaled to `[0, 2^shift)` turns with nearest rounding (add 0.5,
/// truncate), reduced modulo `2^shift`, then masked. The rounding-then-modulo
/// order matches the table consumers' wraparound expectations and differs
/// from the plain sampler.
#[must_use]
pub fn rotation_row(x: i32, config: &Config) -> Vec<u32> {
    let scale = config.scale();
    let modulus = scale as i32;
    let n = config.entries;

    let mut row = Vec::with_capacity((2 * n - 1).max(0) as usize);
    for j in (1 - n)..n {
        let turns = scale * compute_angle(f64::from(x), f64::from(j)) / TAU + 0.5;
        row.push(mask(turns as i32 % modulus, config.bytes));
    }
    row
}

/// Coefficients of the power equation `y = a + b * (c + x * d)^e`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equation {
    /// Constant offset.
    pub a: f64,
    /// Scale of the power term.
    pub b: f64,
    /// Base offset.
    pub c: f64,
    /// Step per sample index.
    pub d: f64,
    /// Exponent.
    pub e: f64,
}

impl Equation {
    /// Samples the equation over `i` in `[0, N)`, scaled by `2^shift`,
    /// truncated and masked.
    #[must_use]
    pub fn sample(&self, config: &Config) -> Vec<u32> {
        let scale = config.scale();
        (0..config.entries)
            .map(|i| {
                let y = self.a + self.b * (self.c + f64::from(i) * self.d).powf(self.e);
                quantize(scale * y, config.bytes)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(entries: i32, shift: u32, bytes: u32) -> Config {
        Config {
            entries,
            shift,
            bytes,
            ..Config::default()
        }
    }

    #[test]
    fn angle_zero_x_special_cases() {
        assert_eq!(compute_angle(0.0, 0.0), FRAC_PI_2);
        assert_eq!(compute_angle(0.0, 3.0), FRAC_PI_2);
        assert_eq!(compute_angle(0.0, -3.0), 3.0 * FRAC_PI_2);
    }

    #[test]
    fn angle_quadrants() {
        assert_eq!(compute_angle(1.0, 0.0), 0.0);
        assert_eq!(compute_angle(-1.0, 0.0), PI);
        assert!((compute_angle(1.0, 1.0) - PI / 4.0).abs() < 1e-12);
        assert!((compute_angle(-1.0, -1.0) - 5.0 * PI / 4.0).abs() < 1e-12);
        assert!((compute_angle(1.0, -1.0) - 7.0 * PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_grid_size() {
        // N = 2 -> rows for x in [-1, 1], each 3 wide -> 9 entries
        let config = config(2, 4, 1);
        let rows: Vec<Vec<u32>> = (-1..=1).map(|x| rotation_row(x, &config)).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 3));
    }

    #[test]
    fn rotation_rounds_then_reduces() {
        // shift 4 -> 16 steps per turn; angle(0,0) = pi/2 -> 16/4 + 0.5 -> 4
        let config = config(2, 4, 1);
        let row = rotation_row(0, &config);
        assert_eq!(row[1], 4);
        // angle(0,-1) = 3pi/2 -> 12.5 -> 12
        assert_eq!(row[0], 12);
    }

    #[test]
    fn rotation_zero_shift_reduces_to_zero() {
        // 2^0 = 1, so every value reduces modulo 1
        let config = config(2, 0, 1);
        for x in -1..=1 {
            assert!(rotation_row(x, &config).iter().all(|&v| v == 0));
        }
    }

    #[test]
    fn equation_squares() {
        let eq = Equation {
            a: 0.0,
            b: 1.0,
            c: 0.0,
            d: 1.0,
            e: 2.0,
        };
        assert_eq!(eq.sample(&config(3, 0, 2)), vec![0x0000, 0x0001, 0x0004]);
    }

    #[test]
    fn equation_applies_shift() {
        let eq = Equation {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
            e: 1.0,
        };
        assert_eq!(eq.sample(&config(2, 8, 2)), vec![256, 256]);
    }

    #[test]
    fn projection_center_saturates() {
        // even N: i = N/2 gives z = 0, division by zero saturates the cast
        let proj = Projection::new(256, 212);
        let values = proj.axis(proj.y_scale, &config(4, 8, 2));
        assert_eq!(values.len(), 4);
        assert_eq!(values[2], i32::MAX as u32 & 0xFFFF);
    }

    #[test]
    fn projection_constants() {
        let proj = Projection::new(256, 212);
        assert!((proj.y_scale - 0.7071067811865476).abs() < 1e-15);
        assert!((proj.x_scale - proj.y_scale * 212.0 / 256.0).abs() < 1e-15);
        assert!((proj.k - (0.01 / (0.01 - 16.0) + 1.0)).abs() < 1e-15);
    }
}
