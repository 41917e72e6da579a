//! Property-based tests for the sampler/quantizer.
//!
//! Uses proptest to verify the length, masking, and determinism invariants
//! over the whole registry and a wide range of configurations.

use proptest::prelude::*;

use fixtab_tables::{sample, Config, Domain, MapRange, REGISTRY};

prop_compose! {
    fn any_config()(
        entries in 1i32..512,
        shift in 0u32..12,
        bytes in prop_oneof![Just(1u32), Just(2u32)],
    ) -> Config {
        Config { entries, shift, bytes, ..Config::default() }
    }
}

proptest! {
    /// Emitted sample count is N, or N+1 for upper-inclusive operators.
    #[test]
    fn prop_sample_count(config in any_config(), index in 0usize..9) {
        let op = &REGISTRY[index];
        let values = sample(op, &config, MapRange { a: -3.0, b: 42.0 });
        let expected = if op.upper_inclusive {
            config.entries + 1
        } else {
            config.entries
        };
        prop_assert_eq!(values.len(), expected as usize);
    }

    /// Every emitted value fits the configured byte width's bit pattern.
    #[test]
    fn prop_masked_values_fit_width(config in any_config(), index in 0usize..9) {
        let op = &REGISTRY[index];
        let limit = if config.bytes == 1 { 0xFF } else { 0xFFFF };
        for value in sample(op, &config, MapRange { a: -1000.0, b: 1000.0 }) {
            prop_assert!(value <= limit);
        }
    }

    /// Quantization is deterministic: identical inputs, identical sequence.
    #[test]
    fn prop_deterministic(config in any_config(), index in 0usize..9) {
        let op = &REGISTRY[index];
        let map = MapRange { a: 0.5, b: 99.5 };
        prop_assert_eq!(sample(op, &config, map), sample(op, &config, map));
    }

    /// Symmetric domains resolve to bounds mirrored around zero, with the
    /// half-width variant truncating toward zero.
    #[test]
    fn prop_symmetric_resolution(entries in 1i32..10_000) {
        let (min, max) = Domain::SymmetricEntries.resolve(entries);
        prop_assert_eq!(min, -max);
        let (hmin, hmax) = Domain::SymmetricHalfEntries.resolve(entries);
        prop_assert_eq!(hmin, -hmax);
        prop_assert_eq!(hmax, f64::from(entries / 2));
    }
}
