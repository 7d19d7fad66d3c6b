//! Property-based tests for conversion and formatting.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::convert::convert;
    use crate::format::format_number;
    use crate::types::{Reading, Unit};
    use proptest::prelude::*;

    fn unit() -> impl Strategy<Value = Unit> {
        prop_oneof![
            Just(Unit::Celsius),
            Just(Unit::Fahrenheit),
            Just(Unit::Kelvin),
        ]
    }

    proptest! {
        #[test]
        fn test_same_unit_is_identity(value in any::<f64>().prop_filter("finite", |v| v.is_finite()), u in unit()) {
            prop_assert_eq!(convert(value, u, u).unwrap().to_bits(), value.to_bits());
        }

        #[test]
        fn test_roundtrip_within_tolerance(value in -1.0e6f64..1.0e6, a in unit(), b in unit()) {
            let there = convert(value, a, b).unwrap();
            let back = convert(there, b, a).unwrap();
            let tolerance = 1e-9 * value.abs().max(1.0);
            prop_assert!((back - value).abs() <= tolerance, "{value} -> {there} -> {back}");
        }

        #[test]
        fn test_pivot_consistency(value in -1.0e6f64..1.0e6, a in unit(), b in unit(), c in unit()) {
            let direct = convert(value, a, c).unwrap();
            let chained = convert(convert(value, a, b).unwrap(), b, c).unwrap();
            prop_assert!((direct - chained).abs() <= 1e-9 * direct.abs().max(1.0));
        }

        #[test]
        fn test_formatted_value_is_close(value in -1.0e6f64..1.0e6) {
            let shown: f64 = format_number(value).parse().unwrap();
            prop_assert!((shown - value).abs() <= 5e-7 + 1e-9);
        }

        #[test]
        fn test_formatted_value_has_at_most_six_decimals(value in -1.0e6f64..1.0e6) {
            let shown = format_number(value);
            let decimals = shown.split_once('.').map_or(0, |(_, frac)| frac.len());
            prop_assert!(decimals <= 6, "{shown}");
            prop_assert!(!shown.ends_with('0') || !shown.contains('.'), "{shown}");
        }

        #[test]
        fn test_reading_display_starts_with_formatted_value(value in -1.0e6f64..1.0e6, u in unit()) {
            let reading = Reading::new(value, u).unwrap();
            let shown = reading.to_string();
            prop_assert!(shown.starts_with(&format_number(value)));
            prop_assert!(shown.ends_with(u.symbol()));
        }
    }
}
