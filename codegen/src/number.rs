//! Floating-point literal rendering.
//!
//! Values are written as the shortest decimal string that parses back to the
//! same `f64`. Magnitudes below `1e-4` or at least `1e16` switch to scientific
//! notation with a signed, zero-padded two-digit exponent (`1e-05`, `1e+16`).
//! Integral values in the decimal range keep a trailing `.0`. The result is a
//! valid C `double` literal for every finite input.

/// Smallest magnitude rendered in positional notation.
const POSITIONAL_MIN: f64 = 1e-4;
/// Smallest magnitude rendered in scientific notation on the high side.
const POSITIONAL_MAX: f64 = 1e16;

/// Renders `value` as a round-trippable literal.
#[must_use]
pub fn render_value(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && value != 0.0 && !(POSITIONAL_MIN..POSITIONAL_MAX).contains(&magnitude)
    {
        render_scientific(value)
    } else {
        // Debug keeps the `.0` on integral values and is shortest-round-trip.
        format!("{value:?}")
    }
}

fn render_scientific(value: f64) -> String {
    let raw = format!("{value:e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_keep_fraction() {
        assert_eq!(render_value(1.0), "1.0");
        assert_eq!(render_value(-1.0), "-1.0");
        assert_eq!(render_value(0.0), "0.0");
        assert_eq!(render_value(1e15), "1000000000000000.0");
    }

    #[test]
    fn positional_range() {
        assert_eq!(render_value(0.5), "0.5");
        assert_eq!(render_value(0.0001), "0.0001");
        assert_eq!(render_value(0.9999952938095762), "0.9999952938095762");
        assert_eq!(render_value(-0.7071067811865475), "-0.7071067811865475");
    }

    #[test]
    fn scientific_range() {
        assert_eq!(render_value(6.123233995736766e-17), "6.123233995736766e-17");
        assert_eq!(render_value(0.00001), "1e-05");
        assert_eq!(render_value(-2.5e-7), "-2.5e-07");
        assert_eq!(render_value(1e16), "1e+16");
        assert_eq!(render_value(1.5e300), "1.5e+300");
    }

    #[test]
    fn round_trips() {
        for v in [1.0, 0.1, 1.0 / 3.0, 6.123233995736766e-17, -0.9999952938095762] {
            assert_eq!(render_value(v).parse::<f64>().unwrap().to_bits(), v.to_bits());
        }
    }
}
