//! Display band and rounding applied to forecast points.

use serde::Serialize;

/// Decimal places kept on every forecast figure.
pub const FORECAST_DECIMALS: usize = 5;
/// Multiplier for the upper edge of the band.
pub const UPPER_FACTOR: f64 = 1.1;
/// Multiplier for the lower edge of the band.
pub const LOWER_FACTOR: f64 = 0.9;

/// Fraction digits needed to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Round half away from zero on the exact decimal expansion of `value`,
/// matching `toFixed`-style output.
///
/// NaN and infinities pass through unchanged.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let kept = &frac_part[..decimals.min(frac_part.len())];
    let round_up = frac_part.as_bytes().get(decimals).is_some_and(|&d| d >= b'5');

    let mut digits: Vec<u8> = int_part.bytes().chain(kept.bytes()).collect();
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - kept.len();
    let mut text = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        text.push('-');
    }
    text.extend(digits[..split].iter().map(|&d| d as char));
    if !kept.is_empty() {
        text.push('.');
        text.extend(digits[split..].iter().map(|&d| d as char));
    }
    text.parse().unwrap_or(value)
}

/// Fixed +/-10% envelope around a predicted value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceBand {
    pub upper: f64,
    pub lower: f64,
}

impl ConfidenceBand {
    /// Band around the unrounded `value`.
    pub fn around(value: f64) -> Self {
        Self {
            upper: round_to(value * UPPER_FACTOR, FORECAST_DECIMALS),
            lower: round_to(value * LOWER_FACTOR, FORECAST_DECIMALS),
        }
    }
}

/// Trailing `window` elements of `series`, or all of it when shorter.
pub fn trailing<T>(series: &[T], window: usize) -> &[T] {
    &series[series.len().saturating_sub(window)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_matches_reference_point() {
        let band = ConfidenceBand::around(4.8);
        assert_eq!(band.upper, 5.28);
        assert_eq!(band.lower, 4.32);
    }

    #[test]
    fn rounding_trims_float_noise() {
        assert_eq!(round_to(4.8 * 1.1, 5), 5.28);
        assert_eq!(round_to(2.123456789, 5), 2.12346);
        assert_eq!(round_to(-0.000001, 5), -0.0);
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(round_to(0.015625, 5), 0.01563);
        assert_eq!(round_to(-0.015625, 5), -0.01563);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(0.125, 2), 0.13);
    }

    #[test]
    fn near_ties_follow_the_binary_value() {
        // 1.005 is stored slightly below the tie.
        assert_eq!(round_to(1.005, 2), 1.0);
        assert_eq!(round_to(9.999996, 5), 10.0);
        assert_eq!(round_to(99.999995, 5), 99.99999);
    }

    #[test]
    fn nan_band_stays_nan() {
        let band = ConfidenceBand::around(f64::NAN);
        assert!(band.upper.is_nan());
        assert!(band.lower.is_nan());
    }

    #[test]
    fn trailing_window() {
        let series: Vec<u32> = (0..15).collect();
        assert_eq!(trailing(&series, 12), &series[3..]);
        assert_eq!(trailing(&series[..4], 12), &series[..4]);
        assert!(trailing::<u32>(&[], 12).is_empty());
    }
}
