use num_rational::Rational64;
use num_traits::ToPrimitive;

const DECIMAL_PLACES: i32 = 10;
const MAX_SHORT_DECIMALS: usize = 6;
const MAX_DENOMINATOR: i64 = 1000;
const FRACTION_TOLERANCE: f64 = 1e-10;
// Beyond this the fraction search would overflow i64 numerators.
const FRACTION_LIMIT: f64 = 1e12;

/// Render a numeric answer for display: integers as integers, short
/// decimals as decimals, otherwise a small-denominator fraction (`1/3`) when
/// one matches, falling back to a decimal rounded to ten places.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() || value.abs() >= FRACTION_LIMIT {
        return format!("{value}");
    }

    let scale = 10f64.powi(DECIMAL_PLACES);
    let rounded = (value * scale).round() / scale;
    let decimal = if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    };

    let fraction_digits = decimal.split_once('.').map_or(0, |(_, frac)| frac.len());
    if fraction_digits <= MAX_SHORT_DECIMALS {
        return decimal;
    }

    match as_fraction(value) {
        Some(ratio) => ratio.to_string(),
        None => decimal,
    }
}

fn as_fraction(value: f64) -> Option<Rational64> {
    (2..=MAX_DENOMINATOR).find_map(|denom| {
        let ratio = Rational64::new((value * denom as f64).round() as i64, denom);
        ratio
            .to_f64()
            .filter(|approx| (approx - value).abs() < FRACTION_TOLERANCE)
            .map(|_| ratio)
    })
}
