//! Bollinger Bands.
//!
//! - Middle: Simple Moving Average over the trailing window
//! - Upper: Middle + (multiplier x StdDev)
//! - Lower: Middle - (multiplier x StdDev)
//!
//! StdDev is population standard deviation (divides by N, not N-1) over the
//! same trailing window.
//!
//! Default parameters: period=20, multiplier=2.0.

use crate::domain::indicator::sma::sma;

pub const DEFAULT_PERIOD: usize = 20;
pub const DEFAULT_MULT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

pub fn bollinger(prices: &[f64], period: usize, mult: f64) -> Option<BollingerBands> {
    let middle = sma(prices, period)?;
    let window = &prices[prices.len() - period..];
    let variance = window
        .iter()
        .map(|price| {
            let diff = price - middle;
            diff * diff
        })
        .sum::<f64>()
        / period as f64;
    let stddev = variance.sqrt();

    Some(BollingerBands {
        upper: middle + mult * stddev,
        middle,
        lower: middle - mult * stddev,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bollinger_known_stddev() {
        // Population stddev of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2.
        let prices = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let bands = bollinger(&prices, 8, 2.0).unwrap();
        assert_relative_eq!(bands.middle, 5.0, epsilon = 1e-9);
        assert_relative_eq!(bands.upper, 9.0, epsilon = 1e-9);
        assert_relative_eq!(bands.lower, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn bollinger_constant_prices_collapse() {
        let bands = bollinger(&[100.0; 25], 20, 2.0).unwrap();
        assert!((bands.upper - 100.0).abs() < f64::EPSILON);
        assert!((bands.middle - 100.0).abs() < f64::EPSILON);
        assert!((bands.lower - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bollinger_bands_are_symmetric() {
        let prices = [45.0, 47.0, 44.0, 48.0, 46.0, 49.0, 45.5, 47.5];
        let bands = bollinger(&prices, 8, 2.0).unwrap();
        let above = bands.upper - bands.middle;
        let below = bands.middle - bands.lower;
        assert!((above - below).abs() < 1e-9);
    }

    #[test]
    fn bollinger_multiplier_scales_width() {
        let prices = [45.0, 47.0, 44.0, 48.0, 46.0, 49.0, 45.5, 47.5];
        let narrow = bollinger(&prices, 8, 1.0).unwrap();
        let wide = bollinger(&prices, 8, 2.0).unwrap();
        let narrow_width = narrow.upper - narrow.lower;
        let wide_width = wide.upper - wide.lower;
        assert!((wide_width - 2.0 * narrow_width).abs() < 1e-9);
    }

    #[test]
    fn bollinger_uses_trailing_window() {
        let short = [10.0, 12.0, 11.0, 13.0];
        let long = [500.0, 10.0, 12.0, 11.0, 13.0];
        let a = bollinger(&short, 4, 2.0).unwrap();
        let b = bollinger(&long, 4, 2.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn bollinger_short_series() {
        assert_eq!(bollinger(&[1.0, 2.0, 3.0], 20, 2.0), None);
    }

    #[test]
    fn bollinger_period_0() {
        assert_eq!(bollinger(&[1.0, 2.0, 3.0], 0, 2.0), None);
    }
}
