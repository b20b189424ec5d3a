//! Simple Moving Average.
//!
//! Mean of the last `period` prices. Unavailable until the series holds at
//! least `period` points.

pub fn sma(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period {
        return None;
    }
    let sum: f64 = prices[prices.len() - period..].iter().sum();
    Some(sum / period as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_basic() {
        let value = sma(&[10.0, 20.0, 30.0], 3).unwrap();
        assert!((value - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sma_uses_trailing_window() {
        let value = sma(&[100.0, 10.0, 20.0, 30.0], 3).unwrap();
        assert!((value - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sma_exact_window_length() {
        assert!(sma(&[1.0, 2.0], 2).is_some());
    }

    #[test]
    fn sma_short_series() {
        assert_eq!(sma(&[1.0, 2.0], 3), None);
    }

    #[test]
    fn sma_empty_series() {
        assert_eq!(sma(&[], 3), None);
    }

    #[test]
    fn sma_period_0() {
        assert_eq!(sma(&[1.0, 2.0], 0), None);
    }

    #[test]
    fn sma_period_1_is_last_price() {
        let value = sma(&[5.0, 9.0, 13.5], 1).unwrap();
        assert!((value - 13.5).abs() < f64::EPSILON);
    }
}
