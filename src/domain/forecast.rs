//! Multi-horizon price forecasting.
//!
//! A forecast scales the combined signal by sqrt(days), adds bounded
//! uniform noise from the injected RNG, and projects the current price
//! forward. The confidence label comes from the caller's per-horizon
//! confidence dial alone; it never looks at the signal.

use rand::Rng;
use std::fmt;

/// Signal-to-drift scale: a full-strength signal moves the one-day
/// forecast by 10%.
const SIGNAL_DRIFT: f64 = 0.1;

/// Span of the uniform noise term: a draw in [-0.5, 0.5) scaled by this,
/// at most 2.5% of price in either direction.
const NOISE_SPAN: f64 = 0.05;

/// Forward distance and caller confidence for one forecast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizon {
    pub days: u32,
    pub confidence: f64,
}

impl Horizon {
    pub fn new(days: u32, confidence: f64) -> Self {
        Self { days, confidence }
    }

    /// The standard horizon set: next day, next week, next month.
    pub fn defaults() -> Vec<Horizon> {
        vec![
            Horizon::new(1, 0.8),
            Horizon::new(7, 0.6),
            Horizon::new(30, 0.4),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLabel {
    High,
    Medium,
    Low,
}

impl ConfidenceLabel {
    /// Label for a confidence dial value: above 0.7 is High, above 0.4
    /// Medium, the rest Low.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.7 {
            ConfidenceLabel::High
        } else if confidence > 0.4 {
            ConfidenceLabel::Medium
        } else {
            ConfidenceLabel::Low
        }
    }
}

impl fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLabel::High => write!(f, "High"),
            ConfidenceLabel::Medium => write!(f, "Medium"),
            ConfidenceLabel::Low => write!(f, "Low"),
        }
    }
}

/// One projected price with its absolute and percentage change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub days: u32,
    pub price: f64,
    pub change: f64,
    pub change_pct: f64,
    pub confidence: ConfidenceLabel,
}

/// Project `current_price` forward over one horizon. Draws exactly one
/// RNG value, so callers control reproducibility through seed and call
/// order.
pub fn predict(
    current_price: f64,
    combined_signal: f64,
    horizon: Horizon,
    rng: &mut impl Rng,
) -> Prediction {
    let base_change = combined_signal * SIGNAL_DRIFT * f64::from(horizon.days).sqrt();
    let noise = rng.gen_range(-0.5..0.5) * NOISE_SPAN;
    let total_change = base_change + noise;

    let price = current_price * (1.0 + total_change);
    let change = price - current_price;
    let change_pct = total_change * 100.0;

    Prediction {
        days: horizon.days,
        price,
        change,
        change_pct,
        confidence: ConfidenceLabel::from_confidence(horizon.confidence),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn predict_is_deterministic_for_a_seed() {
        let horizon = Horizon::new(7, 0.6);
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let a = predict(2456.75, 0.35, horizon, &mut rng_a);
        let b = predict(2456.75, 0.35, horizon, &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    fn predict_noise_is_bounded() {
        let mut rng = StdRng::seed_from_u64(3);
        let horizon = Horizon::new(7, 0.6);
        for _ in 0..200 {
            let prediction = predict(100.0, 0.4, horizon, &mut rng);
            let base = 0.4 * 0.1 * 7.0_f64.sqrt();
            let total = prediction.price / 100.0 - 1.0;
            assert!((total - base).abs() <= 0.025 + 1e-12);
        }
    }

    #[test]
    fn predict_zero_signal_stays_within_noise() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let prediction = predict(100.0, 0.0, Horizon::new(1, 0.8), &mut rng);
            assert!(prediction.price >= 97.5 - 1e-9);
            assert!(prediction.price <= 102.5 + 1e-9);
        }
    }

    #[test]
    fn predict_drift_grows_with_sqrt_days() {
        // With the same single draw, a 4x horizon doubles the base drift.
        let mut rng_a = StdRng::seed_from_u64(10);
        let mut rng_b = StdRng::seed_from_u64(10);
        let one = predict(100.0, 0.5, Horizon::new(1, 0.8), &mut rng_a);
        let four = predict(100.0, 0.5, Horizon::new(4, 0.8), &mut rng_b);

        let noise = one.price / 100.0 - 1.0 - 0.05;
        let four_total = four.price / 100.0 - 1.0;
        assert!((four_total - (0.1 + noise)).abs() < 1e-9);
    }

    #[test]
    fn predict_change_fields_are_consistent() {
        let mut rng = StdRng::seed_from_u64(21);
        let prediction = predict(250.0, -0.2, Horizon::new(30, 0.4), &mut rng);
        assert!((prediction.change - (prediction.price - 250.0)).abs() < 1e-9);
        assert!((prediction.change_pct - prediction.change / 250.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn confidence_label_thresholds() {
        assert_eq!(ConfidenceLabel::from_confidence(0.8), ConfidenceLabel::High);
        assert_eq!(
            ConfidenceLabel::from_confidence(0.71),
            ConfidenceLabel::High
        );
        assert_eq!(
            ConfidenceLabel::from_confidence(0.7),
            ConfidenceLabel::Medium
        );
        assert_eq!(
            ConfidenceLabel::from_confidence(0.6),
            ConfidenceLabel::Medium
        );
        assert_eq!(
            ConfidenceLabel::from_confidence(0.41),
            ConfidenceLabel::Medium
        );
        assert_eq!(ConfidenceLabel::from_confidence(0.4), ConfidenceLabel::Low);
        assert_eq!(ConfidenceLabel::from_confidence(0.1), ConfidenceLabel::Low);
    }

    #[test]
    fn confidence_label_ignores_signal() {
        let mut rng = StdRng::seed_from_u64(33);
        let horizon = Horizon::new(1, 0.3);
        let strong = predict(100.0, 0.9, horizon, &mut rng);
        let weak = predict(100.0, -0.9, horizon, &mut rng);
        assert_eq!(strong.confidence, ConfidenceLabel::Low);
        assert_eq!(weak.confidence, ConfidenceLabel::Low);
    }

    #[test]
    fn default_horizons() {
        let defaults = Horizon::defaults();
        assert_eq!(defaults.len(), 3);
        assert_eq!(defaults[0], Horizon::new(1, 0.8));
        assert_eq!(defaults[1], Horizon::new(7, 0.6));
        assert_eq!(defaults[2], Horizon::new(30, 0.4));
    }

    #[test]
    fn confidence_label_display() {
        assert_eq!(ConfidenceLabel::High.to_string(), "High");
        assert_eq!(ConfidenceLabel::Medium.to_string(), "Medium");
        assert_eq!(ConfidenceLabel::Low.to_string(), "Low");
    }
}
