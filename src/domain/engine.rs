//! Analysis orchestration.
//!
//! One `analyze` call is one stateless request: validate inputs, snapshot
//! the instrument price, obtain a history (supplied or synthesized),
//! compute the indicator set, fuse sub-signals, then emit per-horizon
//! forecasts and a recommendation. Nothing is cached between calls and
//! the only randomness is the injected RNG, drawn in a fixed order
//! (synthesis first, then horizons in caller order).

use crate::domain::error::StockcastError;
use crate::domain::forecast::{self, Horizon, Prediction};
use crate::domain::indicator::IndicatorSet;
use crate::domain::instrument::Instrument;
use crate::domain::recommendation::{self, Recommendation};
use crate::domain::series::PriceSeries;
use crate::domain::signal::SubSignals;
use crate::domain::synthetic::{self, DEFAULT_HISTORY_DAYS};
use rand::Rng;

/// Full result of one analysis request.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub symbol: String,
    /// The price snapshot the whole request was computed against.
    pub price: f64,
    /// Number of history points the indicators saw.
    pub history_len: usize,
    /// Whether the history was synthesized rather than supplied.
    pub synthetic_history: bool,
    pub indicators: IndicatorSet,
    pub signals: SubSignals,
    pub combined_signal: f64,
    pub predictions: Vec<Prediction>,
    pub recommendation: Recommendation,
}

/// Analyze with the default synthetic history length of 50 points.
pub fn analyze(
    instrument: &Instrument,
    history: Option<&[f64]>,
    horizons: &[Horizon],
    rng: &mut impl Rng,
) -> Result<Analysis, StockcastError> {
    analyze_with_history_len(instrument, history, horizons, DEFAULT_HISTORY_DAYS, rng)
}

/// Analyze with an explicit synthetic history length, used when no usable
/// history is supplied. An empty supplied slice counts as absent.
pub fn analyze_with_history_len(
    instrument: &Instrument,
    history: Option<&[f64]>,
    horizons: &[Horizon],
    history_days: usize,
    rng: &mut impl Rng,
) -> Result<Analysis, StockcastError> {
    // One snapshot per request; everything below reads only this copy.
    let price = instrument.price;
    if !price.is_finite() || price <= 0.0 {
        return Err(StockcastError::InvalidPrice {
            symbol: instrument.symbol.clone(),
            price,
        });
    }

    for horizon in horizons {
        validate_horizon(horizon)?;
    }

    let (series, synthetic_history) = match history {
        Some(prices) if !prices.is_empty() => {
            let series = PriceSeries::new(prices.to_vec()).map_err(|source| {
                StockcastError::InvalidHistory {
                    symbol: instrument.symbol.clone(),
                    source,
                }
            })?;
            (series, false)
        }
        _ => {
            let series =
                synthetic::generate_history(instrument, history_days, rng).map_err(|source| {
                    StockcastError::InvalidHistory {
                        symbol: instrument.symbol.clone(),
                        source,
                    }
                })?;
            (series, true)
        }
    };

    let indicators = IndicatorSet::compute(&series, price);
    let signals = SubSignals::from_indicators(&indicators, price);
    let combined_signal = signals.combined();

    let predictions: Vec<Prediction> = horizons
        .iter()
        .map(|&horizon| forecast::predict(price, combined_signal, horizon, rng))
        .collect();

    let recommendation = recommendation::recommend(combined_signal, price);

    Ok(Analysis {
        symbol: instrument.symbol.clone(),
        price,
        history_len: series.len(),
        synthetic_history,
        indicators,
        signals,
        combined_signal,
        predictions,
        recommendation,
    })
}

fn validate_horizon(horizon: &Horizon) -> Result<(), StockcastError> {
    if horizon.days == 0 {
        return Err(StockcastError::InvalidHorizon { days: horizon.days });
    }
    if !(horizon.confidence > 0.0 && horizon.confidence <= 1.0) {
        return Err(StockcastError::InvalidConfidence {
            days: horizon.days,
            value: horizon.confidence,
        });
    }
    Ok(())
}
