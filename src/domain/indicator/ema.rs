//! Exponential Moving Average.
//!
//! With a previous EMA, one smoothing step: EMA = (C - prev) * k + prev
//! where k = 2/(period+1). Without one, the seed is the mean of the FIRST
//! `period` prices, not a recursive pass over the whole series.

use crate::domain::indicator::sma::sma;

pub fn ema(prices: &[f64], period: usize, prev: Option<f64>) -> Option<f64> {
    if period == 0 || prices.is_empty() {
        return None;
    }
    match prev {
        Some(prev_ema) => {
            let last = prices[prices.len() - 1];
            let k = 2.0 / (period as f64 + 1.0);
            Some((last - prev_ema) * k + prev_ema)
        }
        None => sma(prices.get(..period)?, period),
    }
}
