//! MACD (Moving Average Convergence Divergence), simplified.
//!
//! MACD Line = EMA(fast) - EMA(slow), both freshly seeded (each is the mean
//! of its leading window). The signal line is a copy of the MACD line and
//! the histogram is always 0; only the `macd` field carries information.
//! Consumers must read `macd`, never `histogram`.
//!
//! Default parameters: fast=12, slow=26, signal=9.
//! Warmup: `slow` prices.

use crate::domain::indicator::ema::ema;

pub const DEFAULT_FAST: usize = 12;
pub const DEFAULT_SLOW: usize = 26;
pub const DEFAULT_SIGNAL: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Macd {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

pub fn macd(prices: &[f64], fast: usize, slow: usize, signal_period: usize) -> Option<Macd> {
    if fast == 0 || slow == 0 || signal_period == 0 || prices.len() < slow {
        return None;
    }

    let fast_ema = ema(prices, fast, None)?;
    let slow_ema = ema(prices, slow, None)?;
    let line = fast_ema - slow_ema;

    Some(Macd {
        macd: line,
        signal: line,
        histogram: 0.0,
    })
}
