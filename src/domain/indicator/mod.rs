//! Technical indicator implementations.
//!
//! Pure functions over a chronological price slice, one module per
//! indicator. Every indicator returns `None` while the series is shorter
//! than its window; consumers treat `None` as neutral, never as an error.
//!
//! `IndicatorSet` bundles one full pass with the conventional windows.

pub mod bollinger;
pub mod ema;
pub mod levels;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use bollinger::BollingerBands;
pub use levels::{Level, LevelStrength, Levels};
pub use macd::Macd;

use crate::domain::series::PriceSeries;

/// Trailing window for the simple moving average.
pub const SMA_PERIOD: usize = 20;
/// Seed window for the exponential moving average.
pub const EMA_PERIOD: usize = 20;

/// One full indicator pass. Each moving-window field is `None` whenever the
/// series was too short for it; `levels` only needs the current price and
/// is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSet {
    pub sma: Option<f64>,
    pub ema: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<Macd>,
    pub bollinger: Option<BollingerBands>,
    pub levels: Levels,
}

impl IndicatorSet {
    /// Compute the standard set: SMA(20), EMA(20), RSI(14), MACD(12,26,9)
    /// and Bollinger(20, 2.0). `current_price` is the live snapshot, which
    /// may differ from the last series point when the caller supplied its
    /// own history.
    pub fn compute(series: &PriceSeries, current_price: f64) -> Self {
        let prices = series.as_slice();
        Self {
            sma: sma::sma(prices, SMA_PERIOD),
            ema: ema::ema(prices, EMA_PERIOD, None),
            rsi: rsi::rsi(prices, rsi::DEFAULT_PERIOD),
            macd: macd::macd(
                prices,
                macd::DEFAULT_FAST,
                macd::DEFAULT_SLOW,
                macd::DEFAULT_SIGNAL,
            ),
            bollinger: bollinger::bollinger(
                prices,
                bollinger::DEFAULT_PERIOD,
                bollinger::DEFAULT_MULT,
            ),
            levels: levels::support_resistance(current_price),
        }
    }
}
