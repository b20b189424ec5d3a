//! Sub-signal analyzers and signal fusion.
//!
//! Each analyzer maps indicator values to a score in [-1, 1], bullish
//! positive. An analyzer whose indicators are unavailable scores 0 and
//! contributes nothing; missing data is never an error at this layer.
//! The combined signal is a weighted sum over [trend, momentum,
//! volatility].

use crate::domain::indicator::{BollingerBands, IndicatorSet, Macd};

/// Fusion weights for [trend, momentum, volatility].
pub const SIGNAL_WEIGHTS: [f64; 3] = [0.4, 0.35, 0.25];

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

/// The three analyzer scores for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubSignals {
    pub trend: f64,
    pub momentum: f64,
    pub volatility: f64,
}

impl SubSignals {
    pub fn from_indicators(indicators: &IndicatorSet, current_price: f64) -> Self {
        Self {
            trend: trend_signal(indicators.sma, indicators.ema, current_price),
            momentum: momentum_signal(indicators.rsi, indicators.macd.as_ref()),
            volatility: volatility_signal(indicators.bollinger.as_ref(), current_price),
        }
    }

    pub fn combined(&self) -> f64 {
        combine_signals(self.trend, self.momentum, self.volatility)
    }
}

/// Trend score from moving-average alignment. Needs both averages;
/// otherwise neutral.
///
/// Three bullish conditions are weighted 0.3 + 0.4 + 0.3, then the sum is
/// centered by -0.5, giving a range of [-0.5, 0.5].
pub fn trend_signal(sma: Option<f64>, ema: Option<f64>, current_price: f64) -> f64 {
    let (sma, ema) = match (sma, ema) {
        (Some(sma), Some(ema)) => (sma, ema),
        _ => return 0.0,
    };

    let mut signal: f64 = 0.0;
    if ema > sma {
        signal += 0.3;
    }
    if current_price > ema {
        signal += 0.4;
    }
    if current_price > sma {
        signal += 0.3;
    }
    (signal - 0.5).clamp(-1.0, 1.0)
}

/// Momentum score from RSI bands and the MACD line sign. Each missing
/// indicator simply skips its contribution.
///
/// An RSI of exactly 0.0 is a real reading (deeply oversold) and scores
/// +0.3 like any other sub-30 value.
pub fn momentum_signal(rsi: Option<f64>, macd: Option<&Macd>) -> f64 {
    let mut signal: f64 = 0.0;

    if let Some(rsi) = rsi {
        if rsi > RSI_OVERBOUGHT {
            signal -= 0.3;
        } else if rsi < RSI_OVERSOLD {
            signal += 0.3;
        } else if rsi > 50.0 {
            signal += 0.2;
        } else {
            signal -= 0.2;
        }
    }

    if let Some(macd) = macd {
        if macd.macd > 0.0 {
            signal += 0.3;
        }
    }

    signal.clamp(-1.0, 1.0)
}

/// Mean-reversion score from the price's position inside the Bollinger
/// band: near the top is bearish, near the bottom bullish. A collapsed
/// band (zero width) reads as mid-band, neutral.
pub fn volatility_signal(bollinger: Option<&BollingerBands>, current_price: f64) -> f64 {
    let bands = match bollinger {
        Some(bands) => bands,
        None => return 0.0,
    };

    let width = bands.upper - bands.lower;
    if width == 0.0 {
        return 0.0;
    }

    let position = (current_price - bands.lower) / width;
    if position > 0.8 {
        -0.3
    } else if position < 0.2 {
        0.3
    } else {
        0.0
    }
}

/// Weighted fusion of the three analyzer scores.
pub fn combine_signals(trend: f64, momentum: f64, volatility: f64) -> f64 {
    trend * SIGNAL_WEIGHTS[0] + momentum * SIGNAL_WEIGHTS[1] + volatility * SIGNAL_WEIGHTS[2]
}
