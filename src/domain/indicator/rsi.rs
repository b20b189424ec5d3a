//! RSI (Relative Strength Index).
//!
//! Simple averages over the last `period` price changes, no Wilder
//! smoothing: gains and losses are summed over the window and divided by
//! `period`, then RSI = 100 - (100 / (1 + avg_gain / avg_loss)).
//! If avg_loss == 0 (all gains, or a flat window): RSI = 100.
//!
//! Needs `period + 1` prices to form `period` changes.

pub const DEFAULT_PERIOD: usize = 14;

pub fn rsi(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period + 1 {
        return None;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in prices.len() - period..prices.len() {
        let change = prices[i] - prices[i - 1];
        if change > 0.0 {
            gains += change;
        } else {
            losses -= change;
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}
