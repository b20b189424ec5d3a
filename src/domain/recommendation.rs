//! Trading recommendation classifier.
//!
//! Pure thresholding on the combined signal: an action with a canned
//! confidence percentage, target and stop-loss prices scaled by signal
//! strength, a risk tier from |signal|, and a phrase bank keyed by signal
//! band. The phrases are coarse by construction; they are not per-factor
//! attribution and may name indicators the request never computed.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl Action {
    pub fn is_buy(&self) -> bool {
        matches!(self, Action::StrongBuy | Action::Buy)
    }

    pub fn is_sell(&self) -> bool {
        matches!(self, Action::StrongSell | Action::Sell)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::StrongBuy => "STRONG BUY",
            Action::Buy => "BUY",
            Action::Hold => "HOLD",
            Action::Sell => "SELL",
            Action::StrongSell => "STRONG SELL",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub action: Action,
    /// Canned confidence percentage tied to the action band.
    pub confidence_pct: u8,
    pub target_price: f64,
    pub stop_loss: f64,
    pub risk: RiskTier,
    pub reasoning: Vec<&'static str>,
}

/// Classify a combined signal into a trading recommendation.
pub fn recommend(combined_signal: f64, current_price: f64) -> Recommendation {
    let (action, confidence_pct) = if combined_signal > 0.3 {
        (Action::StrongBuy, 78)
    } else if combined_signal > 0.1 {
        (Action::Buy, 65)
    } else if combined_signal > -0.1 {
        (Action::Hold, 55)
    } else if combined_signal > -0.3 {
        (Action::Sell, 65)
    } else {
        (Action::StrongSell, 78)
    };

    Recommendation {
        action,
        confidence_pct,
        target_price: current_price * (1.0 + combined_signal * 0.05),
        stop_loss: current_price * (1.0 - combined_signal.abs() * 0.03),
        risk: risk_tier(combined_signal),
        reasoning: reasoning(combined_signal),
    }
}

fn risk_tier(combined_signal: f64) -> RiskTier {
    let magnitude = combined_signal.abs();
    if magnitude > 0.5 {
        RiskTier::High
    } else if magnitude > 0.2 {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

fn reasoning(combined_signal: f64) -> Vec<&'static str> {
    if combined_signal > 0.2 {
        vec![
            "EMA(10) crossed above EMA(20)",
            "RSI recovering from oversold",
            "MACD bullish crossover",
            "Strong momentum indicators suggest upward movement",
        ]
    } else if combined_signal > 0.0 {
        vec![
            "Positive technical signals",
            "Price above key moving averages",
            "Moderate bullish momentum",
        ]
    } else if combined_signal > -0.2 {
        vec![
            "Mixed signals from technical indicators",
            "Trading within Bollinger Bands",
            "RSI in neutral zone",
        ]
    } else {
        vec![
            "Bearish technical signals",
            "Price below key support levels",
            "Negative momentum indicators",
        ]
    }
}
