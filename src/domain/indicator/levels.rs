//! Support and resistance levels.
//!
//! Fixed offsets from the current price: resistance at x1.05 and x1.025,
//! support at x0.985 and x0.97. Each level carries a display distance that
//! is a fixed label, NOT recomputed from its multiplier (e.g. the x0.985
//! support is labelled -1.50%). Historical prices play no part.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelStrength {
    Strong,
    Medium,
}

impl fmt::Display for LevelStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelStrength::Strong => write!(f, "Strong"),
            LevelStrength::Medium => write!(f, "Medium"),
        }
    }
}

/// One price level with its strength and display distance in percent,
/// positive above the current price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    pub price: f64,
    pub strength: LevelStrength,
    pub distance_pct: f64,
}

/// Two resistance levels above the price and two supports below, strong
/// level first in each pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Levels {
    pub resistance: [Level; 2],
    pub support: [Level; 2],
}

pub fn support_resistance(current_price: f64) -> Levels {
    Levels {
        resistance: [
            Level {
                price: current_price * 1.05,
                strength: LevelStrength::Strong,
                distance_pct: 5.02,
            },
            Level {
                price: current_price * 1.025,
                strength: LevelStrength::Medium,
                distance_pct: 2.58,
            },
        ],
        support: [
            Level {
                price: current_price * 0.985,
                strength: LevelStrength::Strong,
                distance_pct: -1.50,
            },
            Level {
                price: current_price * 0.97,
                strength: LevelStrength::Medium,
                distance_pct: -3.12,
            },
        ],
    }
}
