//! Instruments and sector classification.

use rand::Rng;
use std::fmt;

/// Per-step volatility for sectors without a dedicated entry.
pub const DEFAULT_VOLATILITY: f64 = 0.025;

/// A market tick never drops the price below this fraction of its previous
/// value.
pub const TICK_FLOOR: f64 = 0.98;

/// Sector classification, used only to pick a volatility profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sector {
    ItServices,
    Banking,
    OilGas,
    Fmcg,
    Telecom,
    Paints,
    Automotive,
    Construction,
    Other,
}

impl Sector {
    /// Per-step volatility used by the synthetic history generator and by
    /// market tick simulation.
    pub fn volatility(&self) -> f64 {
        match self {
            Sector::ItServices => 0.02,
            Sector::Banking => 0.025,
            Sector::OilGas => 0.03,
            Sector::Fmcg => 0.015,
            Sector::Telecom => 0.025,
            Sector::Paints => 0.02,
            Sector::Automotive => 0.028,
            Sector::Construction => 0.03,
            Sector::Other => DEFAULT_VOLATILITY,
        }
    }

    /// Parse a sector display name. Unknown names map to `Other` rather
    /// than failing, so new sectors degrade to the default volatility.
    pub fn parse(name: &str) -> Sector {
        match name {
            "IT Services" => Sector::ItServices,
            "Banking" => Sector::Banking,
            "Oil & Gas" => Sector::OilGas,
            "FMCG" => Sector::Fmcg,
            "Telecom" => Sector::Telecom,
            "Paints" => Sector::Paints,
            "Automotive" => Sector::Automotive,
            "Construction" => Sector::Construction,
            _ => Sector::Other,
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sector::ItServices => "IT Services",
            Sector::Banking => "Banking",
            Sector::OilGas => "Oil & Gas",
            Sector::Fmcg => "FMCG",
            Sector::Telecom => "Telecom",
            Sector::Paints => "Paints",
            Sector::Automotive => "Automotive",
            Sector::Construction => "Construction",
            Sector::Other => "Other",
        };
        write!(f, "{name}")
    }
}

/// A tradable instrument with its current reference price.
///
/// The engine never mutates an instrument; `apply_tick` exists for callers
/// that want to simulate a live feed between analysis requests.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    pub symbol: String,
    pub name: String,
    pub sector: Sector,
    pub price: f64,
}

impl Instrument {
    pub fn new(symbol: &str, name: &str, sector: Sector, price: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            sector,
            price,
        }
    }

    /// Apply one simulated market tick: a uniform move scaled by sector
    /// volatility, floored at 98% of the previous price.
    pub fn apply_tick(&mut self, rng: &mut impl Rng) {
        let change_pct = rng.gen_range(-0.5..0.5) * self.sector.volatility();
        let moved = self.price * (1.0 + change_pct);
        self.price = moved.max(self.price * TICK_FLOOR);
    }
}
