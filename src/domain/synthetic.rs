//! Synthetic price history generation.
//!
//! A bounded random walk: the start point is drawn in [0.8, 1.2) of the
//! instrument's reference price, each step moves by a uniform fraction of
//! the running price scaled by sector volatility with a 5% per-step loss
//! floor, and the final point is pinned to the reference price so the
//! series always ends at the live quote.
//!
//! Draw order is fixed (one start draw, then one per point); seeded runs
//! reproduce bit for bit.

use crate::domain::instrument::Instrument;
use crate::domain::series::{PriceSeries, SeriesError};
use rand::Rng;

/// Number of points synthesized when an analysis request has no history.
pub const DEFAULT_HISTORY_DAYS: usize = 50;

/// A walk step never drops the price below this fraction of its previous
/// value. The pinned final point is exempt.
pub const STEP_FLOOR: f64 = 0.95;

pub fn generate_history(
    instrument: &Instrument,
    days: usize,
    rng: &mut impl Rng,
) -> Result<PriceSeries, SeriesError> {
    if days == 0 {
        return Err(SeriesError::Empty);
    }

    let base = instrument.price;
    let volatility = instrument.sector.volatility();
    let mut prices = Vec::with_capacity(days);
    let mut current = base * rng.gen_range(0.8..1.2);

    for _ in 0..days {
        let change = rng.gen_range(-0.5..0.5) * volatility * current;
        current = (current + change).max(current * STEP_FLOOR);
        prices.push(current);
    }

    prices[days - 1] = base;
    PriceSeries::new(prices)
}
