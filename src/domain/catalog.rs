//! Built-in instrument catalog.
//!
//! A small set of large-cap NSE names with reference prices, enough to run
//! the engine without any external data source.

use crate::domain::instrument::{Instrument, Sector};

/// All catalog instruments, in listing order.
pub fn instruments() -> Vec<Instrument> {
    vec![
        Instrument::new("RELIANCE", "Reliance Industries", Sector::OilGas, 2456.75),
        Instrument::new("TCS", "Tata Consultancy Services", Sector::ItServices, 3842.30),
        Instrument::new("HDFCBANK", "HDFC Bank", Sector::Banking, 1687.45),
        Instrument::new("INFY", "Infosys", Sector::ItServices, 1834.20),
        Instrument::new("ITC", "ITC Limited", Sector::Fmcg, 456.80),
        Instrument::new("SBIN", "State Bank of India", Sector::Banking, 789.35),
    ]
}

/// Look up a catalog instrument by symbol, case-insensitively.
pub fn find(symbol: &str) -> Option<Instrument> {
    let wanted = symbol.to_uppercase();
    instruments().into_iter().find(|i| i.symbol == wanted)
}
