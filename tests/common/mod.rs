#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use stockcast::domain::error::StockcastError;
use stockcast::domain::instrument::{Instrument, Sector};
use stockcast::ports::history_port::HistoryPort;

pub struct MockHistoryPort {
    pub data: HashMap<String, Vec<f64>>,
    pub errors: HashMap<String, String>,
}

impl MockHistoryPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_history(mut self, symbol: &str, prices: Vec<f64>) -> Self {
        self.data.insert(symbol.to_string(), prices);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl HistoryPort for MockHistoryPort {
    fn fetch_history(&self, symbol: &str) -> Result<Vec<f64>, StockcastError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(StockcastError::HistoryLoad {
                symbol: symbol.to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.data.get(symbol).cloned().unwrap_or_default())
    }

    fn list_symbols(&self) -> Result<Vec<String>, StockcastError> {
        let mut symbols: Vec<String> = self.data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }
}

pub fn make_instrument(symbol: &str, sector: Sector, price: f64) -> Instrument {
    Instrument::new(symbol, "Test Corp", sector, price)
}

pub fn oil_and_gas_instrument() -> Instrument {
    Instrument::new("RELIANCE", "Reliance Industries", Sector::OilGas, 2456.75)
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A strictly rising history of `count` prices ending at `end`.
pub fn rising_history(count: usize, end: f64) -> Vec<f64> {
    (0..count)
        .map(|i| end - (count - 1 - i) as f64)
        .collect()
}

/// A strictly falling history of `count` prices ending at `end`.
pub fn falling_history(count: usize, end: f64) -> Vec<f64> {
    (0..count)
        .map(|i| end + (count - 1 - i) as f64)
        .collect()
}
