//! Price-history access port trait.

use crate::domain::error::StockcastError;

pub trait HistoryPort {
    /// Closing prices for `symbol` in chronological order, oldest first.
    fn fetch_history(&self, symbol: &str) -> Result<Vec<f64>, StockcastError>;

    /// Symbols this source can serve, sorted.
    fn list_symbols(&self) -> Result<Vec<String>, StockcastError>;
}
