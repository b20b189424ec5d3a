//! CSV price-history adapter.
//!
//! Reads `<SYMBOL>.csv` files of `date,close` rows (ISO dates, header row
//! expected) from a base directory. Rows are sorted by date before the
//! closes are returned, so an export in any row order still analyzes
//! oldest-first.

use crate::domain::error::StockcastError;
use crate::ports::history_port::HistoryPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvHistoryAdapter {
    base_path: PathBuf,
}

impl CsvHistoryAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol.to_uppercase()))
    }
}

impl HistoryPort for CsvHistoryAdapter {
    fn fetch_history(&self, symbol: &str) -> Result<Vec<f64>, StockcastError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| StockcastError::HistoryLoad {
            symbol: symbol.to_string(),
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut rows: Vec<(NaiveDate, f64)> = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| StockcastError::HistoryLoad {
                symbol: symbol.to_string(),
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| StockcastError::HistoryLoad {
                symbol: symbol.to_string(),
                reason: "missing date column".to_string(),
            })?;
            let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|e| {
                StockcastError::HistoryLoad {
                    symbol: symbol.to_string(),
                    reason: format!("invalid date '{}': {}", date_str, e),
                }
            })?;

            let close: f64 = record
                .get(1)
                .ok_or_else(|| StockcastError::HistoryLoad {
                    symbol: symbol.to_string(),
                    reason: "missing close column".to_string(),
                })?
                .trim()
                .parse()
                .map_err(|e| StockcastError::HistoryLoad {
                    symbol: symbol.to_string(),
                    reason: format!("invalid close value: {}", e),
                })?;

            rows.push((date, close));
        }

        rows.sort_by_key(|(date, _)| *date);
        Ok(rows.into_iter().map(|(_, close)| close).collect())
    }

    fn list_symbols(&self) -> Result<Vec<String>, StockcastError> {
        let mut symbols = Vec::new();

        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if let Some(stem) = name_str.strip_suffix(".csv") {
                symbols.push(stem.to_uppercase());
            }
        }

        symbols.sort();
        Ok(symbols)
    }
}
