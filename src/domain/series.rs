//! Validated price history.
//!
//! `PriceSeries` is the entry gate for price data: construction rejects
//! empty, non-positive and non-finite input, so everything downstream can
//! assume a non-empty series of positive finite prices in chronological
//! order, oldest first.

/// Why a candidate price history was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    #[error("series is empty")]
    Empty,

    #[error("price at index {index} is not positive: {price}")]
    NonPositive { index: usize, price: f64 },

    #[error("price at index {index} is not finite")]
    NonFinite { index: usize },
}

/// A non-empty series of positive, finite prices, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries(Vec<f64>);

impl PriceSeries {
    pub fn new(prices: Vec<f64>) -> Result<Self, SeriesError> {
        if prices.is_empty() {
            return Err(SeriesError::Empty);
        }
        for (index, &price) in prices.iter().enumerate() {
            if !price.is_finite() {
                return Err(SeriesError::NonFinite { index });
            }
            if price <= 0.0 {
                return Err(SeriesError::NonPositive { index, price });
            }
        }
        Ok(Self(prices))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The most recent price. Safe to index: the series is never empty.
    pub fn last(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}
