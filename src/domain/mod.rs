//! Core domain types and logic.

pub mod series;
pub mod instrument;
pub mod catalog;
pub mod indicator;
pub mod signal;
pub mod forecast;
pub mod recommendation;
pub mod synthetic;
pub mod engine;
pub mod config;
pub mod error;
