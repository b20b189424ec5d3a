//! stockcast — technical signal engine and multi-horizon price forecaster.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`], the command-line front end in
//! [`cli`].
//!
//! The engine is stateless: each [`domain::engine::analyze`] call reads one
//! instrument price snapshot plus an injected RNG and returns a complete
//! result, so concurrent requests need no coordination and a seeded run
//! reproduces bit for bit.

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
