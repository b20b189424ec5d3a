//! Port traits decoupling the domain from external resources.

pub mod config_port;
pub mod history_port;
