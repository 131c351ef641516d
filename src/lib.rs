//! Interactive household appliance CO2 scenario modeling.

/// Command loop and per-command handlers.
pub mod app;
pub mod cli;
pub mod config;
/// Appliances, households, and scenarios.
pub mod domain;
pub mod error;
pub mod loader;
pub mod logging;
pub mod outcome;
pub mod report;
