//! Household model: appliances, households, and the scenarios built from them.

/// Catalog appliance and its usage pattern.
pub mod appliance;
/// Region, time window, and the household that combines them with appliances.
pub mod household;
/// Named scenarios and their per-appliance CO2 evaluation.
pub mod scenario;

// Re-export the main types for convenience
pub use appliance::{Appliance, UsageMode};
pub use household::{Household, Region, TimeWindow};
pub use scenario::{Co2Contribution, Scenario};
