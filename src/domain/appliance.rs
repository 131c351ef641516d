use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

/// Whether an appliance draws power continuously or only when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UsageMode {
    AlwaysOn,
    OnDemand,
}

impl UsageMode {
    /// All modes in catalog order.
    pub const ALL: [UsageMode; 2] = [UsageMode::AlwaysOn, UsageMode::OnDemand];

    /// Catalog spelling of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlwaysOn => "ALWAYS_ON",
            Self::OnDemand => "ON_DEMAND",
        }
    }
}

impl fmt::Display for UsageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown usage mode \"{s}\", expected one of {}",
                    Self::ALL.map(|m| m.as_str()).join(", ")
                )
            })
    }
}

/// A catalog entry describing one device.
///
/// Appliances are immutable once built. Catalogs and households share them
/// through `Rc<Appliance>` rather than cloning.
///
/// # Examples
///
/// ```
/// use co2_scenarios::domain::{Appliance, UsageMode};
///
/// let fridge = Appliance::new("Fridge", 150.0, 50.0, UsageMode::AlwaysOn);
/// assert_eq!(
///     fridge.to_string(),
///     "Fridge: Power consumption: 150, Embodied emissions: 50, Usage mode: ALWAYS_ON."
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Appliance {
    name: String,
    power_consumption: f64,
    embodied_emissions: f64,
    usage_mode: UsageMode,
    parameters: BTreeMap<String, Value>,
}

impl Appliance {
    /// Creates an appliance with no extra parameters.
    pub fn new(
        name: impl Into<String>,
        power_consumption: f64,
        embodied_emissions: f64,
        usage_mode: UsageMode,
    ) -> Self {
        Self::with_parameters(
            name,
            power_consumption,
            embodied_emissions,
            usage_mode,
            BTreeMap::new(),
        )
    }

    /// Creates an appliance carrying free-form `parameters`.
    pub fn with_parameters(
        name: impl Into<String>,
        power_consumption: f64,
        embodied_emissions: f64,
        usage_mode: UsageMode,
        parameters: BTreeMap<String, Value>,
    ) -> Self {
        Self {
            name: name.into(),
            power_consumption,
            embodied_emissions,
            usage_mode,
            parameters,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power_consumption(&self) -> f64 {
        self.power_consumption
    }

    pub fn embodied_emissions(&self) -> f64 {
        self.embodied_emissions
    }

    pub fn usage_mode(&self) -> UsageMode {
        self.usage_mode
    }

    pub fn parameters(&self) -> &BTreeMap<String, Value> {
        &self.parameters
    }

    /// Looks up a single free-form parameter.
    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Power consumption: {}, Embodied emissions: {}, Usage mode: {}.",
            self.name, self.power_consumption, self.embodied_emissions, self.usage_mode
        )
    }
}
