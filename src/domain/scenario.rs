use std::fmt;
use std::rc::Rc;

use rand::Rng;

use super::appliance::Appliance;
use super::household::Household;

/// Placeholder scale applied to the coin flip in [`Scenario::evaluate`].
pub const CONTRIBUTION_SCALE: f64 = 100.0;

/// Estimated CO2 attributed to one appliance of an evaluated scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Co2Contribution {
    appliance: Rc<Appliance>,
    value: f64,
}

impl Co2Contribution {
    pub fn new(appliance: Rc<Appliance>, value: f64) -> Self {
        Self { appliance, value }
    }

    pub fn appliance(&self) -> &Rc<Appliance> {
        &self.appliance
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Co2Contribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.appliance.name(), self.value)
    }
}

/// A named household configuration under evaluation.
///
/// Names are not unique; lookups by name take the first match.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    name: String,
    household: Household,
}

impl Scenario {
    pub fn new(name: impl Into<String>, household: Household) -> Self {
        Self {
            name: name.into(),
            household,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn household(&self) -> &Household {
        &self.household
    }

    pub fn set_household(&mut self, household: Household) {
        self.household = household;
    }

    /// Produces one contribution per household appliance, in household order.
    ///
    /// The value is a placeholder, not an emissions model: a uniform draw in
    /// `[0, 1)` rounded to 0 or 1 and scaled by [`CONTRIBUTION_SCALE`].
    pub fn evaluate<R: Rng>(&self, rng: &mut R) -> Vec<Co2Contribution> {
        self.household
            .iter_appliances()
            .map(|appliance| {
                let value = rng.random::<f64>().round() * CONTRIBUTION_SCALE;
                Co2Contribution::new(Rc::clone(appliance), value)
            })
            .collect()
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scenario: {}: Household: {}.", self.name, self.household)
    }
}

/// Returns `scenarios` without any entry named exactly `name`.
pub fn without_scenario(scenarios: Vec<Scenario>, name: &str) -> Vec<Scenario> {
    scenarios.into_iter().filter(|s| s.name != name).collect()
}
