use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use serde::Deserialize;

use super::appliance::Appliance;

/// Display format for time window bounds, modeled on an en-US locale rendering.
pub const LOCALE_DATETIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Grid region a household is located in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    Us,
    Eu,
    Asia,
    #[default]
    NotSpecified,
}

impl Region {
    /// All regions in menu order.
    pub const ALL: [Region; 4] = [Region::Us, Region::Eu, Region::Asia, Region::NotSpecified];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Eu => "EU",
            Self::Asia => "ASIA",
            Self::NotSpecified => "NOT_SPECIFIED",
        }
    }

    /// Resolves a 1-based menu choice or a region name (case-insensitive).
    pub fn from_menu_choice(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(idx) = input.parse::<usize>() {
            return idx.checked_sub(1).and_then(|i| Self::ALL.get(i).copied());
        }
        input.to_ascii_uppercase().parse().ok()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| format!("unknown region \"{s}\""))
    }
}

/// Start and end of the period a household is evaluated over.
///
/// `start <= end` is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Zero-length window at the current local time.
    pub fn now() -> Self {
        let now = Local::now().naive_local();
        Self::new(now, now)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format(LOCALE_DATETIME_FORMAT),
            self.end.format(LOCALE_DATETIME_FORMAT)
        )
    }
}

/// A region, a time window, and the appliances in use.
#[derive(Debug, Clone, PartialEq)]
pub struct Household {
    region: Region,
    time_window: TimeWindow,
    appliances: Vec<Rc<Appliance>>,
}

impl Household {
    pub fn new(region: Region, time_window: TimeWindow, appliances: Vec<Rc<Appliance>>) -> Self {
        Self {
            region,
            time_window,
            appliances,
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn time_window(&self) -> TimeWindow {
        self.time_window
    }

    /// Returns a copy of the appliance list. The appliances themselves stay shared.
    pub fn appliances(&self) -> Vec<Rc<Appliance>> {
        self.appliances.clone()
    }

    /// Iterates the appliances without copying the list.
    pub fn iter_appliances(&self) -> impl Iterator<Item = &Rc<Appliance>> {
        self.appliances.iter()
    }

    pub fn appliance_count(&self) -> usize {
        self.appliances.len()
    }
}

impl fmt::Display for Household {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {},", self.region, self.time_window)?;
        for appliance in &self.appliances {
            write!(f, "\n{appliance}")?;
        }
        Ok(())
    }
}
