//! The `edit_scenario` prompt sequence.
//!
//! Each step reads and validates one piece of the new scenario and may abort
//! the whole edit with a [`CommandError`]. Nothing is written to the scenario
//! list until every step has succeeded.

use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use super::prompt::{Console, capitalize};
use crate::config::TimeWindowConfig;
use crate::domain::{Appliance, Household, Region, Scenario, TimeWindow};
use crate::error::CommandError;

/// Runs every step and builds the edited copy of `original`.
pub fn collect_edit<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    original: &Scenario,
    catalog: &[Rc<Appliance>],
    settings: &TimeWindowConfig,
    today: NaiveDate,
) -> Result<Scenario, CommandError> {
    let name = console.ask_or_default("New name", original.name(), "name")?;
    let time_window = ask_time_window(console, settings, today)?;
    let region = ask_region(console)?;
    let appliances = ask_appliances(console, catalog)?;
    debug!(%name, %region, appliances = appliances.len(), "edit collected");
    Ok(Scenario::new(
        name,
        Household::new(region, time_window, appliances),
    ))
}

/// Asks for start and end date and time, defaulting to `today` and the configured times.
pub fn ask_time_window<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &TimeWindowConfig,
    today: NaiveDate,
) -> Result<TimeWindow, CommandError> {
    let today = render_date(today, &settings.date_format)?;
    let start = ask_datetime(
        console,
        settings,
        ("start date", "start time"),
        &today,
        &settings.default_start_time,
    )?;
    let end = ask_datetime(
        console,
        settings,
        ("end date", "end time"),
        &today,
        &settings.default_end_time,
    )?;
    Ok(TimeWindow::new(start, end))
}

fn ask_datetime<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &TimeWindowConfig,
    (date_field, time_field): (&'static str, &'static str),
    default_date: &str,
    default_time: &str,
) -> Result<NaiveDateTime, CommandError> {
    let raw_date = console.ask_or_default(&capitalize(date_field), default_date, date_field)?;
    let date = NaiveDate::parse_from_str(&raw_date, &settings.date_format).map_err(|_| {
        CommandError::InvalidDate {
            field: date_field,
            input: raw_date.clone(),
            expected: settings.date_format.clone(),
        }
    })?;

    let raw_time = console.ask_or_default(&capitalize(time_field), default_time, time_field)?;
    let time = NaiveTime::parse_from_str(&raw_time, &settings.time_format).map_err(|_| {
        CommandError::InvalidDate {
            field: time_field,
            input: raw_time.clone(),
            expected: settings.time_format.clone(),
        }
    })?;

    Ok(date.and_time(time))
}

/// Shows the region menu. Blank or unrecognized input selects `NOT_SPECIFIED`.
pub fn ask_region<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Region, CommandError> {
    console.say("Regions:")?;
    for (i, region) in Region::ALL.iter().enumerate() {
        console.say(format!("  {}) {region}", i + 1))?;
    }
    let answer = console
        .ask(&format!("Select region [{}]: ", Region::NotSpecified))?
        .ok_or_else(|| CommandError::Aborted("no region given".to_string()))?;
    Ok(Region::from_menu_choice(&answer).unwrap_or_default())
}

/// Repeatedly asks for catalog indices until `done` or blank input.
///
/// Out-of-range or non-numeric input is reported and asked again.
pub fn ask_appliances<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &[Rc<Appliance>],
) -> Result<Vec<Rc<Appliance>>, CommandError> {
    if catalog.is_empty() {
        console.say("No appliances available to add.")?;
        return Ok(Vec::new());
    }

    console.say("Appliances:")?;
    for (i, appliance) in catalog.iter().enumerate() {
        console.say(format!("  {}. {appliance}", i + 1))?;
    }

    let mut selected = Vec::new();
    loop {
        let Some(answer) = console.ask("Pick appliance index or type done: ")? else {
            break;
        };
        if answer.is_empty() || answer.eq_ignore_ascii_case("done") {
            break;
        }
        match pick(catalog, &answer) {
            Ok(appliance) => {
                console.say(format!("Added {}.", appliance.name()))?;
                selected.push(appliance);
            }
            Err(err) => {
                console.say(format!("{err}, enter 1-{} or done.", catalog.len()))?;
            }
        }
    }
    Ok(selected)
}

fn pick(catalog: &[Rc<Appliance>], answer: &str) -> Result<Rc<Appliance>, CommandError> {
    answer
        .parse::<usize>()
        .ok()
        .and_then(|idx| idx.checked_sub(1))
        .and_then(|idx| catalog.get(idx))
        .map(Rc::clone)
        .ok_or_else(|| CommandError::InvalidSelection(answer.to_string()))
}

fn render_date(date: NaiveDate, pattern: &str) -> Result<String, CommandError> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).map_err(|_| {
        CommandError::Aborted(format!("date format \"{pattern}\" cannot be rendered"))
    })?;
    Ok(out)
}
