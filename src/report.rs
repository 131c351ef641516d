//! Console rendering and CSV export of scenario evaluations.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::domain::{Co2Contribution, Scenario};

/// Column header for CSV report export.
const HEADER: &str = "appliance,usage_mode,co2";

/// Sum of all contribution values.
pub fn total(contributions: &[Co2Contribution]) -> f64 {
    contributions.iter().map(Co2Contribution::value).sum()
}

/// Prints one line per contribution followed by a total.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_report(
    mut out: impl Write,
    scenario: &Scenario,
    contributions: &[Co2Contribution],
) -> io::Result<()> {
    writeln!(out, "CO2 report for {}:", scenario.name())?;
    if contributions.is_empty() {
        writeln!(out, "No appliances in this scenario, nothing to report.")?;
        return Ok(());
    }
    for c in contributions {
        writeln!(out, "  {c}")?;
    }
    writeln!(out, "Total: {}", total(contributions))
}

/// Exports contributions to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(contributions: &[Co2Contribution], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(contributions, buf)
}

/// Writes contributions as CSV to any writer, one row per appliance.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(contributions: &[Co2Contribution], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;
    for c in contributions {
        wtr.write_record(&[
            c.appliance().name().to_string(),
            c.appliance().usage_mode().to_string(),
            c.value().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
