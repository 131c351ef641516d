//! Application controller: owns the catalog and scenario list and runs the command loop.

/// Command names and input normalization.
pub mod command;
/// The `edit_scenario` prompt sequence.
pub mod edit;
/// Console I/O helpers.
pub mod prompt;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use chrono::Local;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::domain::scenario::without_scenario;
use crate::domain::{Appliance, Household, Scenario, TimeWindow};
use crate::error::CommandError;
use crate::report;

pub use command::{COMMANDS, Command};
pub use prompt::Console;
use prompt::capitalize;

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Controller state. The catalog is fixed; the scenario list changes with commands.
pub struct App<R, W> {
    catalog: Vec<Rc<Appliance>>,
    scenarios: Vec<Scenario>,
    config: AppConfig,
    console: Console<R, W>,
    rng: StdRng,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(
        catalog: Vec<Rc<Appliance>>,
        config: AppConfig,
        console: Console<R, W>,
        rng: StdRng,
    ) -> Self {
        Self {
            catalog,
            scenarios: Vec::new(),
            config,
            console,
            rng,
        }
    }

    pub fn catalog(&self) -> &[Rc<Appliance>] {
        &self.catalog
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// First scenario named exactly `name`.
    pub fn find_scenario(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.name() == name)
    }

    /// Runs the loop until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` only when the console itself fails.
    pub fn run(&mut self) -> io::Result<()> {
        self.console
            .say("Household CO2 scenarios. Type a command, or help for the list.")?;
        self.print_commands()?;

        loop {
            let Some(line) = self.console.ask("> ")? else {
                self.console.say("Goodbye!")?;
                return Ok(());
            };
            let Some(command) = Command::parse(&line) else {
                continue;
            };
            if self.execute(command)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Runs one command, reporting any non-fatal error to the console.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` only when the console itself fails.
    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        debug!(?command, "dispatching");
        let result = match command {
            Command::ListAppliances => self.list_appliances(),
            Command::ListScenarios => self.list_scenarios(),
            Command::CreateScenario => self.create_scenario(),
            Command::EditScenario => self.edit_scenario(),
            Command::DeleteScenario => self.delete_scenario(),
            Command::ShowScenarioReport => self.show_scenario_report(),
            Command::ExportScenarioReport => self.export_scenario_report(),
            Command::Help => self.print_commands().map_err(CommandError::from),
            Command::Exit => {
                self.console.say("Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Unknown(input) => {
                warn!(%input, "unrecognized command");
                self.console.say(format!("Unknown command \"{input}\"."))?;
                self.print_commands().map_err(CommandError::from)
            }
        };

        match result {
            Ok(()) => Ok(Flow::Continue),
            Err(CommandError::Io(err)) => Err(err),
            Err(err) => {
                info!(error = %err, "command failed");
                self.console.say(capitalize(&err.to_string()))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn print_commands(&mut self) -> io::Result<()> {
        self.console.say("Commands:")?;
        for (name, description) in COMMANDS {
            self.console.say(format!("  {name:<24} {description}"))?;
        }
        Ok(())
    }

    /// Prints the catalog with 1-based indices.
    pub fn list_appliances(&mut self) -> Result<(), CommandError> {
        if self.catalog.is_empty() {
            self.console.say("No appliances found.")?;
            return Ok(());
        }
        for (i, appliance) in self.catalog.iter().enumerate() {
            self.console.say(format!("{}. {appliance}", i + 1))?;
        }
        Ok(())
    }

    /// Prints every scenario with 1-based indices.
    pub fn list_scenarios(&mut self) -> Result<(), CommandError> {
        if self.scenarios.is_empty() {
            self.console.say("No scenarios found.")?;
            return Ok(());
        }
        for (i, scenario) in self.scenarios.iter().enumerate() {
            self.console.say(format!("{}. {scenario}", i + 1))?;
        }
        Ok(())
    }

    /// Appends `<prefix>-<count + 1>` with an empty placeholder household.
    pub fn create_scenario(&mut self) -> Result<(), CommandError> {
        let defaults = &self.config.scenario;
        let name = format!("{}-{}", defaults.name_prefix, self.scenarios.len() + 1);
        let household = Household::new(defaults.placeholder_region, TimeWindow::now(), Vec::new());
        self.scenarios.push(Scenario::new(name.clone(), household));
        info!(%name, "scenario created");
        self.console.say(format!("Created scenario {name}."))?;
        Ok(())
    }

    /// Collects edits for a named scenario and appends them as a new scenario.
    ///
    /// The original is left untouched. Any aborted step leaves the list unchanged.
    pub fn edit_scenario(&mut self) -> Result<(), CommandError> {
        let name = self
            .console
            .ask_required("Scenario name to edit: ", "scenario name")?;
        let original = self
            .find_scenario(&name)
            .cloned()
            .ok_or_else(|| CommandError::NotFound(name.clone()))?;

        let today = Local::now().date_naive();
        let edited = edit::collect_edit(
            &mut self.console,
            &original,
            &self.catalog,
            &self.config.time_window,
            today,
        )?;

        let new_name = edited.name().to_string();
        self.scenarios.push(edited);
        info!(original = %name, edited = %new_name, "scenario edited");
        self.console.say(format!("Saved scenario {new_name}."))?;
        Ok(())
    }

    /// Removes every scenario named exactly as entered.
    pub fn delete_scenario(&mut self) -> Result<(), CommandError> {
        let name = self
            .console
            .ask_required("Scenario name to delete: ", "scenario name")?;

        let before = self.scenarios.len();
        self.scenarios = without_scenario(std::mem::take(&mut self.scenarios), &name);
        let removed = before - self.scenarios.len();
        if removed == 0 {
            return Err(CommandError::NotFound(name));
        }

        info!(%name, removed, "scenario deleted");
        self.console.say(format!("Deleted scenario {name}."))?;
        Ok(())
    }

    /// Evaluates a named scenario and prints its contributions.
    pub fn show_scenario_report(&mut self) -> Result<(), CommandError> {
        let name = self
            .console
            .ask_required("Scenario name to report: ", "scenario name")?;
        let scenario = self
            .find_scenario(&name)
            .cloned()
            .ok_or(CommandError::NotFound(name))?;

        let contributions = scenario.evaluate(&mut self.rng);
        let mut out = Vec::new();
        report::write_report(&mut out, &scenario, &contributions)?;
        self.console.say(String::from_utf8_lossy(&out).trim_end())?;
        Ok(())
    }

    /// Evaluates a named scenario and writes the contributions to a CSV file.
    pub fn export_scenario_report(&mut self) -> Result<(), CommandError> {
        let name = self
            .console
            .ask_required("Scenario name to export: ", "scenario name")?;
        let scenario = self
            .find_scenario(&name)
            .cloned()
            .ok_or(CommandError::NotFound(name))?;
        let path = PathBuf::from(self.console.ask_required("Output CSV path: ", "output path")?);

        let contributions = scenario.evaluate(&mut self.rng);
        report::export_csv(&contributions, &path).map_err(|source| CommandError::Export {
            path: path.clone(),
            source,
        })?;

        info!(scenario = %scenario.name(), path = %path.display(), "report exported");
        self.console.say(format!(
            "Wrote {} contributions to {}.",
            contributions.len(),
            path.display()
        ))?;
        Ok(())
    }
}
