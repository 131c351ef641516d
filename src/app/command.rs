/// A command recognized by the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListAppliances,
    ListScenarios,
    CreateScenario,
    EditScenario,
    DeleteScenario,
    ShowScenarioReport,
    ExportScenarioReport,
    Help,
    Exit,
    /// Anything else; the loop reprints the command list.
    Unknown(String),
}

/// Command names with a one-line description, in menu order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("list_appliances", "show the appliance catalog"),
    ("list_scenarios", "show all scenarios"),
    ("create_scenario", "add an empty scenario"),
    ("edit_scenario", "copy a scenario with new settings"),
    ("delete_scenario", "remove scenarios by name"),
    ("show_scenario_report", "print the CO2 report of a scenario"),
    ("export_scenario_report", "write the CO2 report of a scenario to CSV"),
    ("help", "show this list"),
    ("exit", "quit"),
];

impl Command {
    /// Parses trimmed, lower-cased input. Returns `None` for blank input.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase();
        let command = match normalized.as_str() {
            "" => return None,
            "list_appliances" => Self::ListAppliances,
            "list_scenarios" => Self::ListScenarios,
            "create_scenario" => Self::CreateScenario,
            "edit_scenario" => Self::EditScenario,
            "delete_scenario" => Self::DeleteScenario,
            "show_scenario_report" => Self::ShowScenarioReport,
            "export_scenario_report" => Self::ExportScenarioReport,
            "help" => Self::Help,
            "exit" => Self::Exit,
            _ => Self::Unknown(normalized),
        };
        Some(command)
    }
}
