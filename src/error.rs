//! Error taxonomy for catalog loading and interactive commands.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A single schema rule broken by a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSON path of the offending value (e.g. `"$[2].usageMode"`).
    pub path: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl SchemaViolation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at `{}`: {}", self.path, self.message)
    }
}

/// Failure to turn a catalog file into appliances. All variants are fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read appliance catalog \"{}\"", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("appliance catalog \"{}\" is not valid JSON", .path.display())]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("appliance catalog failed schema validation:\n{}", list_violations(.violations))]
    SchemaValidation { violations: Vec<SchemaViolation> },
}

fn list_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("  {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Failure inside a single command handler.
///
/// Everything except [`CommandError::Io`] is reported to the console and the
/// loop keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A required interactive field was left empty or input ended early.
    #[error("cancelled: {0}")]
    Aborted(String),
    #[error("scenario \"{0}\" not found")]
    NotFound(String),
    #[error("invalid selection \"{0}\"")]
    InvalidSelection(String),
    #[error("invalid {field} \"{input}\" (expected format {expected})")]
    InvalidDate {
        field: &'static str,
        input: String,
        expected: String,
    },
    #[error("cannot write report to \"{}\": {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CommandError {
    /// Returns `true` when the loop should stop instead of reporting and continuing.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"scenario.name_prefix"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}
