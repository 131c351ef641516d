//! Tagged success/failure wrapper for fallible operations.
//!
//! [`capture`] runs an operation and always hands back exactly one of
//! [`Outcome::Data`] or [`Outcome::Error`]. Panics raised inside the
//! operation are caught and carried as the error value, so call sites can
//! branch on the outcome without unwinding.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use anyhow::anyhow;

/// Result of a captured operation: either its data or the error it produced.
#[derive(Debug)]
pub enum Outcome<T> {
    Data(T),
    Error(anyhow::Error),
}

impl<T> Outcome<T> {
    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&anyhow::Error> {
        match self {
            Self::Data(_) => None,
            Self::Error(err) => Some(err),
        }
    }

    /// Converts back into a `Result` for `?` propagation.
    pub fn into_result(self) -> anyhow::Result<T> {
        match self {
            Self::Data(data) => Ok(data),
            Self::Error(err) => Err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<anyhow::Error>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Data(data),
            Err(err) => Self::Error(err.into()),
        }
    }
}

/// Runs `op` and captures its result, including a panic, as an [`Outcome`].
pub fn capture<T, E, F>(op: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<anyhow::Error>,
{
    match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(result) => result.into(),
        Err(payload) => Outcome::Error(anyhow!(
            "operation panicked: {}",
            panic_message(payload.as_ref())
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic payload"
    }
}
