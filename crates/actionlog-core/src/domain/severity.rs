//! Log severity levels.
//!
//! Severity is ordered (`Trace` lowest, `Critical` highest) so threshold
//! checks work with the standard comparison operators. Severity itself is
//! not part of the wire format; [`Severity::command_name`] maps it onto the
//! three annotation commands the runner understands.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a severity name fails to parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown severity level: {0}")]
pub struct ParseSeverityError(pub String);

/// Ordered log severity scale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Detailed trace information.
    Trace,
    /// Debug information useful during development.
    Debug,
    /// General informational messages.
    Info,
    /// Normal but significant conditions.
    Notice,
    /// Warnings indicating potential issues.
    Warning,
    /// Errors signalling failures that require attention.
    Error,
    /// Failures severe enough to abort the surrounding work.
    Critical,
}

impl Severity {
    /// Convert the severity to its lowercase string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    /// Map the severity onto the annotation command name the runner accepts.
    ///
    /// The runner surfaces only `error`, `warning`, and `debug` annotations,
    /// so `Error` and above map to `error`, `Warning` to `warning`, and
    /// everything below to `debug` (shown only when the user enables step
    /// debug logging on the runner side).
    #[must_use]
    pub const fn command_name(&self) -> &'static str {
        match self {
            Self::Error | Self::Critical => "error",
            Self::Warning => "warning",
            Self::Trace | Self::Debug | Self::Info | Self::Notice => "debug",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "notice" => Ok(Self::Notice),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            other => Err(ParseSeverityError(other.to_string())),
        }
    }
}
