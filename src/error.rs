//! Error types for the babysitter pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop a pay calculation or a configuration load.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which end of a shift a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// The shift start time.
    Start,
    /// The shift end time.
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "Start"),
            Endpoint::End => write!(f, "End"),
        }
    }
}

/// The main error type for the babysitter pay engine.
///
/// The first five variants are the calculation failures surfaced to callers;
/// the remaining ones can only occur while loading family schedules.
///
/// # Example
///
/// ```
/// use babysitter_pay::error::{EngineError, Endpoint};
///
/// let error = EngineError::OutOfWindow { endpoint: Endpoint::End };
/// assert_eq!(error.to_string(), "End time must be between 5:00 PM and 4:00 AM");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A time string could not be interpreted as a clock time.
    #[error("Invalid time '{input}': {message}")]
    ParseError {
        /// The raw text that failed to parse.
        input: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// A shift endpoint falls outside the 5:00 PM to 4:00 AM window.
    #[error("{endpoint} time must be between 5:00 PM and 4:00 AM")]
    OutOfWindow {
        /// The endpoint that was out of range.
        endpoint: Endpoint,
    },

    /// The normalized end time precedes the start time.
    #[error("End time must be after start time")]
    Ordering,

    /// The shift does not contain a single full hour.
    #[error("Must work at least 1 full hour")]
    MinimumDuration,

    /// No schedule is configured for the requested family.
    #[error("Invalid family selection: '{family}'")]
    UnknownFamily {
        /// The family identifier that was requested.
        family: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A family schedule violates the tier invariants.
    #[error("Invalid schedule for family '{family}': {message}")]
    InvalidSchedule {
        /// The family whose schedule is invalid.
        family: String,
        /// A description of the violated invariant.
        message: String,
    },
}

impl EngineError {
    /// Returns true for errors caused by the calculation inputs rather than
    /// the loaded configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EngineError::ParseError { .. }
                | EngineError::OutOfWindow { .. }
                | EngineError::Ordering
                | EngineError::MinimumDuration
                | EngineError::UnknownFamily { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
