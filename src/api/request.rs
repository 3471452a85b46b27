//! Request types for the babysitter pay API.

use serde::{Deserialize, Serialize};

/// Request body for the `/calculate` endpoint.
///
/// Times are passed through untouched; all parsing and validation happens in
/// the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Shift start, e.g. `"5:00 PM"`.
    pub start_time: String,
    /// Shift end, e.g. `"1:00 AM"`.
    pub end_time: String,
    /// Family identifier, e.g. `"A"`.
    pub family: String,
}
