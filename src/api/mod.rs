//! HTTP API module for the babysitter pay engine.
//!
//! This module provides the REST endpoints for calculating a night's pay and
//! listing the configured families.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, CalculationResponse, FamilySummary, TierSummary};
pub use state::AppState;
