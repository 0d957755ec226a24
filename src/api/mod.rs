//! HTTP API module for the Student Payout Engine.
//!
//! This module provides the REST endpoints for calculating student payouts
//! from posted workplace and attendance tables.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
