//! HTTP request handlers for the Student Payout Engine API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::PayoutAggregator;
use crate::models::CalculationResult;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// - `POST /calculate` computes payouts for the posted tables.
/// - `GET /rates` returns the active schedule and rounding policy.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::missing_content_type(),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let as_of = request.as_of.unwrap_or_else(|| Local::now().date_naive());
    let report = PayoutAggregator::from_config(state.config()).calculate_as_of(
        &request.workplaces,
        &request.attendances,
        as_of,
    );
    let result = CalculationResult::from_report(report, as_of);

    info!(
        correlation_id = %correlation_id,
        calculation_id = %result.calculation_id,
        students = result.summary.students,
        records_skipped = result.summary.records_skipped,
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for GET /rates endpoint.
async fn rates_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.config().config().clone())
}
