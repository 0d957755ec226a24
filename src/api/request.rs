//! Request types for the Student Payout Engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRow, WorkplaceRow};

/// Request body for the `/calculate` endpoint.
///
/// Cells may be sent as strings or numbers and may be omitted; rows missing
/// a required cell are reported as warnings in the response rather than
/// rejecting the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The workplace directory.
    pub workplaces: Vec<WorkplaceRow>,
    /// The attendance log.
    pub attendances: Vec<AttendanceRow>,
    /// The date ages are computed against; today when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_request() {
        let json = r#"{
            "workplaces": [{"id": 1, "location": "(0,0)"}],
            "attendances": [
                {"id": "10", "dob": "2000-01-01", "status": "AL", "location": "(0,8)", "workplace_id": 1}
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.workplaces[0], WorkplaceRow::new("1", "(0,0)"));
        assert_eq!(
            request.attendances[0],
            AttendanceRow::new("10", "2000-01-01", "AL", "(0,8)", "1")
        );
        assert!(request.as_of.is_none());
    }

    #[test]
    fn test_deserialize_as_of() {
        let json = r#"{"workplaces": [], "attendances": [], "as_of": "2026-01-31"}"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.as_of, NaiveDate::from_ymd_opt(2026, 1, 31));
    }

    #[test]
    fn test_missing_attendances_is_an_error() {
        let result: Result<CalculationRequest, _> = serde_json::from_str(r#"{"workplaces": []}"#);
        assert!(result.is_err());
    }
}
