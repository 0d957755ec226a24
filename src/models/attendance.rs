//! Attendance log rows and the typed records derived from them.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

use super::de::optional_cell;

/// Date-only layouts accepted for a date of birth, tried in order.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y"];

/// Date-time layouts accepted for a date of birth; the time is discarded.
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// The attendance status of a day.
///
/// Unknown codes are treated as a day worked in person and keep their
/// original text.
///
/// # Example
///
/// ```
/// use student_payout::models::AttendanceStatus;
///
/// assert_eq!(AttendanceStatus::from("CSL"), AttendanceStatus::CompensatedSickLeave);
/// assert_eq!(AttendanceStatus::from("WORKED").as_code(), "WORKED");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttendanceStatus {
    /// `AL`: approved leave.
    ApprovedLeave,
    /// `CSL`: compensated sick leave.
    CompensatedSickLeave,
    /// `USL`: unapproved sick leave.
    UnapprovedSickLeave,
    /// Any other code: a day worked in person.
    Worked(String),
}

impl AttendanceStatus {
    /// Returns the code as it appears in the attendance log.
    pub fn as_code(&self) -> &str {
        match self {
            AttendanceStatus::ApprovedLeave => "AL",
            AttendanceStatus::CompensatedSickLeave => "CSL",
            AttendanceStatus::UnapprovedSickLeave => "USL",
            AttendanceStatus::Worked(code) => code,
        }
    }

    /// Returns true for paid leave (`AL`, `CSL`).
    pub fn is_paid_leave(&self) -> bool {
        matches!(
            self,
            AttendanceStatus::ApprovedLeave | AttendanceStatus::CompensatedSickLeave
        )
    }
}

impl From<&str> for AttendanceStatus {
    fn from(code: &str) -> Self {
        match code {
            "AL" => AttendanceStatus::ApprovedLeave,
            "CSL" => AttendanceStatus::CompensatedSickLeave,
            "USL" => AttendanceStatus::UnapprovedSickLeave,
            other => AttendanceStatus::Worked(other.to_string()),
        }
    }
}

impl From<String> for AttendanceStatus {
    fn from(code: String) -> Self {
        AttendanceStatus::from(code.as_str())
    }
}

impl From<AttendanceStatus> for String {
    fn from(status: AttendanceStatus) -> Self {
        status.as_code().to_string()
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// An attendance row as read from the log, before any type checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRow {
    /// The student identifier.
    #[serde(default, deserialize_with = "optional_cell")]
    pub id: Option<String>,
    /// The student's date of birth.
    #[serde(default, deserialize_with = "optional_cell")]
    pub dob: Option<String>,
    /// The attendance status code.
    #[serde(default, deserialize_with = "optional_cell")]
    pub status: Option<String>,
    /// The student's coordinate for the day.
    #[serde(default, deserialize_with = "optional_cell")]
    pub location: Option<String>,
    /// The workplace the student attended.
    #[serde(default, deserialize_with = "optional_cell")]
    pub workplace_id: Option<String>,
}

/// A fully typed attendance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The student identifier.
    pub student_id: i64,
    /// The student's date of birth.
    pub date_of_birth: NaiveDate,
    /// The attendance status.
    pub status: AttendanceStatus,
    /// The student's coordinate string (may be empty).
    pub location: String,
    /// The workplace identifier.
    pub workplace_id: i64,
}

impl AttendanceRow {
    /// Creates a row with every cell present.
    pub fn new(
        id: impl Into<String>,
        dob: impl Into<String>,
        status: impl Into<String>,
        location: impl Into<String>,
        workplace_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            dob: Some(dob.into()),
            status: Some(status.into()),
            location: Some(location.into()),
            workplace_id: Some(workplace_id.into()),
        }
    }

    /// Converts the row into a typed record.
    ///
    /// Presence of all five cells is checked first, so a row missing a cell is
    /// always reported as [`RecordError::MissingField`] even if another cell
    /// is also malformed. An empty location is allowed.
    pub fn parse(&self) -> Result<AttendanceRecord, RecordError> {
        let id = required(&self.id, "id")?;
        let dob = required(&self.dob, "dob")?;
        let status = required(&self.status, "status")?;
        let location = required(&self.location, "location")?;
        let workplace_id = required(&self.workplace_id, "workplace_id")?;

        Ok(AttendanceRecord {
            student_id: parse_integer(id, "id")?,
            date_of_birth: parse_date_of_birth(dob).ok_or_else(|| {
                RecordError::InvalidDateOfBirth {
                    value: dob.to_string(),
                }
            })?,
            status: AttendanceStatus::from(status.trim()),
            location: location.to_string(),
            workplace_id: parse_integer(workplace_id, "workplace_id")?,
        })
    }
}

fn required<'a>(cell: &'a Option<String>, field: &'static str) -> Result<&'a str, RecordError> {
    cell.as_deref().ok_or(RecordError::MissingField { field })
}

fn parse_integer(value: &str, field: &'static str) -> Result<i64, RecordError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| RecordError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}

/// Parses a date of birth in any of the accepted layouts.
///
/// # Example
///
/// ```
/// use student_payout::models::parse_date_of_birth;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2001, 3, 9);
/// assert_eq!(parse_date_of_birth("2001-03-09"), expected);
/// assert_eq!(parse_date_of_birth("03/09/2001"), expected);
/// assert_eq!(parse_date_of_birth("09.03.2001"), expected);
/// assert_eq!(parse_date_of_birth("not a date"), None);
/// ```
pub fn parse_date_of_birth(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
