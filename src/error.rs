//! Error types for the Student Payout Engine.
//!
//! Two families of errors exist. [`EngineError`] covers structural failures
//! that abort a whole run (unreadable input, broken configuration).
//! [`RecordError`] describes why a single row was left out of the payout; it
//! never aborts a run.

use thiserror::Error;

/// The main error type for the Student Payout Engine.
///
/// # Example
///
/// ```
/// use student_payout::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// The rate table violates its ordering or sign constraints.
    #[error("Invalid rate table: {message}")]
    InvalidRateTable {
        /// What is wrong with the table.
        message: String,
    },

    /// An input file could not be opened.
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// The path that could not be opened.
        path: String,
    },

    /// An input file could not be read as delimited text.
    #[error("Failed to read input '{source_name}': {message}")]
    InputParseError {
        /// The file path or stream label.
        source_name: String,
        /// A description of the read error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// The reason an individual row did not qualify for the payout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required column was absent from the row.
    #[error("missing field '{field}'")]
    MissingField {
        /// The column name.
        field: &'static str,
    },

    /// An identifier column did not hold an integer.
    #[error("field '{field}' is not an integer: '{value}'")]
    InvalidInteger {
        /// The column name.
        field: &'static str,
        /// The raw value.
        value: String,
    },

    /// The date of birth could not be understood.
    #[error("unrecognised date of birth: '{value}'")]
    InvalidDateOfBirth {
        /// The raw value.
        value: String,
    },

    /// The record's payout does not fit the decimal range, alone or added to
    /// the student's running total.
    #[error("payout for student {student_id} overflows")]
    AmountOverflow {
        /// The student the record belongs to.
        student_id: i64,
    },
}

impl RecordError {
    /// A short machine-readable code for warnings and API responses.
    pub fn code(&self) -> &'static str {
        match self {
            RecordError::MissingField { .. } => "MISSING_FIELD",
            RecordError::InvalidInteger { .. } => "INVALID_INTEGER",
            RecordError::InvalidDateOfBirth { .. } => "INVALID_DOB",
            RecordError::AmountOverflow { .. } => "AMOUNT_OVERFLOW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rates.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rates.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_input_parse_error_displays_source() {
        let error = EngineError::InputParseError {
            source_name: "attendance.csv".to_string(),
            message: "invalid UTF-8".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read input 'attendance.csv': invalid UTF-8"
        );
    }

    #[test]
    fn test_record_error_messages() {
        assert_eq!(
            RecordError::MissingField { field: "dob" }.to_string(),
            "missing field 'dob'"
        );
        assert_eq!(
            RecordError::InvalidInteger {
                field: "workplace_id",
                value: "abc".to_string()
            }
            .to_string(),
            "field 'workplace_id' is not an integer: 'abc'"
        );
        assert_eq!(
            RecordError::InvalidDateOfBirth {
                value: "yesterday-ish".to_string()
            }
            .to_string(),
            "unrecognised date of birth: 'yesterday-ish'"
        );
    }

    #[test]
    fn test_record_error_codes() {
        assert_eq!(RecordError::MissingField { field: "id" }.code(), "MISSING_FIELD");
        assert_eq!(
            RecordError::InvalidDateOfBirth {
                value: String::new()
            }
            .code(),
            "INVALID_DOB"
        );
        assert_eq!(
            RecordError::AmountOverflow { student_id: 7 }.code(),
            "AMOUNT_OVERFLOW"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
        assert_error::<RecordError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_input_not_found() -> EngineResult<()> {
            Err(EngineError::InputNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_input_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
