//! Calculation result model returned by the HTTP API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditWarning, CalculationSummary, PayoutReport, PayoutTotal, RecordPayout};

/// The complete result of a payout calculation, stamped for traceability.
///
/// # Example
///
/// ```
/// use student_payout::models::{CalculationResult, PayoutReport};
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
/// let result = CalculationResult::from_report(PayoutReport::default(), as_of);
/// assert!(result.payouts.is_empty());
/// assert_eq!(result.as_of, as_of);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The date ages were computed against.
    pub as_of: NaiveDate,
    /// Per-student totals, ascending by student id.
    pub payouts: Vec<PayoutTotal>,
    /// Per-record payouts in input order.
    pub records: Vec<RecordPayout>,
    /// Record counts.
    pub summary: CalculationSummary,
    /// Rows that were left out and why.
    pub warnings: Vec<AuditWarning>,
}

impl CalculationResult {
    /// Wraps a report with a fresh id, timestamp and engine version.
    pub fn from_report(report: PayoutReport, as_of: NaiveDate) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            as_of,
            payouts: report.totals,
            records: report.records,
            summary: report.summary,
            warnings: report.warnings,
        }
    }
}
