//! Payout result models.
//!
//! This module contains the per-record allowance breakdown, the per-student
//! totals, and the [`PayoutReport`] that ties them together with warnings
//! about rows that were left out.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AttendanceStatus;

/// The three allowance components paid for one attendance record.
///
/// # Example
///
/// ```
/// use student_payout::models::AllowanceBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = AllowanceBreakdown {
///     basic: Decimal::new(8590, 2),
///     meal: Decimal::new(550, 2),
///     travel: Decimal::new(872, 2),
/// };
/// assert_eq!(breakdown.total(), Some(Decimal::new(10012, 2)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceBreakdown {
    /// Age-tiered basic allowance.
    pub basic: Decimal,
    /// Flat meal allowance.
    pub meal: Decimal,
    /// Distance-based travel allowance.
    pub travel: Decimal,
}

impl AllowanceBreakdown {
    /// Returns the unrounded sum of all components, or `None` on overflow.
    pub fn total(&self) -> Option<Decimal> {
        self.basic
            .checked_add(self.meal)
            .and_then(|sum| sum.checked_add(self.travel))
    }
}

/// The payout computed for a single qualifying attendance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPayout {
    /// 1-based position of the record in the attendance log.
    pub line: usize,
    /// The student the record belongs to.
    pub student_id: i64,
    /// The student's age in whole years on the calculation date.
    pub age: u32,
    /// The attendance status.
    pub status: AttendanceStatus,
    /// The resolved workplace location (empty when unknown).
    pub workplace_location: String,
    /// The allowance components.
    pub allowances: AllowanceBreakdown,
    /// The amount added to the student's total.
    pub increment: Decimal,
}

/// The accumulated payout for one student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutTotal {
    /// The student identifier.
    #[serde(rename = "id")]
    pub student_id: i64,
    /// The total payout, rounded to cents.
    pub payout: Decimal,
}

/// A warning about an attendance row that did not contribute to any total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// 1-based position of the offending row in the attendance log.
    pub line: usize,
}

/// Record counts for a calculation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationSummary {
    /// Number of attendance rows that contributed to a total.
    pub records_processed: usize,
    /// Number of attendance rows that were left out.
    pub records_skipped: usize,
    /// Number of distinct students in the output.
    pub students: usize,
}

/// Everything produced by one payout calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutReport {
    /// Per-student totals, ascending by student id.
    pub totals: Vec<PayoutTotal>,
    /// Per-record payouts in input order.
    pub records: Vec<RecordPayout>,
    /// Rows that were left out and why.
    pub warnings: Vec<AuditWarning>,
    /// Record counts.
    pub summary: CalculationSummary,
}

impl PayoutReport {
    /// Returns the total for a student, if the student qualified.
    pub fn total_for(&self, student_id: i64) -> Option<Decimal> {
        self.totals
            .binary_search_by_key(&student_id, |t| t.student_id)
            .ok()
            .map(|idx| self.totals[idx].payout)
    }
}
