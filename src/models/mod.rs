//! Core data models for the Student Payout Engine.
//!
//! This module contains the input rows, the typed records parsed from them,
//! and the payout results.

mod attendance;
mod calculation_result;
mod de;
mod payout;
mod workplace;

pub use attendance::{AttendanceRecord, AttendanceRow, AttendanceStatus, parse_date_of_birth};
pub use calculation_result::CalculationResult;
pub use payout::{
    AllowanceBreakdown, AuditWarning, CalculationSummary, PayoutReport, PayoutTotal, RecordPayout,
};
pub use workplace::{WorkplaceRecord, WorkplaceRow};
