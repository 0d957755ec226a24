//! Allowance calculation for a single attendance record.
//!
//! The status decides which components are paid:
//!
//! | Status        | Basic | Meal | Travel |
//! |---------------|-------|------|--------|
//! | `AL`, `CSL`   | yes   | no   | no     |
//! | `USL`         | no    | no   | no     |
//! | anything else | yes   | yes  | yes    |

use rust_decimal::Decimal;

use super::distance::distance;
use crate::config::RateTable;
use crate::models::{AllowanceBreakdown, AttendanceStatus};

/// Shortest commute, in kilometres, that attracts a travel allowance.
pub const MIN_TRAVEL_DISTANCE_KM: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Computes allowance components against a fixed rate table.
#[derive(Debug, Clone, Copy)]
pub struct AllowanceEngine<'a> {
    rates: &'a RateTable,
}

impl<'a> AllowanceEngine<'a> {
    /// Creates an engine over the given schedule.
    pub fn new(rates: &'a RateTable) -> Self {
        Self { rates }
    }

    /// Computes the basic, meal and travel allowances for one day.
    ///
    /// # Examples
    ///
    /// ```
    /// use student_payout::calculation::AllowanceEngine;
    /// use student_payout::config::RateTable;
    /// use student_payout::models::AttendanceStatus;
    /// use rust_decimal::Decimal;
    ///
    /// let rates = RateTable::default();
    /// let engine = AllowanceEngine::new(&rates);
    ///
    /// let worked = engine.compute_allowances(25, &AttendanceStatus::from("P"), "(0,8)", "(0,0)");
    /// assert_eq!(worked.basic, Decimal::new(8590, 2));
    /// assert_eq!(worked.meal, Decimal::new(550, 2));
    /// assert_eq!(worked.travel, Decimal::new(872, 2));
    ///
    /// let leave = engine.compute_allowances(25, &AttendanceStatus::ApprovedLeave, "(0,8)", "(0,0)");
    /// assert_eq!(leave.total(), Some(Decimal::new(8590, 2)));
    /// ```
    pub fn compute_allowances(
        &self,
        age: u32,
        status: &AttendanceStatus,
        student_location: &str,
        workplace_location: &str,
    ) -> AllowanceBreakdown {
        match status {
            AttendanceStatus::UnapprovedSickLeave => AllowanceBreakdown::default(),
            status if status.is_paid_leave() => AllowanceBreakdown {
                basic: self.rates.basic_allowance(age),
                ..AllowanceBreakdown::default()
            },
            _ => AllowanceBreakdown {
                basic: self.rates.basic_allowance(age),
                meal: self.rates.meal_allowance(),
                travel: self.compute_travel(student_location, workplace_location),
            },
        }
    }

    /// Computes the travel allowance between two coordinate strings.
    ///
    /// Zero when either location is empty or unparsable, when the commute
    /// is shorter than [`MIN_TRAVEL_DISTANCE_KM`], or when the amount would
    /// not fit a [`Decimal`].
    pub fn compute_travel(&self, point_a: &str, point_b: &str) -> Decimal {
        if point_a.is_empty() || point_b.is_empty() {
            return Decimal::ZERO;
        }

        match distance(point_a, point_b) {
            Some(km) if km >= MIN_TRAVEL_DISTANCE_KM => km
                .checked_mul(self.rates.travel_rate_per_km())
                .unwrap_or(Decimal::ZERO),
            _ => Decimal::ZERO,
        }
    }
}
