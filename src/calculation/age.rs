//! Age derivation from a date of birth.

use chrono::NaiveDate;

/// Returns the number of full years between `date_of_birth` and `as_of`.
///
/// A date of birth after `as_of` yields the full years in the other
/// direction rather than failing.
///
/// # Examples
///
/// ```
/// use student_payout::calculation::age_on;
/// use chrono::NaiveDate;
///
/// let dob = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
/// assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()), 24);
/// assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()), 25);
/// ```
pub fn age_on(date_of_birth: NaiveDate, as_of: NaiveDate) -> u32 {
    as_of
        .years_since(date_of_birth)
        .or_else(|| date_of_birth.years_since(as_of))
        .unwrap_or(0)
}
