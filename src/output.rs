//! Rendering payout totals as text.

use crate::models::PayoutTotal;

/// Header line of the payout table.
pub const PAYOUT_HEADER: &str = "id,payout";

/// Renders totals as `id,payout` lines with two fractional digits.
///
/// Lines are separated by `\n`; there is no trailing newline.
///
/// # Example
///
/// ```
/// use student_payout::models::PayoutTotal;
/// use student_payout::output::render_csv;
/// use rust_decimal::Decimal;
///
/// let totals = vec![
///     PayoutTotal { student_id: 10, payout: Decimal::new(18602, 2) },
///     PayoutTotal { student_id: 20, payout: Decimal::ZERO },
/// ];
/// assert_eq!(render_csv(&totals), "id,payout\n10,186.02\n20,0.00");
/// ```
pub fn render_csv(totals: &[PayoutTotal]) -> String {
    let mut out = String::from(PAYOUT_HEADER);
    for total in totals {
        out.push('\n');
        out.push_str(&format!("{},{:.2}", total.student_id, total.payout));
    }
    out
}
