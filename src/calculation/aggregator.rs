//! Per-student payout aggregation.
//!
//! This module drives a calculation run: it indexes the workplace directory,
//! walks the attendance log in order, prices each qualifying record with the
//! [`AllowanceEngine`] and folds the results into per-student totals.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info};

use super::age::age_on;
use super::allowances::AllowanceEngine;
use super::workplace_index::WorkplaceIndex;
use crate::config::{ConfigLoader, RateTable, RoundingPolicy};
use crate::error::RecordError;
use crate::models::{
    AllowanceBreakdown, AttendanceRow, AuditWarning, CalculationSummary, PayoutReport,
    PayoutTotal, RecordPayout, WorkplaceRow,
};

/// Rounds a currency amount to cents, half away from zero, always keeping two
/// fractional digits.
///
/// # Examples
///
/// ```
/// use student_payout::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(10045, 3)).to_string(), "10.05");
/// assert_eq!(round_currency(Decimal::ZERO).to_string(), "0.00");
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Computes payout totals from a workplace directory and an attendance log.
///
/// # Example
///
/// ```
/// use student_payout::calculation::PayoutAggregator;
/// use student_payout::config::{RateTable, RoundingPolicy};
/// use student_payout::models::{AttendanceRow, WorkplaceRow};
/// use chrono::NaiveDate;
///
/// let rates = RateTable::default();
/// let aggregator = PayoutAggregator::new(&rates, RoundingPolicy::PerRecord);
///
/// let workplaces = vec![WorkplaceRow::new("1", "(0,0)")];
/// let attendances = vec![AttendanceRow::new("10", "2000-01-01", "WORKED", "(0,8)", "1")];
/// let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
///
/// let report = aggregator.calculate_as_of(&workplaces, &attendances, as_of);
/// assert_eq!(report.totals[0].payout.to_string(), "100.12");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PayoutAggregator<'a> {
    engine: AllowanceEngine<'a>,
    rounding: RoundingPolicy,
}

impl<'a> PayoutAggregator<'a> {
    /// Creates an aggregator over a rate table with the given rounding policy.
    pub fn new(rates: &'a RateTable, rounding: RoundingPolicy) -> Self {
        Self {
            engine: AllowanceEngine::new(rates),
            rounding,
        }
    }

    /// Creates an aggregator from a loaded configuration.
    pub fn from_config(config: &'a ConfigLoader) -> Self {
        Self::new(config.rates(), config.rounding())
    }

    /// Calculates payouts with ages taken as of today's local date.
    pub fn calculate(
        &self,
        workplaces: &[WorkplaceRow],
        attendances: &[AttendanceRow],
    ) -> PayoutReport {
        self.calculate_as_of(workplaces, attendances, Local::now().date_naive())
    }

    /// Calculates payouts with ages taken as of `as_of`.
    ///
    /// Rows that fail to parse are left out and reported as warnings; they
    /// never abort the run.
    pub fn calculate_as_of(
        &self,
        workplaces: &[WorkplaceRow],
        attendances: &[AttendanceRow],
        as_of: NaiveDate,
    ) -> PayoutReport {
        let start_time = Instant::now();
        let index = WorkplaceIndex::build(workplaces);

        let mut running: BTreeMap<i64, Decimal> = BTreeMap::new();
        let mut records = Vec::with_capacity(attendances.len());
        let mut warnings = Vec::new();

        for (position, row) in attendances.iter().enumerate() {
            let line = position + 1;

            let record = match row.parse() {
                Ok(record) => record,
                Err(err) => {
                    warnings.push(skip_warning(line, &err));
                    continue;
                }
            };

            let age = age_on(record.date_of_birth, as_of);
            let workplace_location = index.location_of(record.workplace_id);
            let allowances = self.engine.compute_allowances(
                age,
                &record.status,
                &record.location,
                workplace_location,
            );

            let previous = running
                .get(&record.student_id)
                .copied()
                .unwrap_or(Decimal::ZERO);
            let priced = self.accumulate(record.student_id, previous, &allowances);
            let (increment, total) = match priced {
                Ok(amounts) => amounts,
                Err(err) => {
                    warnings.push(skip_warning(line, &err));
                    continue;
                }
            };
            running.insert(record.student_id, total);

            records.push(RecordPayout {
                line,
                student_id: record.student_id,
                age,
                status: record.status,
                workplace_location: workplace_location.to_string(),
                allowances,
                increment,
            });
        }

        let totals: Vec<PayoutTotal> = running
            .into_iter()
            .map(|(student_id, payout)| PayoutTotal {
                student_id,
                payout: round_currency(payout),
            })
            .collect();

        let summary = CalculationSummary {
            records_processed: records.len(),
            records_skipped: warnings.len(),
            students: totals.len(),
        };

        info!(
            workplaces = index.len(),
            records_processed = summary.records_processed,
            records_skipped = summary.records_skipped,
            students = summary.students,
            as_of = %as_of,
            duration_us = start_time.elapsed().as_micros() as u64,
            "Payout calculation completed"
        );

        PayoutReport {
            totals,
            records,
            warnings,
            summary,
        }
    }

    /// Prices one record and adds it to `previous`, returning the increment
    /// and the new running total.
    fn accumulate(
        &self,
        student_id: i64,
        previous: Decimal,
        allowances: &AllowanceBreakdown,
    ) -> Result<(Decimal, Decimal), RecordError> {
        let overflow = || RecordError::AmountOverflow { student_id };
        let increment = self.apply_rounding(allowances.total().ok_or_else(overflow)?);
        let total = previous.checked_add(increment).ok_or_else(overflow)?;
        Ok((increment, self.apply_rounding(total)))
    }

    fn apply_rounding(&self, amount: Decimal) -> Decimal {
        match self.rounding {
            RoundingPolicy::PerRecord => round_currency(amount),
            RoundingPolicy::Final => amount,
        }
    }
}

fn skip_warning(line: usize, err: &RecordError) -> AuditWarning {
    debug!(line, reason = %err, "Skipping attendance record");
    AuditWarning {
        code: err.code().to_string(),
        message: err.to_string(),
        line,
    }
}
