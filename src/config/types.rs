//! Configuration types for payout calculation.
//!
//! This module contains the [`RateTable`] and the surrounding [`PayoutConfig`]
//! that are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One row of the basic allowance schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    /// The youngest age (in whole years) this rate applies to.
    pub min_age: u32,
    /// The daily basic allowance for this tier.
    pub rate: Decimal,
}

/// Raw shape of the rate table as it appears in YAML, before validation.
#[derive(Debug, Clone, Deserialize)]
struct RateTableConfig {
    basic: Vec<RateTier>,
    meal: Decimal,
    travel_per_km: Decimal,
    fuel_per_day: Decimal,
}

/// The daily allowance schedule.
///
/// Holds the age-tiered basic allowance and the flat meal, travel and fuel
/// constants. Tiers are kept in ascending order of `min_age`; the rate for an
/// age is the rate of the highest tier whose threshold does not exceed it.
///
/// # Example
///
/// ```
/// use student_payout::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::default();
/// assert_eq!(table.basic_allowance(17), Decimal::new(7250, 2));
/// assert_eq!(table.basic_allowance(25), Decimal::new(8590, 2));
/// assert_eq!(table.meal_allowance(), Decimal::new(550, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RateTableConfig")]
pub struct RateTable {
    basic: Vec<RateTier>,
    meal: Decimal,
    travel_per_km: Decimal,
    fuel_per_day: Decimal,
}

impl RateTable {
    /// Builds a rate table, rejecting unordered thresholds and negative amounts.
    pub fn new(
        basic: Vec<RateTier>,
        meal: Decimal,
        travel_per_km: Decimal,
        fuel_per_day: Decimal,
    ) -> EngineResult<Self> {
        if let Some(pair) = basic.windows(2).find(|w| w[0].min_age >= w[1].min_age) {
            return Err(EngineError::InvalidRateTable {
                message: format!(
                    "age thresholds must be strictly ascending ({} then {})",
                    pair[0].min_age, pair[1].min_age
                ),
            });
        }

        if let Some(tier) = basic.iter().find(|t| t.rate.is_sign_negative()) {
            return Err(EngineError::InvalidRateTable {
                message: format!("negative basic rate {} for age {}", tier.rate, tier.min_age),
            });
        }

        for (name, value) in [
            ("meal", meal),
            ("travel_per_km", travel_per_km),
            ("fuel_per_day", fuel_per_day),
        ] {
            if value.is_sign_negative() {
                return Err(EngineError::InvalidRateTable {
                    message: format!("{} must not be negative, got {}", name, value),
                });
            }
        }

        Ok(Self {
            basic,
            meal,
            travel_per_km,
            fuel_per_day,
        })
    }

    /// Returns the daily basic allowance for a student of the given age.
    ///
    /// Zero when the age falls below every threshold.
    pub fn basic_allowance(&self, age: u32) -> Decimal {
        self.basic
            .iter()
            .rfind(|tier| tier.min_age <= age)
            .map(|tier| tier.rate)
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns the flat meal allowance for a day worked in person.
    pub fn meal_allowance(&self) -> Decimal {
        self.meal
    }

    /// Returns the travel allowance paid per kilometre.
    pub fn travel_rate_per_km(&self) -> Decimal {
        self.travel_per_km
    }

    /// Returns the flat fuel allowance per day.
    ///
    /// Part of the published schedule but not currently applied to payouts.
    pub fn fuel_allowance(&self) -> Decimal {
        self.fuel_per_day
    }

    /// Returns the basic allowance tiers in ascending order.
    pub fn tiers(&self) -> &[RateTier] {
        &self.basic
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            basic: vec![
                RateTier {
                    min_age: 0,
                    rate: Decimal::new(7250, 2),
                },
                RateTier {
                    min_age: 18,
                    rate: Decimal::new(8100, 2),
                },
                RateTier {
                    min_age: 25,
                    rate: Decimal::new(8590, 2),
                },
                RateTier {
                    min_age: 26,
                    rate: Decimal::new(9050, 2),
                },
            ],
            meal: Decimal::new(550, 2),
            travel_per_km: Decimal::new(109, 2),
            fuel_per_day: Decimal::new(100, 2),
        }
    }
}

impl TryFrom<RateTableConfig> for RateTable {
    type Error = EngineError;

    fn try_from(raw: RateTableConfig) -> Result<Self, Self::Error> {
        RateTable::new(raw.basic, raw.meal, raw.travel_per_km, raw.fuel_per_day)
    }
}

/// When payouts are rounded to cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Round each record's payout, then re-round the running total after every
    /// addition. Matches the historical payout files.
    #[default]
    PerRecord,
    /// Accumulate at full precision and round each total once at the end.
    Final,
}

/// The complete payout configuration loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutConfig {
    /// The allowance schedule.
    #[serde(default)]
    pub rates: RateTable,
    /// The rounding policy for accumulated totals.
    #[serde(default)]
    pub rounding: RoundingPolicy,
}
