//! Calculation logic for the Student Payout Engine.
//!
//! This module contains age derivation, coordinate distance, the per-record
//! allowance engine, the workplace lookup, and the aggregator that folds
//! attendance records into per-student totals.

mod age;
mod aggregator;
mod allowances;
mod distance;
mod workplace_index;

pub use age::age_on;
pub use aggregator::{PayoutAggregator, round_currency};
pub use allowances::{AllowanceEngine, MIN_TRAVEL_DISTANCE_KM};
pub use distance::{Coordinate, distance};
pub use workplace_index::WorkplaceIndex;
