//! Configuration loading and management for the Student Payout Engine.
//!
//! This module provides the allowance schedule ([`RateTable`]), the rounding
//! policy, and a loader that reads both from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use student_payout::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payout.yaml").unwrap();
//! println!("Rounding: {:?}", config.rounding());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayoutConfig, RateTable, RateTier, RoundingPolicy};
