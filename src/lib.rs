//! Student Payout Engine
//!
//! This crate computes daily payouts for students from an attendance log and a
//! workplace directory: an age-tiered basic allowance, a flat meal allowance for
//! days worked in person, and a travel allowance for commutes of 5 km or more.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
