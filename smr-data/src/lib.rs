//! Temporal reconstruction and aggregation for siltation surveys.
//!
//! This crate turns a batch of parsed survey files into the point-by-month
//! rate matrix and reduces it to the monthly volume signal the exporters
//! consume.

pub mod interpolation;
pub mod matrix;
pub mod volume;
