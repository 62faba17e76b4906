//! Export boundary for the siltation analysis pipeline.
//!
//! Everything here is data handed to external renderers: the volume/delta
//! CSV, the chart payload for the volume line chart, and the month-keyed
//! frame sequence behind the animated spatial view. All payload structs
//! derive `Serialize` so the renderer side can consume them as JSON.

pub mod chart;
pub mod frames;
pub mod models;
pub mod tabular;
