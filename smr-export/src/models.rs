//! Serializable export model structs.

use serde::Serialize;
use smr_data::volume::VolumeTrend;

/// One row of the tabular export: `(month, total_volume, delta_volume)`.
/// The first month has no preceding month, so its delta is absent.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthVolumeRow {
    /// "YYYY-MM".
    pub month: String,
    pub total_volume: f64,
    pub delta_volume: Option<f64>,
}

/// One colored segment of the volume line chart, covering the transition
/// between two consecutive months. The trend picks the polarity the
/// renderer colors by (accumulation vs. erosion).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSegment {
    pub month_from: String,
    pub month_to: String,
    pub from_value: f64,
    pub to_value: f64,
    pub trend: VolumeTrend,
}

/// A single point inside one animation frame.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FramePoint {
    pub x: f64,
    pub y: f64,
    pub rate: f64,
}

/// One month of the animated spatial sequence, keyed by its display
/// label. Points with no defined value that month are omitted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthFrame {
    /// "%b/%Y" label, e.g. "Mar/2023".
    pub label: String,
    pub points: Vec<FramePoint>,
}
