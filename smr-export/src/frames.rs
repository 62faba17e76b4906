//! Month-keyed frame sequence behind the animated spatial view.

use crate::models::{FramePoint, MonthFrame};
use serde::Serialize;
use smr_data::matrix::TemporalMatrix;

/// Fixed color-scale bounds for frame rendering, in rate units per month.
/// Pinned rather than derived from the data so frames share one scale
/// across months and across runs.
pub const FRAME_RATE_MIN: f64 = -0.1;
pub const FRAME_RATE_MAX: f64 = 0.1;

/// The frame sequence plus the shared color-scale bounds.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FramePayload {
    pub rate_min: f64,
    pub rate_max: f64,
    pub frames: Vec<MonthFrame>,
}

/// One frame per axis month, keyed by the month label. Points whose cell
/// is undefined that month are left out of the frame, so sparse edges of
/// the series render with fewer points instead of fabricated values.
pub fn month_frames(matrix: &TemporalMatrix) -> Vec<MonthFrame> {
    let keys = matrix.sorted_keys();
    matrix
        .axis()
        .iter()
        .enumerate()
        .map(|(column, period)| {
            let points = keys
                .iter()
                .filter_map(|key| {
                    matrix.cell(key, column).map(|rate| FramePoint {
                        x: key.x,
                        y: key.y,
                        rate,
                    })
                })
                .collect();
            MonthFrame {
                label: period.label(),
                points,
            }
        })
        .collect()
}

pub fn frame_payload(matrix: &TemporalMatrix) -> FramePayload {
    FramePayload {
        rate_min: FRAME_RATE_MIN,
        rate_max: FRAME_RATE_MAX,
        frames: month_frames(matrix),
    }
}

/// Serialize the frame sequence for the renderer.
pub fn frame_payload_json(payload: &FramePayload) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(payload)?)
}
