//! Chart payload for the monthly volume line chart.
//!
//! The renderer draws the full series as one line, then overlays one
//! colored segment per transition so accumulation and erosion stretches
//! stand out, the way the source dashboard highlighted them.

use crate::models::ChartSegment;
use serde::Serialize;
use smr_data::volume::{MonthlyVolume, VolumeDelta};

/// The complete payload the external chart renderer consumes.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartPayload {
    pub months: Vec<String>,
    pub totals: Vec<f64>,
    pub segments: Vec<ChartSegment>,
}

/// One overlay segment per month-over-month transition.
pub fn chart_segments(volumes: &[MonthlyVolume], deltas: &[VolumeDelta]) -> Vec<ChartSegment> {
    volumes
        .windows(2)
        .zip(deltas)
        .map(|(pair, delta)| ChartSegment {
            month_from: pair[0].period.iso(),
            month_to: pair[1].period.iso(),
            from_value: pair[0].total,
            to_value: pair[1].total,
            trend: delta.trend,
        })
        .collect()
}

pub fn chart_payload(volumes: &[MonthlyVolume], deltas: &[VolumeDelta]) -> ChartPayload {
    ChartPayload {
        months: volumes.iter().map(|v| v.period.iso()).collect(),
        totals: volumes.iter().map(|v| v.total).collect(),
        segments: chart_segments(volumes, deltas),
    }
}

/// Serialize the payload for the renderer.
pub fn chart_payload_json(payload: &ChartPayload) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(payload)?)
}

#[cfg(test)]
mod tests {
    use super::{chart_payload, chart_payload_json, chart_segments};
    use smr_data::volume::{MonthlyVolume, VolumeTrend, volume_deltas};
    use smr_survey::period::Period;

    fn series() -> Vec<MonthlyVolume> {
        vec![
            MonthlyVolume {
                period: Period::new(2023, 1),
                total: 3.0,
            },
            MonthlyVolume {
                period: Period::new(2023, 2),
                total: 2.5,
            },
            MonthlyVolume {
                period: Period::new(2023, 3),
                total: 4.0,
            },
        ]
    }

    #[test]
    fn test_segments_cover_each_transition() {
        let volumes = series();
        let deltas = volume_deltas(&volumes);
        let segments = chart_segments(&volumes, &deltas);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].month_from, "2023-01");
        assert_eq!(segments[0].month_to, "2023-02");
        assert_eq!(segments[0].trend, VolumeTrend::Erosion);
        assert_eq!(segments[1].trend, VolumeTrend::Accumulation);
        assert_eq!(segments[1].from_value, 2.5);
        assert_eq!(segments[1].to_value, 4.0);
    }

    #[test]
    fn test_payload_shape() {
        let volumes = series();
        let deltas = volume_deltas(&volumes);
        let payload = chart_payload(&volumes, &deltas);
        assert_eq!(payload.months, vec!["2023-01", "2023-02", "2023-03"]);
        assert_eq!(payload.totals, vec![3.0, 2.5, 4.0]);

        let json = chart_payload_json(&payload).unwrap();
        assert!(json.contains("\"erosion\""));
        assert!(json.contains("\"accumulation\""));
    }
}
