use crate::matrix::TemporalMatrix;
use serde::Serialize;
use smr_survey::period::Period;

/// Direction of the month-over-month change in aggregate volume.
///
/// Positive deltas mean material settled (accumulation), negative deltas
/// mean it washed out (erosion). A delta of exactly zero is reported as
/// its own class instead of being lumped in with erosion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeTrend {
    Accumulation,
    Erosion,
    Stable,
}

impl VolumeTrend {
    pub fn classify(delta: f64) -> VolumeTrend {
        if delta > 0.0 {
            VolumeTrend::Accumulation
        } else if delta < 0.0 {
            VolumeTrend::Erosion
        } else {
            VolumeTrend::Stable
        }
    }
}

/// Total volume rate across all points for one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyVolume {
    pub period: Period,
    pub total: f64,
}

/// Month-over-month change, aligned to the later of the two months.
/// The first month of a series has no delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumeDelta {
    pub period: Period,
    pub delta: f64,
    pub trend: VolumeTrend,
}

/// Reduce the matrix to one total per month by summing every row's cell
/// for that column. Undefined cells contribute zero.
pub fn monthly_volumes(matrix: &TemporalMatrix) -> Vec<MonthlyVolume> {
    matrix
        .axis()
        .iter()
        .enumerate()
        .map(|(column, period)| {
            let total = matrix
                .rows()
                .values()
                .filter_map(|row| row[column])
                .sum::<f64>();
            MonthlyVolume {
                period: *period,
                total,
            }
        })
        .collect()
}

/// First difference of the volume series, classified. One entry per
/// transition, so the result is one shorter than the input.
pub fn volume_deltas(volumes: &[MonthlyVolume]) -> Vec<VolumeDelta> {
    volumes
        .windows(2)
        .map(|pair| {
            let delta = pair[1].total - pair[0].total;
            VolumeDelta {
                period: pair[1].period,
                delta,
                trend: VolumeTrend::classify(delta),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{monthly_volumes, volume_deltas, MonthlyVolume, VolumeTrend};
    use crate::matrix::TemporalMatrix;
    use smr_survey::period::Period;
    use smr_survey::survey_file::SurveyFile;

    fn scenario_matrix() -> TemporalMatrix {
        let files = vec![
            SurveyFile::from_bytes("2023_JANEIRO_x_2023_MARCO.xyz", b"0.0\t0.0\t6.0\n").unwrap(),
            SurveyFile::from_bytes("2023_MARCO_x_2023_MAIO.xyz", b"0.0\t0.0\t4.0\n").unwrap(),
        ];
        TemporalMatrix::build(&files).unwrap()
    }

    #[test]
    fn test_monthly_volumes_sum_matches_matrix_cells() {
        let matrix = scenario_matrix();
        let volumes = monthly_volumes(&matrix);
        assert_eq!(volumes.len(), matrix.axis().len());

        let series_total: f64 = volumes.iter().map(|v| v.total).sum();
        let cells_total: f64 = matrix
            .rows()
            .values()
            .flat_map(|row| row.iter().flatten())
            .sum();
        assert!((series_total - cells_total).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_volumes_scenario_values() {
        let matrix = scenario_matrix();
        let volumes = monthly_volumes(&matrix);
        let totals: Vec<f64> = volumes.iter().map(|v| v.total).collect();
        assert_eq!(totals, vec![3.0, 2.5, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_volume_deltas_are_first_differences() {
        let matrix = scenario_matrix();
        let volumes = monthly_volumes(&matrix);
        let deltas = volume_deltas(&volumes);
        assert_eq!(deltas.len(), volumes.len() - 1);
        for (idx, delta) in deltas.iter().enumerate() {
            assert_eq!(delta.period, volumes[idx + 1].period);
            assert!((delta.delta - (volumes[idx + 1].total - volumes[idx].total)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_trend_classification() {
        assert_eq!(VolumeTrend::classify(0.3), VolumeTrend::Accumulation);
        assert_eq!(VolumeTrend::classify(-0.3), VolumeTrend::Erosion);
        assert_eq!(VolumeTrend::classify(0.0), VolumeTrend::Stable);
    }

    #[test]
    fn test_deltas_classify_each_transition() {
        let volumes = vec![
            MonthlyVolume {
                period: Period::new(2023, 1),
                total: 1.0,
            },
            MonthlyVolume {
                period: Period::new(2023, 2),
                total: 2.5,
            },
            MonthlyVolume {
                period: Period::new(2023, 3),
                total: 2.5,
            },
            MonthlyVolume {
                period: Period::new(2023, 4),
                total: 1.0,
            },
        ];
        let deltas = volume_deltas(&volumes);
        let trends: Vec<VolumeTrend> = deltas.iter().map(|d| d.trend).collect();
        assert_eq!(
            trends,
            vec![
                VolumeTrend::Accumulation,
                VolumeTrend::Stable,
                VolumeTrend::Erosion
            ]
        );
    }

    #[test]
    fn test_single_month_series_has_no_deltas() {
        let volumes = vec![MonthlyVolume {
            period: Period::new(2023, 1),
            total: 4.0,
        }];
        assert!(volume_deltas(&volumes).is_empty());
    }
}
