use crate::interpolation::fill_gaps;
use log::info;
use smr_survey::error::SurveyError;
use smr_survey::period::{months_between, Period, PeriodRange};
use smr_survey::point::SpatialKey;
use smr_survey::survey_file::SurveyFile;
use std::collections::HashMap;

/// The point-by-month rate grid reconstructed from the survey batch.
///
/// Columns are every calendar month from the earliest to the latest period
/// observed across all files, with no skipped months. Each row belongs to
/// one spatial key; cells a file stamped directly hold that file's monthly
/// rate, cells between observations are linearly interpolated, and cells
/// outside a row's first/last observation stay undefined.
///
/// The matrix is mutated only while `build` runs; afterwards it is
/// read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalMatrix {
    axis: Vec<Period>,
    rows: HashMap<SpatialKey, Vec<Option<f64>>>,
}

impl TemporalMatrix {
    /// Assemble the matrix from the full survey batch.
    ///
    /// Every file stamps its monthly rate at BOTH its start and end column,
    /// since a difference snapshot says as much about one boundary as the
    /// other. When two files hit the same (point, month) cell the later
    /// file in batch order wins; callers define that order (the CLI sorts
    /// file names), so the resolution is deterministic. Missing readings
    /// stamp nothing and are recovered by interpolation where neighbors
    /// exist.
    pub fn build(files: &[SurveyFile]) -> Result<TemporalMatrix, SurveyError> {
        let first = files.first().ok_or(SurveyError::EmptyInput)?;
        let mut min = first.period.start;
        let mut max = first.period.end;
        for file in files {
            min = min.min(file.period.start);
            max = max.max(file.period.end);
        }
        let axis: Vec<Period> = PeriodRange(min, max).collect();
        let mut rows: HashMap<SpatialKey, Vec<Option<f64>>> = HashMap::new();

        for file in files {
            let start_idx = months_between(min, file.period.start) as usize;
            let end_idx = months_between(min, file.period.end) as usize;
            for point in &file.points {
                if let Some(rate) = point.rate.value() {
                    let row = rows
                        .entry(point.key)
                        .or_insert_with(|| vec![None; axis.len()]);
                    row[start_idx] = Some(rate);
                    row[end_idx] = Some(rate);
                }
            }
        }

        for row in rows.values_mut() {
            fill_gaps(row);
        }

        info!(
            "temporal matrix: {} point(s) over {} month(s) ({} - {})",
            rows.len(),
            axis.len(),
            min.iso(),
            max.iso()
        );
        Ok(TemporalMatrix { axis, rows })
    }

    /// The ordered monthly column axis.
    pub fn axis(&self) -> &[Period] {
        &self.axis
    }

    pub fn rows(&self) -> &HashMap<SpatialKey, Vec<Option<f64>>> {
        &self.rows
    }

    /// Column index of a period on the axis, if it falls inside the range.
    pub fn column_index(&self, period: Period) -> Option<usize> {
        let first = *self.axis.first()?;
        let offset = months_between(first, period);
        if offset < 0 || offset as usize >= self.axis.len() {
            return None;
        }
        Some(offset as usize)
    }

    /// One cell, `None` when the point has no defined value that month.
    pub fn cell(&self, key: &SpatialKey, column: usize) -> Option<f64> {
        self.rows.get(key).and_then(|row| row[column])
    }

    /// Spatial keys in total order, for deterministic export iteration.
    pub fn sorted_keys(&self) -> Vec<SpatialKey> {
        let mut keys: Vec<SpatialKey> = self.rows.keys().copied().collect();
        keys.sort();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::TemporalMatrix;
    use smr_survey::error::SurveyError;
    use smr_survey::period::{months_between, Period};
    use smr_survey::point::SpatialKey;
    use smr_survey::survey_file::SurveyFile;

    fn batch(specs: &[(&str, &[u8])]) -> Vec<SurveyFile> {
        specs
            .iter()
            .map(|(name, bytes)| SurveyFile::from_bytes(name, bytes).unwrap())
            .collect()
    }

    #[test]
    fn test_empty_batch_is_an_error() {
        let err = TemporalMatrix::build(&[]).unwrap_err();
        assert_eq!(err, SurveyError::EmptyInput);
    }

    #[test]
    fn test_axis_is_contiguous_and_spans_all_periods() {
        let files = batch(&[
            ("2022_NOVEMBRO_x_2023_JANEIRO.xyz", b"0\t0\t2.0\n"),
            ("2023_MARCO_x_2023_MAIO.xyz", b"0\t0\t4.0\n"),
        ]);
        let matrix = TemporalMatrix::build(&files).unwrap();
        let axis = matrix.axis();
        let min = Period::new(2022, 11);
        let max = Period::new(2023, 5);
        assert_eq!(axis.len(), (months_between(min, max) + 1) as usize);
        assert_eq!(axis.first(), Some(&min));
        assert_eq!(axis.last(), Some(&max));
        for window in axis.windows(2) {
            assert_eq!(months_between(window[0], window[1]), 1);
        }
    }

    #[test]
    fn test_two_file_scenario() {
        // First file: Jan->Mar, z=6 over 2 months -> 3.0/month at Jan and Mar.
        // Second file: Mar->May, z=4 over 2 months -> 2.0/month at Mar and May;
        // it is later in batch order, so March becomes 2.0.
        let files = batch(&[
            ("2023_JANEIRO_x_2023_MARCO.xyz", b"0.0\t0.0\t6.0\n"),
            ("2023_MARCO_x_2023_MAIO.xyz", b"0.0\t0.0\t4.0\n"),
        ]);
        let matrix = TemporalMatrix::build(&files).unwrap();
        assert_eq!(matrix.axis().len(), 5);

        let key = SpatialKey::new(0.0, 0.0);
        assert_eq!(matrix.cell(&key, 0), Some(3.0)); // Jan, stamped
        assert_eq!(matrix.cell(&key, 1), Some(2.5)); // Feb, interpolated
        assert_eq!(matrix.cell(&key, 2), Some(2.0)); // Mar, last write wins
        assert_eq!(matrix.cell(&key, 3), Some(2.0)); // Apr, interpolated
        assert_eq!(matrix.cell(&key, 4), Some(2.0)); // May, stamped
    }

    #[test]
    fn test_edges_stay_undefined_without_observations() {
        // Point (1,1) is only observed Mar->May inside a Nov->May axis.
        let files = batch(&[
            ("2022_NOVEMBRO_x_2023_JANEIRO.xyz", b"0\t0\t2.0\n"),
            ("2023_MARCO_x_2023_MAIO.xyz", b"1\t1\t4.0\n"),
        ]);
        let matrix = TemporalMatrix::build(&files).unwrap();
        let key = SpatialKey::new(1.0, 1.0);
        assert_eq!(matrix.cell(&key, 0), None); // Nov
        assert_eq!(matrix.cell(&key, 3), None); // Feb
        assert_eq!(matrix.cell(&key, 4), Some(2.0)); // Mar
        assert_eq!(matrix.cell(&key, 6), Some(2.0)); // May
    }

    #[test]
    fn test_missing_readings_stamp_nothing() {
        let files = batch(&[(
            "2023_JANEIRO_x_2023_MARCO.xyz",
            b"0\t0\t---\n1\t1\t6.0\n" as &[u8],
        )]);
        let matrix = TemporalMatrix::build(&files).unwrap();
        assert!(!matrix.rows().contains_key(&SpatialKey::new(0.0, 0.0)));
        assert_eq!(matrix.cell(&SpatialKey::new(1.0, 1.0), 0), Some(3.0));
    }

    #[test]
    fn test_column_index_bounds() {
        let files = batch(&[("2023_JANEIRO_x_2023_MARCO.xyz", b"0\t0\t6.0\n")]);
        let matrix = TemporalMatrix::build(&files).unwrap();
        assert_eq!(matrix.column_index(Period::new(2023, 1)), Some(0));
        assert_eq!(matrix.column_index(Period::new(2023, 3)), Some(2));
        assert_eq!(matrix.column_index(Period::new(2022, 12)), None);
        assert_eq!(matrix.column_index(Period::new(2023, 4)), None);
    }
}
