use crate::error::SurveyError;
use crate::filename::SurveyPeriod;
use crate::point::{PointRecord, SpatialKey};
use crate::reading::RateReading;
use csv::ReaderBuilder;
use log::debug;

/// One uploaded survey artifact: the period pair from its name plus the
/// parsed, monthly-normalized point rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyFile {
    pub file_name: String,
    pub period: SurveyPeriod,
    pub points: Vec<PointRecord>,
}

impl SurveyFile {
    /// Parse a raw survey upload: the period pair comes from `file_name`,
    /// the points from a tab-separated, header-less X/Y/Z byte stream.
    ///
    /// A bad file name is fatal (the caller aborts the batch). Bad cells
    /// are not: a non-numeric Z becomes a missing reading, and rows whose
    /// X or Y cannot be read are dropped since they identify no point.
    /// Each Z is divided by the months the file spans, expressing it as a
    /// per-month rate.
    pub fn from_bytes(file_name: &str, bytes: &[u8]) -> Result<SurveyFile, SurveyError> {
        let period = SurveyPeriod::parse_file_name(file_name)?;
        let month_span = period.month_span();
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);
        let mut points = Vec::new();
        let mut dropped = 0usize;
        for record in reader.records() {
            let record = match record {
                Ok(r) => r,
                Err(_) => {
                    dropped += 1;
                    continue;
                }
            };
            let x = RateReading::coerce(record.get(0).unwrap_or("")).value();
            let y = RateReading::coerce(record.get(1).unwrap_or("")).value();
            let (x, y) = match (x, y) {
                (Some(x), Some(y)) => (x, y),
                _ => {
                    dropped += 1;
                    continue;
                }
            };
            let rate = RateReading::coerce(record.get(2).unwrap_or("")).per_month(month_span);
            points.push(PointRecord {
                key: SpatialKey::new(x, y),
                rate,
            });
        }
        if dropped > 0 {
            debug!("{file_name}: dropped {dropped} row(s) without usable coordinates");
        }
        Ok(SurveyFile {
            file_name: file_name.to_string(),
            period,
            points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SurveyFile;
    use crate::error::SurveyError;
    use crate::point::SpatialKey;
    use crate::reading::RateReading;

    #[test]
    fn test_from_bytes_normalizes_rates() {
        // Jan -> Mar spans 2 months, so Z is halved.
        let data = b"0.0\t0.0\t6.0\n1.0\t2.0\t-4.0\n";
        let file = SurveyFile::from_bytes("2023_JANEIRO_x_2023_MARCO.xyz", data).unwrap();
        assert_eq!(file.period.month_span(), 2);
        assert_eq!(file.points.len(), 2);
        assert_eq!(file.points[0].key, SpatialKey::new(0.0, 0.0));
        assert_eq!(file.points[0].rate, RateReading::Rate(3.0));
        assert_eq!(file.points[1].rate, RateReading::Rate(-2.0));
    }

    #[test]
    fn test_from_bytes_non_numeric_z_is_missing() {
        let data = b"0.0\t0.0\t---\n1.0\t1.0\t2.0\n";
        let file = SurveyFile::from_bytes("2023_JANEIRO_x_2023_FEVEREIRO.xyz", data).unwrap();
        assert_eq!(file.points.len(), 2);
        assert_eq!(file.points[0].rate, RateReading::Missing);
        assert_eq!(file.points[1].rate, RateReading::Rate(2.0));
    }

    #[test]
    fn test_from_bytes_drops_rows_without_coordinates() {
        let data = b"bad\t0.0\t1.0\n2.0\t3.0\t1.0\n5.0\n";
        let file = SurveyFile::from_bytes("2023_JANEIRO_x_2023_FEVEREIRO.xyz", data).unwrap();
        assert_eq!(file.points.len(), 1);
        assert_eq!(file.points[0].key, SpatialKey::new(2.0, 3.0));
    }

    #[test]
    fn test_from_bytes_bad_name_is_fatal() {
        let err = SurveyFile::from_bytes("notes.xyz", b"0\t0\t1\n").unwrap_err();
        assert!(matches!(err, SurveyError::Format { .. }));
    }

    #[test]
    fn test_from_bytes_empty_stream() {
        let file = SurveyFile::from_bytes("2023_JANEIRO_x_2023_MARCO.xyz", b"").unwrap();
        assert!(file.points.is_empty());
    }
}
