use crate::error::SurveyError;
use crate::period::{month_from_name, month_name, months_between, Period};
use serde::{Deserialize, Serialize};

/// File extensions accepted for survey uploads.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["xyz", "txt", "csv"];

/// The dated interval one survey file covers, extracted from its name.
///
/// File names follow `<year>_<MONTH>_x_<year>_<MONTH>.<ext>`, e.g.
/// `2023_JANEIRO_x_2024_MARCO.xyz`: the segments around the literal `x`
/// are the start and end periods of the difference snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyPeriod {
    pub start: Period,
    pub end: Period,
}

/// Strip a trailing accepted extension, if present. Unknown extensions are
/// left attached and will fail the segment scan downstream.
fn strip_extension(name: &str) -> &str {
    if let Some((stem, ext)) = name.rsplit_once('.') {
        if ACCEPTED_EXTENSIONS
            .iter()
            .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        {
            return stem;
        }
    }
    name
}

fn parse_year(file_name: &str, segment: &str) -> Result<i32, SurveyError> {
    segment.parse::<i32>().map_err(|_| SurveyError::DateParse {
        file_name: file_name.to_string(),
        detail: format!("'{segment}' is not a year"),
    })
}

fn parse_month(file_name: &str, segment: &str) -> Result<u32, SurveyError> {
    month_from_name(segment).ok_or_else(|| SurveyError::DateParse {
        file_name: file_name.to_string(),
        detail: format!("'{segment}' is not a recognized month name"),
    })
}

impl SurveyPeriod {
    /// Extract the start/end periods from a survey file name.
    ///
    /// The two underscore-delimited segments before the `x` separator are
    /// the start year and month name; the two after it are the end year
    /// and month name. A missing separator is a `Format` error; anything
    /// wrong with the four date segments, or an end period preceding the
    /// start, is a `DateParse` error. Either one is fatal for the batch.
    pub fn parse_file_name(name: &str) -> Result<SurveyPeriod, SurveyError> {
        let stem = strip_extension(name);
        let segments: Vec<&str> = stem.split('_').collect();
        let separator_idx = segments
            .iter()
            .position(|segment| *segment == "x")
            .ok_or_else(|| SurveyError::Format {
                file_name: name.to_string(),
            })?;
        if separator_idx < 2 || separator_idx + 2 >= segments.len() {
            return Err(SurveyError::DateParse {
                file_name: name.to_string(),
                detail: "expected <year>_<month> on both sides of 'x'".to_string(),
            });
        }
        let start = Period::new(
            parse_year(name, segments[separator_idx - 2])?,
            parse_month(name, segments[separator_idx - 1])?,
        );
        let end = Period::new(
            parse_year(name, segments[separator_idx + 1])?,
            parse_month(name, segments[separator_idx + 2])?,
        );
        if end < start {
            return Err(SurveyError::DateParse {
                file_name: name.to_string(),
                detail: format!("end period {} precedes start {}", end.iso(), start.iso()),
            });
        }
        Ok(SurveyPeriod { start, end })
    }

    /// Number of months the snapshot spans, clamped to at least one so a
    /// same-month pair still yields a usable monthly rate.
    pub fn month_span(&self) -> i32 {
        months_between(self.start, self.end).max(1)
    }

    /// Re-encode the period pair into the canonical file-name stem.
    pub fn canonical_stem(&self) -> String {
        format!(
            "{}_{}_x_{}_{}",
            self.start.year,
            month_name(self.start.month),
            self.end.year,
            month_name(self.end.month),
        )
    }
}
