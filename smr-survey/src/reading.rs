use serde::{Deserialize, Serialize};

/// One elevation-change cell from a survey file.
///
/// Raw exports routinely contain non-numeric cells; those become
/// `Missing` rather than failing the row, so a half-broken file still
/// contributes every point it can.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum RateReading {
    Missing,
    /// Monthly-normalized elevation change rate.
    Rate(f64),
}

impl RateReading {
    /// Coerce a raw cell to a number. Accepts a `,` decimal separator for
    /// locale-formatted exports; anything else non-numeric is `Missing`.
    pub fn coerce(cell: &str) -> RateReading {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return RateReading::Missing;
        }
        if let Ok(value) = trimmed.parse::<f64>() {
            return RateReading::Rate(value);
        }
        if trimmed.matches(',').count() == 1 && !trimmed.contains('.') {
            if let Ok(value) = trimmed.replace(',', ".").parse::<f64>() {
                return RateReading::Rate(value);
            }
        }
        RateReading::Missing
    }

    /// Divide a raw elevation difference by the months it spans.
    pub fn per_month(self, month_span: i32) -> RateReading {
        match self {
            RateReading::Missing => RateReading::Missing,
            RateReading::Rate(value) => RateReading::Rate(value / month_span as f64),
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            RateReading::Missing => None,
            RateReading::Rate(value) => Some(value),
        }
    }
}
