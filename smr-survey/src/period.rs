use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::mem::replace;

/// The 12 recognized month names, uppercase and unaccented.
/// Survey file names carry Portuguese month names; MARÇO is normalized
/// to MARCO before lookup.
pub const MONTH_NAMES: [&str; 12] = [
    "JANEIRO",
    "FEVEREIRO",
    "MARCO",
    "ABRIL",
    "MAIO",
    "JUNHO",
    "JULHO",
    "AGOSTO",
    "SETEMBRO",
    "OUTUBRO",
    "NOVEMBRO",
    "DEZEMBRO",
];

/// Normalize a month-name segment for vocabulary lookup: uppercase,
/// cedilla stripped.
fn normalize_month_name(name: &str) -> String {
    name.trim().to_uppercase().replace('Ç', "C")
}

/// Resolve a month-name segment to its 1-based month number.
/// Case-insensitive and accent-insensitive; returns None for anything
/// outside the 12-entry vocabulary.
pub fn month_from_name(name: &str) -> Option<u32> {
    let normalized = normalize_month_name(name);
    MONTH_NAMES
        .iter()
        .position(|candidate| *candidate == normalized)
        .map(|idx| (idx + 1) as u32)
}

/// Canonical name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

/// A survey date truncated to month granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Period {
        Period { year, month }
    }

    /// Day 1 of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| panic!("invalid period {}/{}", self.year, self.month))
    }

    /// The next calendar month.
    pub fn succ(&self) -> Period {
        if self.month == 12 {
            Period::new(self.year + 1, 1)
        } else {
            Period::new(self.year, self.month + 1)
        }
    }

    /// Short label for frame titles, e.g. "Mar/2023".
    pub fn label(&self) -> String {
        self.first_day().format("%b/%Y").to_string()
    }

    /// "YYYY-MM" form used in the tabular export.
    pub fn iso(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Signed number of whole months from `start` to `end`.
/// Anti-commutative: `months_between(a, b) == -months_between(b, a)`.
pub fn months_between(start: Period, end: Period) -> i32 {
    (end.year - start.year) * 12 + (end.month as i32 - start.month as i32)
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.year.cmp(&other.year) {
            Ordering::Equal => self.month.cmp(&other.month),
            ord => ord,
        }
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A period range iterator that yields each month from the start period
/// through the end period (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct PeriodRange(pub Period, pub Period);

impl Iterator for PeriodRange {
    type Item = Period;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0.succ();
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}
