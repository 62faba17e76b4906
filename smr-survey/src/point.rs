use crate::reading::RateReading;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// The (x, y) coordinate identifying one fixed survey point across time.
///
/// Points are matched by exact coordinate equality: two files observe the
/// same physical point only when they carry bit-identical coordinates.
/// Hash/Eq go through the raw bit patterns for that reason, and Ord uses
/// a total order so exports can iterate points deterministically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpatialKey {
    pub x: f64,
    pub y: f64,
}

impl SpatialKey {
    pub fn new(x: f64, y: f64) -> SpatialKey {
        SpatialKey { x, y }
    }
}

impl PartialEq for SpatialKey {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for SpatialKey {}

impl Hash for SpatialKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl Ord for SpatialKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.x.total_cmp(&other.x) {
            Ordering::Equal => self.y.total_cmp(&other.y),
            ord => ord,
        }
    }
}

impl PartialOrd for SpatialKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One parsed row of a survey file: where, and how fast the bed moved.
/// The rate is already monthly-normalized by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub key: SpatialKey,
    pub rate: RateReading,
}
