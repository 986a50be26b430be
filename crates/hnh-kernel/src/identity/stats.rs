//! Sensitivity vector summary for debugging.

use serde::{Deserialize, Serialize};

use crate::schema::{Vector32, NUM_PARAMETERS};

/// Histogram and range of a sensitivity vector.
///
/// Buckets are `[0, 0.25)`, `[0.25, 0.5)`, `[0.5, 0.75)`, `[0.75, 1]`.
/// "Low" is the first bucket, "high" the last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityStats {
    pub histogram: [usize; 4],
    pub low_pct: f64,
    pub high_pct: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl SensitivityStats {
    /// Summarise `sensitivity`.
    pub fn compute(sensitivity: &Vector32) -> Self {
        let mut histogram = [0usize; 4];
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in sensitivity {
            let bucket = ((v * 4.0) as usize).min(3);
            histogram[bucket] += 1;
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }
        let n = NUM_PARAMETERS as f64;
        Self {
            histogram,
            low_pct: 100.0 * histogram[0] as f64 / n,
            high_pct: 100.0 * histogram[3] as f64 / n,
            min,
            max,
            mean: sum / n,
        }
    }
}
