//! Recommendation engine — the strict three-gate staffing decision.
//!
//! All three gates must pass (logical AND, not a weighted vote). This is
//! deliberate: a high composite score cannot compensate for an
//! out-of-band efficiency ratio or an overloaded utilization rate.

use crate::metrics::TeamMetrics;
use serde::{Deserialize, Serialize};

pub const MIN_COMPOSITE_SCORE: f64 = 60.0;
pub const EFFICIENCY_RATIO_MIN: f64 = 0.9;
pub const EFFICIENCY_RATIO_MAX: f64 = 1.1;
pub const MAX_UTILIZATION_RATE: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Scheduling is healthy — keep the current workforce distribution.
    Maintain,
    /// At least one gate failed — reassign staff, adjust shifts, or
    /// improve remote infrastructure.
    NeedsAdjustment,
}

/// Pure, total decision over the three gate thresholds.
pub fn decide(metrics: &TeamMetrics) -> Recommendation {
    let score_ok = metrics.composite_score >= MIN_COMPOSITE_SCORE;
    let ratio_ok = (EFFICIENCY_RATIO_MIN..=EFFICIENCY_RATIO_MAX)
        .contains(&metrics.staffing_efficiency_ratio);
    let load_ok = metrics.utilization_rate <= MAX_UTILIZATION_RATE;

    if score_ok && ratio_ok && load_ok {
        Recommendation::Maintain
    } else {
        Recommendation::NeedsAdjustment
    }
}
