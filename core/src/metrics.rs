//! Metric calculator — five derived workforce metrics per validated team.
//!
//! All arithmetic is double precision; rounding happens at presentation
//! time only, never here. Inputs arrive pre-validated, so every divisor
//! below is positive. The single guard on `agent_capacity` exists to
//! surface a validator contract bug loudly instead of dividing by zero
//! silently.

use crate::{
    error::{RecordError, RecordResult},
    record::TeamInput,
};
use serde::{Deserialize, Serialize};

// ── Composite score policy ─────────────────────────────────────────
// Weighted blend of three normalized sub-terms. The weights must sum
// to 1.0; change them here, nowhere else.

pub const WEIGHT_CAPACITY_SURPLUS: f64 = 0.4;
pub const WEIGHT_REMOTE_EFFICIENCY: f64 = 0.3;
pub const WEIGHT_INVERSE_UTILIZATION: f64 = 0.3;

/// Cap on the inverse-utilization sub-term: 100/utilization blows up as
/// utilization approaches zero.
pub const INVERSE_UTILIZATION_CAP: f64 = 100.0;

/// Derived metrics for one team. Immutable once computed — owned by the
/// team's result and never touched again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMetrics {
    pub workload_per_agent:        f64, // minutes per agent per day
    pub agent_capacity:            f64, // minutes per agent per day
    pub utilization_rate:          f64, // percent; >100 signals overload
    pub composite_score:           f64, // clamped to [0, 100]
    pub required_staff:            f64,
    pub staffing_efficiency_ratio: f64, // 1.0 = exactly right-sized
}

/// Compute all five metrics for a validated team. Deterministic; the only
/// error path is the defensive capacity guard.
pub fn compute(input: &TeamInput) -> RecordResult<TeamMetrics> {
    let total_demand = input.queries_per_day * input.average_query_time;
    let workload_per_agent = total_demand / input.current_staff;
    let agent_capacity = input.shift_hours * 60.0 * (input.available_capacity / 100.0);

    // Unreachable given the schema ranges, but a zero capacity would
    // poison every division below.
    if !agent_capacity.is_finite() || agent_capacity <= 0.0 {
        return Err(RecordError::ComputationFault {
            team_id: input.team_id.clone(),
            reason:  format!("agent_capacity collapsed to {agent_capacity}"),
        });
    }

    let utilization_rate = (workload_per_agent / agent_capacity) * 100.0;
    let required_staff = total_demand / agent_capacity;

    // queries_per_day = 0 makes required_staff zero and the ratio
    // infinite. IEEE infinity is acceptable: it can never land inside the
    // efficiency band, so the team is flagged for adjustment.
    let staffing_efficiency_ratio = input.current_staff / required_staff;

    let capacity_surplus = (100.0 - utilization_rate).max(0.0);
    let inverse_utilization = (100.0 / utilization_rate).min(INVERSE_UTILIZATION_CAP);
    let composite_score = (WEIGHT_CAPACITY_SURPLUS * capacity_surplus
        + WEIGHT_REMOTE_EFFICIENCY * input.remote_infrastructure_efficiency
        + WEIGHT_INVERSE_UTILIZATION * inverse_utilization)
        .clamp(0.0, 100.0);

    Ok(TeamMetrics {
        workload_per_agent,
        agent_capacity,
        utilization_rate,
        composite_score,
        required_staff,
        staffing_efficiency_ratio,
    })
}
