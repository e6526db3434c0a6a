//! Raw and validated record types.
//!
//! A `RawRecord` is whatever the upstream CSV/JSON decoder hands us: a
//! field-name → value mapping with no ordering or schema guarantees. It
//! lives just long enough to pass through the validator. A `TeamInput`
//! exists only if every required field was present, numeric where the
//! schema demands it, and inside its documented range.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const FIELD_TEAM_ID: &str = "team_id";
pub const FIELD_CURRENT_STAFF: &str = "current_staff";
pub const FIELD_QUERIES_PER_DAY: &str = "queries_per_day";
pub const FIELD_AVERAGE_QUERY_TIME: &str = "average_query_time";
pub const FIELD_SHIFT_HOURS: &str = "shift_hours";
pub const FIELD_AVAILABLE_CAPACITY: &str = "available_capacity";
pub const FIELD_REMOTE_EFFICIENCY: &str = "remote_infrastructure_efficiency";

/// Every required field, in schema order. Presence checks report the
/// first missing name in this order.
pub const REQUIRED_FIELDS: [&str; 7] = [
    FIELD_TEAM_ID,
    FIELD_CURRENT_STAFF,
    FIELD_QUERIES_PER_DAY,
    FIELD_AVERAGE_QUERY_TIME,
    FIELD_SHIFT_HOURS,
    FIELD_AVAILABLE_CAPACITY,
    FIELD_REMOTE_EFFICIENCY,
];

/// A single raw cell as produced by the upstream decoder.
/// JSON objects yield numbers and strings; CSV yields strings only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

/// One undecoded staffing record. Ephemeral: built by the decoder,
/// consumed once by the validator, then discarded.
pub type RawRecord = BTreeMap<String, RawValue>;

/// A fully validated staffing record. Construction goes through
/// `validator::validate` — every numeric field is finite and in range,
/// so downstream divisors are guaranteed positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamInput {
    pub team_id:                          String,
    pub current_staff:                    f64, // > 0
    pub queries_per_day:                  f64, // >= 0
    pub average_query_time:               f64, // minutes, > 0
    pub shift_hours:                      f64, // > 0
    pub available_capacity:               f64, // percent, (0, 100]
    pub remote_infrastructure_efficiency: f64, // percent, [0, 100]
}
