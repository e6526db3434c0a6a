//! Record validator — the schema gate between decoder output and the
//! calculator.
//!
//! RULES:
//!   - Checks run in a fixed order: field presence, then type coercion,
//!     then range constraints. The first failing check names the
//!     offending field and validation stops for that record.
//!   - Pure and total: every `RawRecord` maps to a `TeamInput` or a
//!     `RecordError`. Nothing here panics on malformed input.
//!   - `team_id` uniqueness is cross-record state and belongs to the
//!     pipeline, not this module.

use crate::{
    error::{RecordError, RecordResult},
    record::{
        RawRecord, RawValue, TeamInput, FIELD_AVAILABLE_CAPACITY, FIELD_AVERAGE_QUERY_TIME,
        FIELD_CURRENT_STAFF, FIELD_QUERIES_PER_DAY, FIELD_REMOTE_EFFICIENCY, FIELD_SHIFT_HOURS,
        FIELD_TEAM_ID, REQUIRED_FIELDS,
    },
};

/// Range constraints from the schema table.
#[derive(Debug, Clone, Copy)]
enum Bound {
    Positive,       // > 0
    NonNegative,    // >= 0
    PercentOpenLow, // (0, 100]
    PercentClosed,  // [0, 100]
}

impl Bound {
    fn allows(self, value: f64) -> bool {
        match self {
            Bound::Positive       => value > 0.0,
            Bound::NonNegative    => value >= 0.0,
            Bound::PercentOpenLow => value > 0.0 && value <= 100.0,
            Bound::PercentClosed  => (0.0..=100.0).contains(&value),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Bound::Positive       => "> 0",
            Bound::NonNegative    => ">= 0",
            Bound::PercentOpenLow => "(0,100]",
            Bound::PercentClosed  => "[0,100]",
        }
    }
}

/// Numeric fields in schema order, paired with their range constraint.
const NUMERIC_SCHEMA: [(&str, Bound); 6] = [
    (FIELD_CURRENT_STAFF,      Bound::Positive),
    (FIELD_QUERIES_PER_DAY,    Bound::NonNegative),
    (FIELD_AVERAGE_QUERY_TIME, Bound::Positive),
    (FIELD_SHIFT_HOURS,        Bound::Positive),
    (FIELD_AVAILABLE_CAPACITY, Bound::PercentOpenLow),
    (FIELD_REMOTE_EFFICIENCY,  Bound::PercentClosed),
];

/// Validate one raw record against the staffing schema.
///
/// Returns the validated `TeamInput`, or the first `RecordError`
/// encountered in presence → type → range order.
pub fn validate(raw: &RawRecord) -> RecordResult<TeamInput> {
    for field in REQUIRED_FIELDS {
        if !raw.contains_key(field) {
            return Err(RecordError::MissingField { field });
        }
    }

    let team_id = text(raw, FIELD_TEAM_ID)?;

    // Coerce every numeric field before range-checking any of them, so a
    // type failure anywhere outranks a range failure everywhere.
    let mut values = [0.0f64; 6];
    for (slot, (field, _)) in values.iter_mut().zip(NUMERIC_SCHEMA) {
        *slot = numeric(raw, field)?;
    }
    for (&value, (field, bound)) in values.iter().zip(NUMERIC_SCHEMA) {
        if !bound.allows(value) {
            return Err(RecordError::OutOfRange {
                field,
                value,
                allowed: bound.describe(),
            });
        }
    }

    let [current_staff, queries_per_day, average_query_time, shift_hours, available_capacity, remote_infrastructure_efficiency] =
        values;

    Ok(TeamInput {
        team_id,
        current_staff,
        queries_per_day,
        average_query_time,
        shift_hours,
        available_capacity,
        remote_infrastructure_efficiency,
    })
}

/// Coerce a field to non-empty text. A numeric or blank team identifier
/// fails to meet the text type the schema requires.
fn text(raw: &RawRecord, field: &'static str) -> RecordResult<String> {
    match raw.get(field) {
        Some(RawValue::Text(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(_) => Err(RecordError::TypeMismatch { field }),
        None => Err(RecordError::MissingField { field }),
    }
}

/// Coerce a field to a finite real number. Text cells (the only thing CSV
/// produces) are trimmed and parsed; NaN and infinities never validate.
fn numeric(raw: &RawRecord, field: &'static str) -> RecordResult<f64> {
    match raw.get(field) {
        Some(RawValue::Number(n)) if n.is_finite() => Ok(*n),
        Some(RawValue::Text(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or(RecordError::TypeMismatch { field }),
        Some(_) => Err(RecordError::TypeMismatch { field }),
        None => Err(RecordError::MissingField { field }),
    }
}
