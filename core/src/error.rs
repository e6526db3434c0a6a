//! Per-record error taxonomy.
//!
//! Every variant is recoverable at the record level; none is fatal to a
//! batch. The validator and calculator hand these back as values because
//! malformed records are an expected, frequent case, not an exceptional
//! one. `ComputationFault` is the lone defensive variant: it should be
//! unreachable given validation, and firing it means the validator and
//! calculator disagree about the schema contract.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordError {
    #[error("required field '{field}' is missing")]
    MissingField { field: &'static str },

    #[error("field '{field}' is not coercible to its required type")]
    TypeMismatch { field: &'static str },

    #[error("field '{field}' value {value} is outside the allowed range {allowed}")]
    OutOfRange {
        field:   &'static str,
        value:   f64,
        allowed: &'static str,
    },

    #[error("team_id '{team_id}' already seen earlier in this batch")]
    DuplicateTeamId { team_id: String },

    #[error("computation fault for team '{team_id}': {reason}")]
    ComputationFault { team_id: String, reason: String },
}

pub type RecordResult<T> = Result<T, RecordError>;
