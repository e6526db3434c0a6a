//! Pipeline orchestrator — validate, compute, decide, accumulate.
//!
//! RULES:
//!   - One ordered pass over the batch; output order matches input order.
//!   - One bad record never aborts the batch: rejections and results
//!     coexist in the same `BatchResult`.
//!   - `team_id` uniqueness is enforced here — it is the only check that
//!     needs cross-record state.
//!   - No I/O and no retries: every failure is input-driven and
//!     permanent.

use crate::{
    error::RecordError,
    metrics::{self, TeamMetrics},
    record::{RawRecord, RawValue, TeamInput, FIELD_TEAM_ID},
    recommendation::{self, Recommendation},
    validator,
};
use serde::Serialize;
use std::collections::HashSet;

/// One successfully processed team: the validated input it was built
/// from, its derived metrics, and the staffing decision. Immutable once
/// appended to a `BatchResult`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamResult {
    pub team_id:        String,
    pub input:          TeamInput,
    pub metrics:        TeamMetrics,
    pub recommendation: Recommendation,
}

/// One rejected record, with enough context for the report layer to name
/// it: its 1-based input row, the team_id when one was readable, and the
/// reason it was turned away.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRecord {
    pub row:     usize,
    pub team_id: Option<String>,
    pub error:   RecordError,
}

/// The outcome of one pipeline invocation. Built once, returned, never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchResult {
    pub results:  Vec<TeamResult>,
    pub rejected: Vec<RejectedRecord>,
}

impl BatchResult {
    pub fn total_records(&self) -> usize {
        self.results.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.rejected.is_empty()
    }
}

/// Run a batch of raw records through validate → compute → decide.
///
/// Processes every record to completion regardless of earlier failures.
/// An empty batch is valid and yields an empty result.
pub fn run(batch: &[RawRecord]) -> BatchResult {
    let mut out = BatchResult::default();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for (index, raw) in batch.iter().enumerate() {
        let row = index + 1;

        let input = match validator::validate(raw) {
            Ok(input) => input,
            Err(error) => {
                log::debug!("row={row} rejected: {error}");
                out.rejected.push(RejectedRecord {
                    row,
                    team_id: readable_team_id(raw),
                    error,
                });
                continue;
            }
        };

        // Only records that survived validation claim their team_id.
        if !seen_ids.insert(input.team_id.clone()) {
            let error = RecordError::DuplicateTeamId {
                team_id: input.team_id.clone(),
            };
            log::debug!("row={row} rejected: {error}");
            out.rejected.push(RejectedRecord {
                row,
                team_id: Some(input.team_id),
                error,
            });
            continue;
        }

        let team_metrics = match metrics::compute(&input) {
            Ok(m) => m,
            Err(error) => {
                // Validator and calculator disagree about the schema
                // contract — worth shouting about.
                log::error!("row={row} {error}");
                out.rejected.push(RejectedRecord {
                    row,
                    team_id: Some(input.team_id.clone()),
                    error,
                });
                continue;
            }
        };

        let recommendation = recommendation::decide(&team_metrics);
        out.results.push(TeamResult {
            team_id: input.team_id.clone(),
            input,
            metrics: team_metrics,
            recommendation,
        });
    }

    log::info!(
        "batch complete: {} records in, {} teams scored, {} rejected",
        batch.len(),
        out.results.len(),
        out.rejected.len()
    );
    out
}

/// Best-effort team_id extraction for rejected-record diagnostics.
fn readable_team_id(raw: &RawRecord) -> Option<String> {
    match raw.get(FIELD_TEAM_ID) {
        Some(RawValue::Text(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}
