//! Orchestrator tests: batch resilience, ordering, and duplicate
//! detection.
//!
//! The contract under test: one bad record never aborts a batch, and a
//! batch of N valid + M invalid records yields exactly N results and M
//! rejections, in input order.

use workforce_core::error::RecordError;
use workforce_core::pipeline::run;
use workforce_core::record::{RawRecord, RawValue};
use workforce_core::recommendation::Recommendation;

fn text(s: &str) -> RawValue {
    RawValue::Text(s.to_string())
}

/// A valid team record built from CSV-style text cells.
fn team(id: &str, staff: &str, queries: &str) -> RawRecord {
    [
        ("team_id", text(id)),
        ("current_staff", text(staff)),
        ("queries_per_day", text(queries)),
        ("average_query_time", text("3.0")),
        ("shift_hours", text("8")),
        ("available_capacity", text("70")),
        ("remote_infrastructure_efficiency", text("80")),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

#[test]
fn empty_batch_is_valid_and_empty() {
    let batch = run(&[]);
    assert!(batch.is_empty());
    assert_eq!(batch.total_records(), 0);
}

#[test]
fn mixed_batch_processes_to_completion_in_order() {
    let broken = team("TeamBeta", "ten", "100"); // TypeMismatch
    let mut truncated = team("TeamDelta", "5", "100"); // MissingField
    truncated.remove("shift_hours");

    let records = vec![
        team("TeamAlpha", "10", "150"),
        broken,
        team("TeamGamma", "4", "500"),
        truncated,
        team("TeamEpsilon", "6", "300"),
    ];
    let batch = run(&records);

    assert_eq!(batch.results.len(), 3, "three valid records");
    assert_eq!(batch.rejected.len(), 2, "two invalid records");
    assert_eq!(batch.total_records(), 5);

    // Results keep input order.
    let ids: Vec<&str> = batch.results.iter().map(|r| r.team_id.as_str()).collect();
    assert_eq!(ids, ["TeamAlpha", "TeamGamma", "TeamEpsilon"]);

    // Rejections keep input order and carry 1-based rows.
    assert_eq!(batch.rejected[0].row, 2);
    assert_eq!(batch.rejected[0].team_id.as_deref(), Some("TeamBeta"));
    assert_eq!(batch.rejected[1].row, 4);
    assert_eq!(
        batch.rejected[1].error,
        RecordError::MissingField { field: "shift_hours" }
    );
}

/// Duplicate team_id: exactly one result, and a DuplicateTeamId for the
/// second occurrence.
#[test]
fn duplicate_team_id_rejects_the_second_occurrence() {
    let records = vec![
        team("TeamOmega", "10", "150"),
        team("TeamOmega", "4", "500"),
    ];
    let batch = run(&records);

    assert_eq!(batch.results.len(), 1);
    assert_eq!(batch.results[0].team_id, "TeamOmega");
    // The surviving result is the FIRST occurrence.
    assert_eq!(batch.results[0].input.current_staff, 10.0);

    assert_eq!(batch.rejected.len(), 1);
    assert_eq!(batch.rejected[0].row, 2);
    assert_eq!(
        batch.rejected[0].error,
        RecordError::DuplicateTeamId { team_id: "TeamOmega".into() }
    );
}

#[test]
fn triple_duplicate_rejects_both_later_occurrences() {
    let records = vec![
        team("TeamOmega", "10", "150"),
        team("TeamOmega", "4", "500"),
        team("TeamOmega", "6", "300"),
    ];
    let batch = run(&records);
    assert_eq!(batch.results.len(), 1);
    assert_eq!(batch.rejected.len(), 2);
}

/// An invalid record does not claim its team_id — a later valid record
/// with the same id still gets scored.
#[test]
fn rejected_record_does_not_reserve_its_team_id() {
    let invalid = team("TeamOmega", "0", "150"); // staff out of range
    let batch = run(&[invalid, team("TeamOmega", "10", "150")]);
    assert_eq!(batch.results.len(), 1);
    assert_eq!(batch.rejected.len(), 1);
    assert!(matches!(
        batch.rejected[0].error,
        RecordError::OutOfRange { field: "current_staff", .. }
    ));
}

/// End to end: TeamOmega flows through validate → compute → decide and
/// lands on NeedsAdjustment via its efficiency ratio.
#[test]
fn worked_example_end_to_end() {
    let batch = run(&[team("TeamOmega", "10", "150")]);
    assert_eq!(batch.results.len(), 1);

    let result = &batch.results[0];
    assert!((result.metrics.workload_per_agent - 45.0).abs() < 1e-9);
    assert!((result.metrics.agent_capacity - 336.0).abs() < 1e-9);
    assert!((result.metrics.utilization_rate - 13.392857142857142).abs() < 1e-6);
    assert!(result.metrics.staffing_efficiency_ratio > 1.1, "overstaffed");
    assert_eq!(result.recommendation, Recommendation::NeedsAdjustment);
}

/// Two invocations over the same batch produce identical output — the
/// pipeline holds no hidden state.
#[test]
fn pipeline_is_deterministic() {
    let records = vec![
        team("TeamAlpha", "10", "150"),
        team("TeamGamma", "4", "500"),
    ];
    assert_eq!(run(&records), run(&records));
}

/// The batch result is what downstream renderers consume; its JSON shape
/// must carry tagged error kinds and snake_case recommendations.
#[test]
fn batch_result_serializes_for_downstream_consumers() {
    let mut truncated = team("TeamDelta", "5", "100");
    truncated.remove("shift_hours");

    let batch = run(&[team("TeamAlpha", "10", "150"), truncated]);
    let json = serde_json::to_value(&batch).expect("batch serializes");

    assert_eq!(
        json["results"][0]["recommendation"],
        serde_json::json!("needs_adjustment")
    );
    assert_eq!(
        json["rejected"][0]["error"]["kind"],
        serde_json::json!("missing_field")
    );
    assert_eq!(
        json["rejected"][0]["error"]["field"],
        serde_json::json!("shift_hours")
    );
}

#[test]
fn unreadable_team_id_leaves_diagnostic_blank() {
    let mut nameless = team("x", "10", "150");
    nameless.remove("team_id");

    let batch = run(&[nameless]);
    assert_eq!(batch.rejected.len(), 1);
    assert_eq!(batch.rejected[0].team_id, None);
    assert_eq!(
        batch.rejected[0].error,
        RecordError::MissingField { field: "team_id" }
    );
}
