//! Report rendering — BatchResult to a step-by-step markdown report.
//!
//! Presentation only: every number is recomputed or echoed from the
//! structured result and rounded to two decimals here, never inside the
//! core. Every rejected record in the batch is listed — not just the
//! first.

use std::fmt::Write as _;
use workforce_core::{
    metrics::{
        INVERSE_UTILIZATION_CAP, WEIGHT_CAPACITY_SURPLUS, WEIGHT_INVERSE_UTILIZATION,
        WEIGHT_REMOTE_EFFICIENCY,
    },
    pipeline::{BatchResult, TeamResult},
    recommendation::Recommendation,
};

pub fn render(batch: &BatchResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Workforce Distribution Summary");
    let _ = writeln!(out, "Total Records Received: {}", batch.total_records());
    let _ = writeln!(out, "Teams Evaluated: {}", batch.results.len());
    let _ = writeln!(out, "Records Rejected: {}", batch.rejected.len());
    let _ = writeln!(out);

    if !batch.rejected.is_empty() {
        let _ = writeln!(out, "# Validation Failures");
        for rejected in &batch.rejected {
            let team = rejected.team_id.as_deref().unwrap_or("<unknown team>");
            let _ = writeln!(out, "- Row {} ({team}): {}", rejected.row, rejected.error);
        }
        let _ = writeln!(out, "\nPlease correct the rows above and resubmit.");
        let _ = writeln!(out);
    }

    for result in &batch.results {
        render_team(&mut out, result);
    }

    out
}

fn render_team(out: &mut String, result: &TeamResult) {
    let input = &result.input;
    let m = &result.metrics;

    let _ = writeln!(out, "# Detailed Analysis: Team {}", result.team_id);
    let _ = writeln!(out, "Input Data:");
    let _ = writeln!(out, " - Current Staff: {:.0}", input.current_staff);
    let _ = writeln!(out, " - Queries Per Day: {:.0}", input.queries_per_day);
    let _ = writeln!(out, " - Average Query Time (minutes): {:.2}", input.average_query_time);
    let _ = writeln!(out, " - Shift Hours: {:.2}", input.shift_hours);
    let _ = writeln!(out, " - Available Capacity (%): {:.2}", input.available_capacity);
    let _ = writeln!(
        out,
        " - Remote Infrastructure Efficiency (%): {:.2}",
        input.remote_infrastructure_efficiency
    );
    let _ = writeln!(out);

    // Intermediate steps, recomputed from the validated input so the
    // report can show its working.
    let total_demand = input.queries_per_day * input.average_query_time;
    let shift_minutes = input.shift_hours * 60.0;

    let _ = writeln!(out, "## 1. Workload per Agent");
    let _ = writeln!(out, " - Formula: (queries_per_day x average_query_time) / current_staff");
    let _ = writeln!(
        out,
        " - Step 1: {:.2} x {:.2} = {total_demand:.2}",
        input.queries_per_day, input.average_query_time
    );
    let _ = writeln!(
        out,
        " - Step 2: {total_demand:.2} / {:.2} = {:.2}",
        input.current_staff, m.workload_per_agent
    );
    let _ = writeln!(out, " - Workload per Agent: {:.2} minutes", m.workload_per_agent);
    let _ = writeln!(out);

    let _ = writeln!(out, "## 2. Agent Capacity");
    let _ = writeln!(out, " - Formula: shift_hours x 60 x (available_capacity / 100)");
    let _ = writeln!(out, " - Step 1: {:.2} x 60 = {shift_minutes:.2}", input.shift_hours);
    let _ = writeln!(
        out,
        " - Step 2: {shift_minutes:.2} x ({:.2}/100) = {:.2}",
        input.available_capacity, m.agent_capacity
    );
    let _ = writeln!(out, " - Agent Capacity: {:.2} minutes", m.agent_capacity);
    let _ = writeln!(out);

    let _ = writeln!(out, "## 3. Utilization Rate");
    let _ = writeln!(out, " - Formula: (Workload per Agent / Agent Capacity) x 100");
    let _ = writeln!(
        out,
        " - Step 1: {:.2} / {:.2} = {:.4}",
        m.workload_per_agent,
        m.agent_capacity,
        m.workload_per_agent / m.agent_capacity
    );
    let _ = writeln!(out, " - Utilization Rate: {:.2}%", m.utilization_rate);
    let _ = writeln!(out);

    let surplus = (100.0 - m.utilization_rate).max(0.0);
    let inverse = (100.0 / m.utilization_rate).min(INVERSE_UTILIZATION_CAP);
    let _ = writeln!(out, "## 4. Composite Scheduling Score");
    let _ = writeln!(
        out,
        " - Capacity surplus: max(0, 100 - {:.2}) = {surplus:.2}",
        m.utilization_rate
    );
    let _ = writeln!(
        out,
        " - Weighted surplus: {surplus:.2} x {WEIGHT_CAPACITY_SURPLUS} = {:.2}",
        surplus * WEIGHT_CAPACITY_SURPLUS
    );
    let _ = writeln!(
        out,
        " - Weighted efficiency: {:.2} x {WEIGHT_REMOTE_EFFICIENCY} = {:.2}",
        input.remote_infrastructure_efficiency,
        input.remote_infrastructure_efficiency * WEIGHT_REMOTE_EFFICIENCY
    );
    let _ = writeln!(
        out,
        " - Weighted inverse utilization: {inverse:.2} x {WEIGHT_INVERSE_UTILIZATION} = {:.2}",
        inverse * WEIGHT_INVERSE_UTILIZATION
    );
    let _ = writeln!(out, " - Composite Score (clamped to 0..100): {:.2}", m.composite_score);
    let _ = writeln!(out);

    let _ = writeln!(out, "## 5. Staffing Efficiency");
    let _ = writeln!(
        out,
        " - Required Staff: {total_demand:.2} / {:.2} = {:.2}",
        m.agent_capacity, m.required_staff
    );
    let _ = writeln!(
        out,
        " - Staffing Efficiency Ratio: {:.2} / {:.2} = {:.2}",
        input.current_staff, m.required_staff, m.staffing_efficiency_ratio
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "# Final Recommendation: Team {}", result.team_id);
    let _ = writeln!(out, " - Composite Score: {:.2}", m.composite_score);
    let _ = writeln!(out, " - Utilization Rate: {:.2}%", m.utilization_rate);
    let _ = writeln!(out, " - Staffing Efficiency Ratio: {:.2}", m.staffing_efficiency_ratio);
    let _ = writeln!(out, " - Status: {}", status_label(result.recommendation));
    let _ = writeln!(out, " - Recommended Action: {}", action_text(result));
    let _ = writeln!(out);
}

fn status_label(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::Maintain => "Optimal",
        Recommendation::NeedsAdjustment => "Needs Adjustment",
    }
}

fn action_text(result: &TeamResult) -> String {
    let m = &result.metrics;
    match result.recommendation {
        Recommendation::Maintain => format!(
            "Based on a Composite Score of {:.2}, a Staffing Efficiency Ratio of {:.2}, \
             and a Utilization Rate of {:.2}%, the team's scheduling is optimal. \
             Maintain the current workforce distribution.",
            m.composite_score, m.staffing_efficiency_ratio, m.utilization_rate
        ),
        Recommendation::NeedsAdjustment => format!(
            "Based on a Composite Score of {:.2}, a Staffing Efficiency Ratio of {:.2}, \
             and a Utilization Rate of {:.2}%, the team's scheduling requires adjustments. \
             Consider reassigning workforce, adjusting shift timings, or enhancing \
             remote infrastructure.",
            m.composite_score, m.staffing_efficiency_ratio, m.utilization_rate
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workforce_core::pipeline;
    use workforce_core::record::{RawRecord, RawValue};

    fn record(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), RawValue::Text(v.to_string())))
            .collect()
    }

    fn omega() -> RawRecord {
        record(&[
            ("team_id", "TeamOmega"),
            ("current_staff", "10"),
            ("queries_per_day", "150"),
            ("average_query_time", "3.0"),
            ("shift_hours", "8"),
            ("available_capacity", "70"),
            ("remote_infrastructure_efficiency", "80"),
        ])
    }

    #[test]
    fn report_names_every_rejected_record() {
        let mut bad_a = omega();
        bad_a.insert("team_id".into(), RawValue::Text("BadA".into()));
        bad_a.remove("shift_hours");
        let mut bad_b = omega();
        bad_b.insert("team_id".into(), RawValue::Text("BadB".into()));
        bad_b.insert("available_capacity".into(), RawValue::Text("0".into()));

        let batch = pipeline::run(&[omega(), bad_a, bad_b]);
        let text = render(&batch);

        assert!(text.contains("Records Rejected: 2"));
        assert!(text.contains("Row 2 (BadA)"), "first rejection missing:\n{text}");
        assert!(text.contains("Row 3 (BadB)"), "second rejection missing:\n{text}");
    }

    #[test]
    fn report_shows_worked_example_figures() {
        let batch = pipeline::run(&[omega()]);
        let text = render(&batch);

        assert!(text.contains("Workload per Agent: 45.00 minutes"), "{text}");
        assert!(text.contains("Agent Capacity: 336.00 minutes"), "{text}");
        assert!(text.contains("Utilization Rate: 13.39%"), "{text}");
        assert!(text.contains("Status: Needs Adjustment"), "{text}");
    }

    #[test]
    fn empty_batch_renders_a_summary_only() {
        let text = render(&pipeline::run(&[]));
        assert!(text.contains("Teams Evaluated: 0"));
        assert!(!text.contains("Validation Failures"));
    }
}
