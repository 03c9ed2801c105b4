use std::fmt::Write;

use crate::models::{FilterCriteria, SeriesPoint, SummaryStats};

pub fn build_report(
    criteria: &FilterCriteria,
    stats: Option<&SummaryStats>,
    series: &[SeriesPoint],
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Retro-Célula Report");
    let _ = writeln!(output, "Scope: {}", describe_scope(criteria));
    let _ = writeln!(output);
    let _ = writeln!(output, "## Summary");

    match stats {
        None => {
            let _ = writeln!(output, "No reports match the selected filters.");
        }
        Some(stats) => {
            let _ = writeln!(output, "- Meetings: {}", stats.meetings);
            let _ = writeln!(output, "- Total attendance: {}", stats.total_attendance);
            let _ = writeln!(output, "- Mean attendance: {:.1}", stats.mean_attendance);
            let _ = writeln!(
                output,
                "- Max / min attendance: {} / {}",
                stats.max_attendance, stats.min_attendance
            );
            let _ = writeln!(output, "- Conversions: {}", stats.total_conversions);
            let _ = writeln!(output, "- Arena attendance: {}", stats.total_arena);
            let _ = writeln!(output, "- Sunday attendance: {}", stats.total_sunday);
            let _ = writeln!(output, "- Offering: R$ {:.2}", stats.total_offering);
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Chart Series");

    if series.is_empty() {
        let _ = writeln!(output, "No points to chart.");
    } else {
        let _ = writeln!(output, "| Date | Attendance | Conversions | Arena | Sunday |");
        let _ = writeln!(output, "|------|------------|-------------|-------|--------|");
        for point in series {
            let _ = writeln!(
                output,
                "| {} | {} | {} | {} | {} |",
                point.label, point.attendance, point.conversions, point.arena, point.sunday
            );
        }
    }

    output
}

fn describe_scope(criteria: &FilterCriteria) -> String {
    let mut parts = Vec::new();
    if let Some(group) = &criteria.group {
        parts.push(format!("célula {group}"));
    }
    if let Some(team) = &criteria.team {
        parts.push(format!("equipe {team}"));
    }
    if let Some(start) = criteria.start_day {
        parts.push(format!("from {start}"));
    }
    if let Some(end) = criteria.end_day {
        parts.push(format!("to {end}"));
    }

    if parts.is_empty() {
        "all reports".to_string()
    } else {
        parts.join(", ")
    }
}
