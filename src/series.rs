use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::filter;
use crate::models::{ActivityRecord, ChartPolicy, SeriesPoint};

const LABEL_FORMAT: &str = "%d/%m";

/// Builds the chart-ready series for a filtered record set.
///
/// More than one distinct group always aggregates by week: daily cadence
/// varies by group, so cross-group comparison only reads at week granularity.
/// A single group charts one point per record up to `max_raw_points`, then
/// also falls back to weekly sums.
pub fn build_series(records: &[ActivityRecord], policy: &ChartPolicy) -> Vec<SeriesPoint> {
    if records.is_empty() {
        return Vec::new();
    }

    if filter::distinct_groups(records).len() > 1 || records.len() > policy.max_raw_points {
        return aggregate_by_week(records, policy);
    }

    records
        .iter()
        .map(|record| SeriesPoint {
            label: record.day.format(LABEL_FORMAT).to_string(),
            attendance: record.attendance,
            conversions: record.conversions,
            arena: record.arena_attendance,
            sunday: record.sunday_attendance,
        })
        .collect()
}

/// Start of the charting week containing `day`.
pub fn week_start(day: NaiveDate, policy: &ChartPolicy) -> NaiveDate {
    day.week(policy.week_anchor).first_day()
}

fn aggregate_by_week(records: &[ActivityRecord], policy: &ChartPolicy) -> Vec<SeriesPoint> {
    #[derive(Default)]
    struct WeekTotals {
        attendance: i64,
        conversions: i64,
        arena: i64,
        sunday: i64,
    }

    let mut weeks: BTreeMap<NaiveDate, WeekTotals> = BTreeMap::new();
    for record in records {
        let totals = weeks.entry(week_start(record.day, policy)).or_default();
        totals.attendance += record.attendance;
        totals.conversions += record.conversions;
        totals.arena += record.arena_attendance;
        totals.sunday += record.sunday_attendance;
    }

    weeks
        .into_iter()
        .map(|(start, totals)| SeriesPoint {
            label: start.format(LABEL_FORMAT).to_string(),
            attendance: totals.attendance,
            conversions: totals.conversions,
            arena: totals.arena,
            sunday: totals.sunday,
        })
        .collect()
}
