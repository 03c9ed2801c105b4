use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::{ActivityRecord, RawRow};

/// Sentinel used when a row carries no team answer.
pub const NO_TEAM: &str = "Sem equipe";

/// Wall-clock formats seen in form exports, tried in order after RFC 3339.
/// Day/month comes before month/day because the export locale is pt-BR.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Collapses raw export rows into one record per (group, day), keeping the
/// latest submission for each pair, sorted ascending by day.
///
/// Malformed rows never error: numeric noise defaults to zero, and rows that
/// cannot be keyed (no group, no usable timestamp) are dropped. Spreadsheet
/// exports are messy and a partial dataset beats none.
pub fn normalize(rows: &[RawRow]) -> Vec<ActivityRecord> {
    let mut latest: HashMap<(String, NaiveDate), ActivityRecord> = HashMap::new();

    for row in rows {
        let group = match row.group.as_deref().map(str::trim) {
            Some(group) if !group.is_empty() => group,
            _ => continue,
        };
        let timestamp = match row.timestamp.as_deref().and_then(parse_timestamp) {
            Some(timestamp) => timestamp,
            None => continue,
        };
        let team = row
            .team
            .as_deref()
            .filter(|team| !team.is_empty())
            .unwrap_or(NO_TEAM);

        let record = ActivityRecord {
            timestamp,
            team: team.to_string(),
            group: group.to_string(),
            day: timestamp.date(),
            attendance: parse_count(row.attendance.as_deref()),
            conversions: parse_count(row.conversions.as_deref()),
            arena_attendance: parse_count(row.arena_attendance.as_deref()),
            sunday_attendance: parse_count(row.sunday_attendance.as_deref()),
            offering: parse_amount(row.offering.as_deref()),
        };

        match latest.entry((record.group.clone(), record.day)) {
            Entry::Occupied(mut slot) => {
                if record.timestamp > slot.get().timestamp {
                    slot.insert(record);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
        }
    }

    let mut records: Vec<ActivityRecord> = latest.into_values().collect();
    records.sort_by(|a, b| a.day.cmp(&b.day).then_with(|| a.group.cmp(&b.group)));
    records
}

/// Parses a submission timestamp keeping its wall-clock components. An
/// explicit UTC offset is dropped, not applied: the day the reporter saw is
/// the day we key on, even when the UTC instant crosses midnight.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.naive_local());
    }
    for format in TIMESTAMP_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(timestamp);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
}

fn parse_count(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else { return 0 };
    let raw = raw.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().map(|value| value.trunc() as i64))
        .unwrap_or(0)
        .max(0)
}

fn parse_amount(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else { return 0.0 };
    let raw = raw.trim();
    // The form asks for "75.50" but pt-BR hands type "75,50" anyway.
    let normalized = if raw.contains(',') && !raw.contains('.') {
        raw.replace(',', ".")
    } else {
        raw.to_string()
    };
    normalized.parse::<f64>().unwrap_or(0.0).max(0.0)
}
