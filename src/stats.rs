use crate::models::{ActivityRecord, SummaryStats};

/// Reduces a filtered record set into summary statistics. Returns `None` for
/// an empty set; every aggregate is recomputed in full on each call, which is
/// fine at weekly-report volumes.
pub fn summarize(records: &[ActivityRecord]) -> Option<SummaryStats> {
    if records.is_empty() {
        return None;
    }

    let meetings = records.len();
    let total_attendance: i64 = records.iter().map(|r| r.attendance).sum();

    Some(SummaryStats {
        total_attendance,
        mean_attendance: round_one_decimal(total_attendance as f64 / meetings as f64),
        max_attendance: records.iter().map(|r| r.attendance).max().unwrap_or(0),
        min_attendance: records.iter().map(|r| r.attendance).min().unwrap_or(0),
        total_conversions: records.iter().map(|r| r.conversions).sum(),
        total_arena: records.iter().map(|r| r.arena_attendance).sum(),
        total_sunday: records.iter().map(|r| r.sunday_attendance).sum(),
        total_offering: records.iter().map(|r| r.offering).sum(),
        meetings,
    })
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: &str, attendance: i64) -> ActivityRecord {
        let day: NaiveDate = day.parse().unwrap();
        ActivityRecord {
            timestamp: day.and_hms_opt(10, 0, 0).unwrap(),
            team: "Equipe Norte".to_string(),
            group: "Célula A".to_string(),
            day,
            attendance,
            conversions: 2,
            arena_attendance: 3,
            sunday_attendance: 4,
            offering: 25.5,
        }
    }

    #[test]
    fn empty_set_has_no_stats() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn single_record_collapses_to_its_attendance() {
        let stats = summarize(&[record("2024-05-05", 12)]).unwrap();
        assert_eq!(stats.mean_attendance, 12.0);
        assert_eq!(stats.max_attendance, 12);
        assert_eq!(stats.min_attendance, 12);
        assert_eq!(stats.meetings, 1);
    }

    #[test]
    fn totals_and_mean_across_records() {
        let data = vec![
            record("2024-05-05", 10),
            record("2024-05-06", 15),
            record("2024-05-07", 8),
        ];

        let stats = summarize(&data).unwrap();
        assert_eq!(stats.total_attendance, 33);
        assert_eq!(stats.mean_attendance, 11.0);
        assert_eq!(stats.max_attendance, 15);
        assert_eq!(stats.min_attendance, 8);
        assert_eq!(stats.total_conversions, 6);
        assert_eq!(stats.total_arena, 9);
        assert_eq!(stats.total_sunday, 12);
        assert!((stats.total_offering - 76.5).abs() < 1e-9);
        assert_eq!(stats.meetings, 3);
    }

    #[test]
    fn mean_rounds_to_one_decimal() {
        let data = vec![record("2024-05-05", 10), record("2024-05-06", 15)];
        let stats = summarize(&data).unwrap();
        assert_eq!(stats.mean_attendance, 12.5);

        let data = vec![
            record("2024-05-05", 10),
            record("2024-05-06", 10),
            record("2024-05-07", 11),
        ];
        let stats = summarize(&data).unwrap();
        assert_eq!(stats.mean_attendance, 10.3);
    }
}
