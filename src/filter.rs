use crate::models::{ActivityRecord, FilterCriteria};

/// Returns the records satisfying every set criterion. Unset criteria impose
/// no constraint; date bounds are inclusive on both ends.
pub fn apply(records: &[ActivityRecord], criteria: &FilterCriteria) -> Vec<ActivityRecord> {
    records
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect()
}

fn matches(record: &ActivityRecord, criteria: &FilterCriteria) -> bool {
    if let Some(group) = &criteria.group {
        if record.group != *group {
            return false;
        }
    }
    if let Some(team) = &criteria.team {
        if record.team != *team {
            return false;
        }
    }
    if let Some(start) = criteria.start_day {
        if record.day < start {
            return false;
        }
    }
    if let Some(end) = criteria.end_day {
        if record.day > end {
            return false;
        }
    }
    true
}

pub fn distinct_groups(records: &[ActivityRecord]) -> Vec<String> {
    let mut groups: Vec<String> = records.iter().map(|r| r.group.clone()).collect();
    groups.sort();
    groups.dedup();
    groups
}

pub fn distinct_teams(records: &[ActivityRecord]) -> Vec<String> {
    let mut teams: Vec<String> = records.iter().map(|r| r.team.clone()).collect();
    teams.sort();
    teams.dedup();
    teams
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(group: &str, team: &str, day: &str) -> ActivityRecord {
        let day: NaiveDate = day.parse().unwrap();
        ActivityRecord {
            timestamp: day.and_hms_opt(10, 0, 0).unwrap(),
            team: team.to_string(),
            group: group.to_string(),
            day,
            attendance: 10,
            conversions: 1,
            arena_attendance: 4,
            sunday_attendance: 6,
            offering: 50.0,
        }
    }

    fn sample() -> Vec<ActivityRecord> {
        vec![
            record("Célula A", "Equipe Norte", "2024-05-05"),
            record("Célula B", "Equipe Norte", "2024-05-06"),
            record("Célula C", "Equipe Sul", "2024-05-12"),
        ]
    }

    #[test]
    fn empty_criteria_keeps_everything() {
        let data = sample();
        assert_eq!(apply(&data, &FilterCriteria::default()), data);
    }

    #[test]
    fn criteria_conjoin() {
        let data = sample();
        let criteria = FilterCriteria {
            group: Some("Célula B".to_string()),
            team: Some("Equipe Norte".to_string()),
            ..FilterCriteria::default()
        };

        let filtered = apply(&data, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].group, "Célula B");
    }

    #[test]
    fn chained_filters_equal_combined_criteria() {
        let data = sample();
        let by_group = FilterCriteria {
            group: Some("Célula A".to_string()),
            ..FilterCriteria::default()
        };
        let by_team = FilterCriteria {
            team: Some("Equipe Norte".to_string()),
            ..FilterCriteria::default()
        };
        let combined = FilterCriteria {
            group: Some("Célula A".to_string()),
            team: Some("Equipe Norte".to_string()),
            ..FilterCriteria::default()
        };

        let chained = apply(&apply(&data, &by_group), &by_team);
        let reversed = apply(&apply(&data, &by_team), &by_group);
        assert_eq!(chained, apply(&data, &combined));
        assert_eq!(reversed, apply(&data, &combined));
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let data = sample();
        let criteria = FilterCriteria {
            start_day: Some("2024-05-05".parse().unwrap()),
            end_day: Some("2024-05-06".parse().unwrap()),
            ..FilterCriteria::default()
        };

        let filtered = apply(&data, &criteria);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].day.to_string(), "2024-05-05");
        assert_eq!(filtered[1].day.to_string(), "2024-05-06");
    }

    #[test]
    fn distinct_values_are_sorted_and_deduplicated() {
        let data = vec![
            record("Célula B", "Equipe Sul", "2024-05-05"),
            record("Célula A", "Equipe Norte", "2024-05-06"),
            record("Célula B", "Equipe Norte", "2024-05-12"),
        ];

        assert_eq!(distinct_groups(&data), vec!["Célula A", "Célula B"]);
        assert_eq!(distinct_teams(&data), vec!["Equipe Norte", "Equipe Sul"]);
    }
}
