use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// One row of the weekly report CSV export, keyed by the exact question text
/// used as column headers. All fields are raw strings; parsing and defaulting
/// happen in the normalizer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Timestamp", default)]
    pub timestamp: Option<String>,
    #[serde(rename = "Identifique sua equipe 🧑‍🧑‍🧒‍🧒", default)]
    pub team: Option<String>,
    #[serde(rename = "Identifique sua célula 🏡", default)]
    pub group: Option<String>,
    #[serde(rename = "Quantas pessoas participaram da célula nesta semana?", default)]
    pub attendance: Option<String>,
    #[serde(rename = "Quantas conversões nesta semana em sua célula?", default)]
    pub conversions: Option<String>,
    #[serde(
        rename = "Qual foi a arregimentação de sua célula no Arena dessa semana?",
        default
    )]
    pub arena_attendance: Option<String>,
    #[serde(
        rename = "Qual foi a arregimentação de sua célula no Culto de Domingo dessa semana?",
        default
    )]
    pub sunday_attendance: Option<String>,
    #[serde(
        rename = "Parceiros de Deus arrecadados na célula dessa semana? 💰\n(Escreva o valor em Reais conforme o exemplo: 75.50)",
        default
    )]
    pub offering: Option<String>,
}

/// One confirmed report for a célula on a calendar day. At most one record
/// exists per (group, day); the normalizer keeps the latest submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRecord {
    /// Submission instant, kept only for last-write-wins tie-breaking.
    pub timestamp: NaiveDateTime,
    pub team: String,
    pub group: String,
    /// Calendar day in the reporter's local wall-clock terms.
    pub day: NaiveDate,
    pub attendance: i64,
    pub conversions: i64,
    pub arena_attendance: i64,
    pub sunday_attendance: i64,
    pub offering: f64,
}

/// Caller-supplied view criteria. Unset fields impose no constraint;
/// date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub group: Option<String>,
    pub team: Option<String>,
    pub start_day: Option<NaiveDate>,
    pub end_day: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_attendance: i64,
    /// Mean attendance per meeting, rounded to one decimal for display.
    pub mean_attendance: f64,
    pub max_attendance: i64,
    pub min_attendance: i64,
    pub total_conversions: i64,
    pub total_arena: i64,
    pub total_sunday: i64,
    pub total_offering: f64,
    pub meetings: usize,
}

/// One charted x-axis position: a single day or a whole week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Display label, day/month.
    pub label: String,
    pub attendance: i64,
    pub conversions: i64,
    pub arena: i64,
    pub sunday: i64,
}

/// Policy knobs for the time-series builder.
#[derive(Debug, Clone)]
pub struct ChartPolicy {
    /// Above this many points a single-group view falls back to weekly sums.
    pub max_raw_points: usize,
    /// First day of the charting week.
    pub week_anchor: Weekday,
}

impl Default for ChartPolicy {
    fn default() -> Self {
        Self {
            max_raw_points: 50,
            week_anchor: Weekday::Sun,
        }
    }
}
