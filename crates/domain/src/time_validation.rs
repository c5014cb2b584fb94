use chrono::NaiveTime;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeErrorRecord {
    pub start_time_error: Option<String>,
    pub end_time_error: Option<String>,
}

/// Validates that a form's start time is strictly before its end time.
/// Empty or unparsable inputs are not validated and produce no errors.
pub fn get_time_error_message(start_time: &str, end_time: &str) -> TimeErrorRecord {
    let (start, end) = match (
        NaiveTime::parse_from_str(start_time, "%H:%M"),
        NaiveTime::parse_from_str(end_time, "%H:%M"),
    ) {
        (Ok(start), Ok(end)) => (start, end),
        _ => return Default::default(),
    };

    if start >= end {
        return TimeErrorRecord {
            start_time_error: Some("시작 시간은 종료 시간보다 빨라야 합니다.".into()),
            end_time_error: Some("종료 시간은 시작 시간보다 늦어야 합니다.".into()),
        };
    }

    Default::default()
}
