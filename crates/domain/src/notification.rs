use crate::{overlap::parse_date_time, Event};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A fired reminder that stays visible until the user dismisses it
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    /// The `Event` this `Notification` was created for
    pub id: String,
    pub message: String,
}

/// Notification offsets, in minutes, that can be selected for an `Event`
pub const NOTIFICATION_OPTIONS: [(u32, &str); 5] = [
    (1, "1분 전"),
    (10, "10분 전"),
    (60, "1시간 전"),
    (120, "2시간 전"),
    (1440, "1일 전"),
];

pub fn notification_label(minutes: u32) -> Option<&'static str> {
    NOTIFICATION_OPTIONS
        .iter()
        .find(|(value, _)| *value == minutes)
        .map(|(_, label)| *label)
}

/// Events that are inside their notification window at `now` and have not
/// been notified about yet.
pub fn get_upcoming_events<'a>(
    events: &'a [Event],
    now: NaiveDateTime,
    notified_ids: &HashSet<String>,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| !notified_ids.contains(&event.id))
        .filter(|event| {
            let start = match parse_date_time(&event.date, &event.start_time).as_datetime() {
                Some(start) => start,
                None => return false,
            };
            let millis_to_start = (start - now).num_milliseconds();
            let window = event.notification_time as i64 * 60 * 1000;
            millis_to_start >= 0 && millis_to_start <= window
        })
        .collect()
}

pub fn create_notification_message(event: &Event) -> String {
    format!(
        "{}분 후 {} 일정이 시작됩니다.",
        event.notification_time, event.title
    )
}
