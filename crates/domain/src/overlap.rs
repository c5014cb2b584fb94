use crate::{date::parse_date, Event};
use chrono::prelude::*;
use std::cmp::Ordering;

/// A date and time parsed from the strings of an `Event`.
///
/// Parsing never fails loudly, malformed input becomes `Invalid` instead.
/// Comparisons involving an `Invalid` value are always false, the same way
/// they are for `NaN`, so range checks stay total functions.
#[derive(Debug, Clone, Copy)]
pub enum EventDateTime {
    Valid(NaiveDateTime),
    Invalid,
}

impl EventDateTime {
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Valid(datetime) => Some(*datetime),
            Self::Invalid => None,
        }
    }
}

impl PartialEq for EventDateTime {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Valid(a), Self::Valid(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for EventDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Valid(a), Self::Valid(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventDateRange {
    pub start: EventDateTime,
    pub end: EventDateTime,
}

/// Accepts `HH:MM` and `HH:MM:SS`
fn parse_time(timestr: &str) -> Option<NaiveTime> {
    let parts = timestr.split(':').collect::<Vec<_>>();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }
    if !parts
        .iter()
        .all(|part| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let hour = parts[0].parse().ok()?;
    let minute = parts[1].parse().ok()?;
    let second = match parts.get(2) {
        Some(second) => second.parse().ok()?,
        None => 0,
    };
    NaiveTime::from_hms_opt(hour, minute, second)
}

pub fn parse_date_time(datestr: &str, timestr: &str) -> EventDateTime {
    match (parse_date(datestr), parse_time(timestr)) {
        (Some(date), Some(time)) => EventDateTime::Valid(date.and_time(time)),
        _ => EventDateTime::Invalid,
    }
}

pub fn is_valid_date(datetime: &EventDateTime) -> bool {
    matches!(datetime, EventDateTime::Valid(_))
}

/// Both bounds are `Invalid` as soon as one of them fails to parse
pub fn convert_event_to_date_range(event: &Event) -> EventDateRange {
    let start = parse_date_time(&event.date, &event.start_time);
    let end = parse_date_time(&event.date, &event.end_time);
    if is_valid_date(&start) && is_valid_date(&end) {
        EventDateRange { start, end }
    } else {
        EventDateRange {
            start: EventDateTime::Invalid,
            end: EventDateTime::Invalid,
        }
    }
}

pub fn is_overlapping(event1: &Event, event2: &Event) -> bool {
    let range1 = convert_event_to_date_range(event1);
    let range2 = convert_event_to_date_range(event2);
    range1.start < range2.end && range2.start < range1.end
}

/// The events in `existing_events` that overlap `new_event`, in their input
/// order. Events sharing the id of `new_event` are the event itself being
/// edited and are skipped.
pub fn find_overlapping_events<'a>(new_event: &Event, existing_events: &'a [Event]) -> Vec<&'a Event> {
    existing_events
        .iter()
        .filter(|event| event.id != new_event.id && is_overlapping(event, new_event))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{EventForm, RepeatInfo};

    fn event(id: &str, date: &str, start_time: &str, end_time: &str) -> Event {
        EventForm {
            title: format!("이벤트 {}", id),
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            repeat: RepeatInfo::none(),
            notification_time: 10,
            ..Default::default()
        }
        .into_event(id.into())
    }

    #[test]
    fn it_parses_valid_date_time() {
        let parsed = parse_date_time("2024-07-01", "14:30");
        assert!(is_valid_date(&parsed));

        let datetime = parsed.as_datetime().unwrap();
        assert_eq!(datetime.year(), 2024);
        assert_eq!(datetime.month(), 7);
        assert_eq!(datetime.day(), 1);
        assert_eq!(datetime.hour(), 14);
        assert_eq!(datetime.minute(), 30);

        let with_seconds = parse_date_time("2024-10-15", "08:50:00");
        assert!(is_valid_date(&with_seconds));
    }

    #[test]
    fn it_returns_invalid_for_malformed_input() {
        let invalid = vec![
            ("2024-13-01", "14:30"),
            ("2024-12-22", "77:77"),
            ("", "77:77"),
            ("2024-11-01", ""),
            ("2024-11-01", "24:01"),
            ("2024-11-01", "9:00"),
            ("2023-02-29", "10:00"),
        ];
        for (date, time) in invalid {
            assert!(
                !is_valid_date(&parse_date_time(date, time)),
                "{} {}",
                date,
                time
            );
        }
    }

    #[test]
    fn invalid_date_times_never_compare() {
        let valid = parse_date_time("2024-07-01", "14:30");
        let invalid = EventDateTime::Invalid;

        assert!(!(invalid < valid));
        assert!(!(invalid > valid));
        assert!(!(invalid <= valid));
        assert!(!(valid >= invalid));
        assert!(invalid != EventDateTime::Invalid);
        assert!(valid == parse_date_time("2024-07-01", "14:30"));
    }

    #[test]
    fn it_converts_event_to_date_range() {
        let range = convert_event_to_date_range(&event("1", "2024-10-15", "09:00", "10:00"));
        assert!(is_valid_date(&range.start));
        assert!(is_valid_date(&range.end));
        assert!(range.start < range.end);
    }

    #[test]
    fn it_propagates_invalid_ranges() {
        let bad_date = convert_event_to_date_range(&event("1", "2024-11-1", "10:00", "11:00"));
        assert!(!is_valid_date(&bad_date.start));
        assert!(!is_valid_date(&bad_date.end));

        let bad_time = convert_event_to_date_range(&event("1", "2024-11-01", "24:01", "25:00"));
        assert!(!is_valid_date(&bad_time.start));
        assert!(!is_valid_date(&bad_time.end));

        let bad_end = convert_event_to_date_range(&event("1", "2024-11-01", "10:00", "25:00"));
        assert!(!is_valid_date(&bad_end.start));
        assert!(!is_valid_date(&bad_end.end));
    }

    #[test]
    fn it_detects_overlapping_events() {
        let a = event("1", "2024-10-15", "09:00", "10:00");
        let b = event("2", "2024-10-15", "09:30", "10:30");
        let c = event("3", "2024-10-15", "10:00", "11:00");
        let d = event("4", "2024-10-16", "09:00", "10:00");
        let enclosing = event("5", "2024-10-15", "08:00", "12:00");

        assert!(is_overlapping(&a, &b));
        assert!(is_overlapping(&a, &enclosing));
        // Touching ranges do not overlap
        assert!(!is_overlapping(&a, &c));
        assert!(!is_overlapping(&a, &d));
    }

    #[test]
    fn overlap_is_symmetric() {
        let events = vec![
            event("1", "2024-10-15", "09:00", "10:00"),
            event("2", "2024-10-15", "09:30", "10:30"),
            event("3", "2024-10-15", "10:00", "11:00"),
            event("4", "2024-10-15", "08:00", "12:00"),
            event("5", "2024-10-15", "77:00", "78:00"),
            event("6", "2024-10-16", "09:00", "10:00"),
        ];
        for a in &events {
            for b in &events {
                assert_eq!(is_overlapping(a, b), is_overlapping(b, a));
            }
        }
    }

    #[test]
    fn invalid_events_never_overlap() {
        let valid = event("1", "2024-10-15", "09:00", "10:00");
        let invalid = event("2", "2024-10-15", "77:77", "10:00");
        assert!(!is_overlapping(&valid, &invalid));
        assert!(!is_overlapping(&invalid, &invalid));
    }

    #[test]
    fn it_finds_overlapping_events_in_order() {
        let existing = vec![
            event("1", "2024-10-15", "11:00", "12:00"),
            event("2", "2024-10-15", "09:00", "10:00"),
            event("3", "2024-10-15", "13:00", "14:00"),
            event("4", "2024-10-15", "09:30", "11:30"),
        ];
        let new_event = event("new", "2024-10-15", "09:45", "11:15");

        let ids = find_overlapping_events(&new_event, &existing)
            .into_iter()
            .map(|e| e.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "2", "4"]);
    }

    #[test]
    fn it_skips_the_event_being_edited() {
        let existing = vec![
            event("1", "2024-10-15", "09:00", "10:00"),
            event("2", "2024-10-15", "09:00", "10:00"),
        ];
        let edited = event("1", "2024-10-15", "09:30", "10:30");

        let overlapping = find_overlapping_events(&edited, &existing);
        assert_eq!(overlapping.len(), 1);
        assert_eq!(overlapping[0].id, "2");
    }

    #[test]
    fn it_returns_empty_without_overlaps() {
        let existing = vec![event("1", "2024-10-15", "09:00", "10:00")];
        let new_event = event("2", "2024-10-15", "10:00", "11:00");
        assert!(find_overlapping_events(&new_event, &existing).is_empty());
    }
}
