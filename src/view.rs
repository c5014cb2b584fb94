use chrono::NaiveDate;
use dayplan_domain::{
    date::{
        format_date, format_month, format_week, get_events_for_day, get_week_dates,
        get_weeks_at_month,
    },
    notification_label, Event, ViewMode,
};
use std::collections::BTreeMap;

const WEEK_DAYS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

fn describe_event(event: &Event) -> String {
    let mut line = format!(
        "  {}-{} {} ({})",
        event.start_time, event.end_time, event.title, event.location
    );
    if let Some(label) = notification_label(event.notification_time) {
        line.push_str(&format!(" [알림: {}]", label));
    }
    if let Some(repeat) = event.repeat.describe() {
        line.push_str(&format!(" {}", repeat));
    }
    line
}

fn render_month(
    current: NaiveDate,
    events: &[Event],
    holidays: &BTreeMap<String, String>,
) -> Vec<String> {
    let mut lines = vec![format_month(current), WEEK_DAYS.join("  ")];
    for week in get_weeks_at_month(current) {
        let row = week
            .iter()
            .map(|day| match day {
                Some(day) => format!("{:>2}", day),
                None => "  ".to_string(),
            })
            .collect::<Vec<_>>();
        lines.push(row.join(" ").trim_end().to_string());
    }

    for day in get_weeks_at_month(current).into_iter().flatten().flatten() {
        let date = format_date(current, Some(day));
        let day_events = get_events_for_day(events, day);
        let holiday = holidays.get(&date);
        if day_events.is_empty() && holiday.is_none() {
            continue;
        }
        match holiday {
            Some(holiday) => lines.push(format!("{} {}", date, holiday)),
            None => lines.push(date),
        }
        lines.extend(day_events.into_iter().map(describe_event));
    }
    lines
}

fn render_week(
    current: NaiveDate,
    events: &[Event],
    holidays: &BTreeMap<String, String>,
) -> Vec<String> {
    let mut lines = vec![format_week(current)];
    for (date, week_day) in get_week_dates(current).into_iter().zip(WEEK_DAYS.iter()) {
        let datestr = format_date(date, None);
        match holidays.get(&datestr) {
            Some(holiday) => lines.push(format!("{} ({}) {}", datestr, week_day, holiday)),
            None => lines.push(format!("{} ({})", datestr, week_day)),
        }
        lines.extend(
            events
                .iter()
                .filter(|event| event.date == datestr)
                .map(describe_event),
        );
    }
    lines
}

/// Text rendering of the calendar around `current`. `events` are expected
/// to be filtered to the view already.
pub fn render(
    view: ViewMode,
    current: NaiveDate,
    events: &[Event],
    holidays: &BTreeMap<String, String>,
) -> Vec<String> {
    match view {
        ViewMode::Week => render_week(current, events, holidays),
        ViewMode::Month => render_month(current, events, holidays),
    }
}
