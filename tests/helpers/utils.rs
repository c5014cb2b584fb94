use dayplan_core::ToastStatus;
use dayplan_domain::{Event, EventForm, RepeatInfo};

use super::setup::TestApp;

pub fn form(title: &str, date: &str, start_time: &str, end_time: &str) -> EventForm {
    EventForm {
        title: title.into(),
        date: date.into(),
        start_time: start_time.into(),
        end_time: end_time.into(),
        description: "팀 미팅".into(),
        location: "회의실 B".into(),
        category: "업무".into(),
        repeat: RepeatInfo::none(),
        notification_time: 10,
        ..Default::default()
    }
}

pub fn event(id: &str, title: &str, date: &str, start_time: &str, end_time: &str) -> Event {
    form(title, date, start_time, end_time).into_event(id.into())
}

pub fn toasts(app: &TestApp) -> Vec<(String, ToastStatus)> {
    app.toaster
        .toasts()
        .into_iter()
        .map(|t| (t.title, t.status))
        .collect()
}
