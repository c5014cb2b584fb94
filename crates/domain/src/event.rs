use crate::shared::entity::Entity;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Default for RepeatType {
    fn default() -> Self {
        Self::None
    }
}

impl RepeatType {
    fn unit(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Daily => Some("일"),
            Self::Weekly => Some("주"),
            Self::Monthly => Some("월"),
            Self::Yearly => Some("년"),
        }
    }
}

/// Recurrence descriptor of an `Event`: "every `interval` units".
///
/// `RepeatType::None` means the event does not repeat and the interval
/// is conventionally 0.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInfo {
    #[serde(rename = "type")]
    pub repeat_type: RepeatType,
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl RepeatInfo {
    pub fn none() -> Self {
        Default::default()
    }

    /// Human readable recurrence text, e.g. "반복: 2주마다 (종료: 2024-12-31)"
    pub fn describe(&self) -> Option<String> {
        let unit = self.repeat_type.unit()?;
        let end = match &self.end_date {
            Some(end_date) => format!(" (종료: {})", end_date),
            None => String::new(),
        };
        Some(format!("반복: {}{}마다{}", self.interval, unit, end))
    }
}

/// A user scheduled calendar item.
///
/// `date` is a `YYYY-MM-DD` string and the times are `HH:MM` strings. Nothing
/// guarantees that they are well formed or that the start precedes the end,
/// see `parse_date_time` and `get_time_error_message`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub repeat: RepeatInfo,
    /// Minutes before `start_time` at which the owner should be notified
    pub notification_time: u32,
}

impl Entity for Event {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The editable fields of an `Event`. The `id` is only present when an
/// already persisted event is being edited.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub repeat: RepeatInfo,
    pub notification_time: u32,
}

impl EventForm {
    /// Builds the `Event` the form describes once it has been given an id
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description,
            location: self.location,
            category: self.category,
            repeat: self.repeat,
            notification_time: self.notification_time,
        }
    }

    /// The same form stripped of its id, which is what gets sent on create
    pub fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }
}

impl From<Event> for EventForm {
    fn from(e: Event) -> Self {
        Self {
            id: Some(e.id),
            title: e.title,
            date: e.date,
            start_time: e.start_time,
            end_time: e.end_time,
            description: e.description,
            location: e.location,
            category: e.category,
            repeat: e.repeat,
            notification_time: e.notification_time,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn form() -> EventForm {
        EventForm {
            id: None,
            title: "새로운 회의".into(),
            date: "2024-10-15".into(),
            start_time: "09:00".into(),
            end_time: "10:00".into(),
            description: "새로운 팀 미팅".into(),
            location: "회의실 B".into(),
            category: "업무".into(),
            repeat: RepeatInfo::none(),
            notification_time: 10,
        }
    }

    #[test]
    fn it_serializes_with_camel_case_fields() {
        let event = form().into_event("1".into());
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["startTime"], "09:00");
        assert_eq!(json["endTime"], "10:00");
        assert_eq!(json["notificationTime"], 10);
        assert_eq!(json["repeat"]["type"], "none");
        assert!(json["repeat"].get("endDate").is_none());
    }

    #[test]
    fn it_deserializes_event_from_api_json() {
        let json = r#"{
            "id": "1",
            "title": "기존 회의",
            "date": "2024-10-15",
            "startTime": "09:00",
            "endTime": "10:00",
            "description": "기존 팀 미팅",
            "location": "회의실 B",
            "category": "업무",
            "repeat": { "type": "weekly", "interval": 2, "endDate": "2024-12-31" },
            "notificationTime": 10
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.id, "1");
        assert_eq!(event.repeat.repeat_type, RepeatType::Weekly);
        assert_eq!(event.repeat.end_date.as_deref(), Some("2024-12-31"));
    }

    #[test]
    fn create_form_never_carries_an_id() {
        let event = form().into_event("abc".into());
        let form = EventForm::from(event);
        assert_eq!(form.id.as_deref(), Some("abc"));

        let json = serde_json::to_value(&form.without_id()).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn it_describes_repeat_info() {
        assert_eq!(RepeatInfo::none().describe(), None);

        let daily = RepeatInfo {
            repeat_type: RepeatType::Daily,
            interval: 1,
            end_date: None,
        };
        assert_eq!(daily.describe().unwrap(), "반복: 1일마다");

        let monthly = RepeatInfo {
            repeat_type: RepeatType::Monthly,
            interval: 3,
            end_date: Some("2025-06-30".into()),
        };
        assert_eq!(
            monthly.describe().unwrap(),
            "반복: 3월마다 (종료: 2025-06-30)"
        );
    }
}
