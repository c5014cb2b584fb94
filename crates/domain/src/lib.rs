pub mod date;
mod event;
mod notification;
mod overlap;
mod search;
mod shared;
mod time_validation;

pub use date::DateError;
pub use event::{Event, EventForm, RepeatInfo, RepeatType};
pub use notification::{
    create_notification_message, get_upcoming_events, notification_label, Notification,
    NOTIFICATION_OPTIONS,
};
pub use overlap::{
    convert_event_to_date_range, find_overlapping_events, is_overlapping, is_valid_date,
    parse_date_time, EventDateRange, EventDateTime,
};
pub use search::{get_filtered_events, InvalidViewModeError, ViewMode};
pub use shared::entity::Entity;
pub use time_validation::{get_time_error_message, TimeErrorRecord};
