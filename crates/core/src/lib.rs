mod event;
mod event_operations;
mod notification_poller;
mod shared;
mod toast;

pub use event_operations::EventOperations;
pub use notification_poller::NotificationPoller;
pub use toast::{IToaster, InMemoryToaster, Toast, ToastStatus, TracingToaster, TOAST_DURATION_MS};
