use chrono::NaiveDateTime;
use dayplan_domain::{create_notification_message, get_upcoming_events, Event, Notification};
use dayplan_infra::{DayplanContext, ISys};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::info;

const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Default)]
struct State {
    notifications: Vec<Notification>,
    notified_event_ids: HashSet<String>,
}

/// Periodically looks for `Event`s entering their notification window and
/// keeps the resulting `Notification`s until they are dismissed.
///
/// Every `Event` is notified about at most once for the lifetime of the poller.
pub struct NotificationPoller {
    state: Arc<Mutex<State>>,
    sys: Arc<dyn ISys>,
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn check_state(state: &Mutex<State>, events: &[Event], now: NaiveDateTime) -> Vec<Notification> {
    let mut state = lock(state);
    let fired = get_upcoming_events(events, now, &state.notified_event_ids)
        .into_iter()
        .map(|event| Notification {
            id: event.id.clone(),
            message: create_notification_message(event),
        })
        .collect::<Vec<_>>();

    for notification in &fired {
        state.notified_event_ids.insert(notification.id.clone());
        state.notifications.push(notification.clone());
    }
    fired
}

impl NotificationPoller {
    /// A zero `period` is raised to one millisecond
    pub fn new(sys: Arc<dyn ISys>, period: Duration) -> Self {
        Self {
            state: Default::default(),
            sys,
            period: period.max(MIN_PERIOD),
            handle: None,
        }
    }

    /// Poller reading the clock and poll interval of the context
    pub fn from_context(ctx: &DayplanContext) -> Self {
        Self::new(
            ctx.sys.clone(),
            Duration::from_millis(ctx.config.poll_interval_ms),
        )
    }

    /// Runs a single poll step and returns the `Notification`s it created
    pub fn check(&self, events: &[Event], now: NaiveDateTime) -> Vec<Notification> {
        check_state(&self.state, events, now)
    }

    /// Starts polling the latest `Event`s of `events`. The first check happens
    /// one period after start. A poller that is already running is restarted.
    pub fn start(&mut self, events: watch::Receiver<Vec<Event>>) {
        self.stop();

        let state = self.state.clone();
        let sys = self.sys.clone();
        let period = self.period;
        self.handle = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;

                let fired = {
                    let events = events.borrow();
                    check_state(&state, &events, sys.now())
                };
                for notification in fired {
                    info!(event_id = %notification.id, "{}", notification.message);
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }

    pub fn notifications(&self) -> Vec<Notification> {
        lock(&self.state).notifications.clone()
    }

    pub fn set_notifications(&self, notifications: Vec<Notification>) {
        lock(&self.state).notifications = notifications;
    }

    /// Dismisses the `Notification` at `index`. The `Event` stays notified.
    pub fn remove_notification(&self, index: usize) {
        let mut state = lock(&self.state);
        if index < state.notifications.len() {
            state.notifications.remove(index);
        }
    }

    pub fn notified_event_ids(&self) -> HashSet<String> {
        lock(&self.state).notified_event_ids.clone()
    }

    pub fn is_notified(&self, event_id: &str) -> bool {
        lock(&self.state).notified_event_ids.contains(event_id)
    }
}

impl Drop for NotificationPoller {
    fn drop(&mut self) {
        self.stop();
    }
}
