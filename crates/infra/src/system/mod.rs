use chrono::{Duration, NaiveDateTime, Utc};
use chrono_tz::Tz;
use std::sync::Mutex;

use crate::shared::lock;

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current wall clock time. `Event`s carry no timezone so this is
    /// compared with them directly.
    fn now(&self) -> NaiveDateTime;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {
    timezone: Tz,
}

impl RealSys {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }
}

impl ISys for RealSys {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }
}

/// System with a clock that only moves when told to
pub struct MockSys {
    now: Mutex<NaiveDateTime>,
}

impl MockSys {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        *lock(&self.now) = now;
    }

    pub fn advance(&self, duration: Duration) {
        let mut now = lock(&self.now);
        *now = *now + duration;
    }
}

impl ISys for MockSys {
    fn now(&self) -> NaiveDateTime {
        *lock(&self.now)
    }
}
