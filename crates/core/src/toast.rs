use std::sync::{Mutex, PoisonError};
use tracing::{error, info};

/// How long a `Toast` stays visible
pub const TOAST_DURATION_MS: u64 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastStatus {
    Success,
    Info,
    Error,
}

/// A short lived message shown to the user after an operation settles
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub status: ToastStatus,
    pub duration: u64,
    pub is_closable: bool,
}

impl Toast {
    pub fn new(title: &str, status: ToastStatus) -> Self {
        Self {
            title: title.to_string(),
            status,
            duration: TOAST_DURATION_MS,
            is_closable: true,
        }
    }
}

/// Where `Toast`s are delivered
pub trait IToaster: Send + Sync {
    fn toast(&self, toast: Toast);
}

/// Writes `Toast`s to the log
pub struct TracingToaster;

impl IToaster for TracingToaster {
    fn toast(&self, toast: Toast) {
        match toast.status {
            ToastStatus::Error => error!(status = ?toast.status, "{}", toast.title),
            _ => info!(status = ?toast.status, "{}", toast.title),
        }
    }
}

/// Keeps every `Toast` it is given
#[derive(Default)]
pub struct InMemoryToaster {
    toasts: Mutex<Vec<Toast>>,
}

impl InMemoryToaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl IToaster for InMemoryToaster {
    fn toast(&self, toast: Toast) {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);
    }
}
