use super::{APIResponse, ApiError, IEventApi};
use crate::shared::inmemory_repo::*;
use dayplan_domain::{Event, EventForm};
use std::sync::Mutex;
use uuid::Uuid;

/// `IEventApi` that keeps the `Event`s in process
pub struct InMemoryEventApi {
    events: Mutex<Vec<Event>>,
}

impl InMemoryEventApi {
    pub fn new() -> Self {
        Self::with_events(Vec::new())
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(events),
        }
    }
}

impl Default for InMemoryEventApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IEventApi for InMemoryEventApi {
    async fn find_all(&self) -> APIResponse<Vec<Event>> {
        Ok(find_all(&self.events))
    }

    async fn create(&self, form: &EventForm) -> APIResponse<Event> {
        let event = form.clone().into_event(Uuid::new_v4().to_string());
        insert(&event, &self.events);
        Ok(event)
    }

    async fn update(&self, event: &Event) -> APIResponse<Event> {
        if save(event, &self.events) {
            Ok(event.clone())
        } else {
            Err(ApiError::NotFound(event.id.clone()))
        }
    }

    async fn delete(&self, event_id: &str) -> APIResponse<()> {
        delete(event_id, &self.events)
            .map(|_| ())
            .ok_or_else(|| ApiError::NotFound(event_id.to_string()))
    }
}
