use super::{base::BaseClient, APIResponse, ApiError, IEventApi};
use dayplan_domain::{Event, EventForm};
use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Deserialize)]
struct EventsResponse {
    events: Vec<Event>,
}

/// `IEventApi` backed by the events REST api
pub struct HttpEventApi {
    base: BaseClient,
}

impl HttpEventApi {
    pub fn new(address: String) -> Self {
        Self {
            base: BaseClient::new(address),
        }
    }
}

#[async_trait::async_trait]
impl IEventApi for HttpEventApi {
    async fn find_all(&self) -> APIResponse<Vec<Event>> {
        let res: EventsResponse = self.base.get("api/events", StatusCode::OK).await?;
        Ok(res.events)
    }

    async fn create(&self, form: &EventForm) -> APIResponse<Event> {
        self.base
            .post(&form.without_id(), "api/events", StatusCode::CREATED)
            .await
    }

    async fn update(&self, event: &Event) -> APIResponse<Event> {
        let path = format!("api/events/{}", event.id);
        match self.base.put(event, &path, StatusCode::OK).await {
            Err(ApiError::UnexpectedStatusCode(StatusCode::NOT_FOUND)) => {
                Err(ApiError::NotFound(event.id.clone()))
            }
            res => res,
        }
    }

    async fn delete(&self, event_id: &str) -> APIResponse<()> {
        let path = format!("api/events/{}", event_id);
        match self.base.delete(&path, StatusCode::NO_CONTENT).await {
            Err(ApiError::UnexpectedStatusCode(StatusCode::NOT_FOUND)) => {
                Err(ApiError::NotFound(event_id.to_string()))
            }
            res => res,
        }
    }
}
