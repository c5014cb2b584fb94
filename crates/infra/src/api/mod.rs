mod base;
mod http;
mod inmemory;

use dayplan_domain::{Event, EventForm};
pub use http::HttpEventApi;
pub use inmemory::InMemoryEventApi;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unable to reach the event api")]
    Network,
    #[error("The event api responded with a malformed body")]
    MalformedResponse,
    #[error("The event api responded with unexpected status code: {0}")]
    UnexpectedStatusCode(StatusCode),
    #[error("The event with id: {0}, was not found")]
    NotFound(String),
}

pub type APIResponse<T> = Result<T, ApiError>;

/// The remote collection of `Event`s
#[async_trait::async_trait]
pub trait IEventApi: Send + Sync {
    async fn find_all(&self) -> APIResponse<Vec<Event>>;
    /// The api assigns the id of the created `Event`
    async fn create(&self, form: &EventForm) -> APIResponse<Event>;
    async fn update(&self, event: &Event) -> APIResponse<Event>;
    async fn delete(&self, event_id: &str) -> APIResponse<()>;
}
