use crate::shared::usecase::UseCase;
use dayplan_domain::Event;
use dayplan_infra::{ApiError, DayplanContext};

#[derive(Debug)]
pub struct UpdateEventUseCase {
    pub event: Event,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    Api(ApiError),
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateEventUseCase {
    type Response = Event;
    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &DayplanContext) -> Result<Self::Response, Self::Errors> {
        ctx.api.update(&self.event).await.map_err(UseCaseErrors::Api)
    }
}
