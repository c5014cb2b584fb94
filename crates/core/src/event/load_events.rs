use crate::shared::usecase::UseCase;
use dayplan_domain::Event;
use dayplan_infra::{ApiError, DayplanContext};

#[derive(Debug)]
pub struct LoadEventsUseCase;

#[derive(Debug)]
pub enum UseCaseErrors {
    Api(ApiError),
}

#[async_trait::async_trait(?Send)]
impl UseCase for LoadEventsUseCase {
    type Response = Vec<Event>;
    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &DayplanContext) -> Result<Self::Response, Self::Errors> {
        ctx.api.find_all().await.map_err(UseCaseErrors::Api)
    }
}
