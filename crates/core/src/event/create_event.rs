use crate::shared::usecase::UseCase;
use dayplan_domain::{Event, EventForm};
use dayplan_infra::{ApiError, DayplanContext};

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub form: EventForm,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    Api(ApiError),
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = Event;
    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &DayplanContext) -> Result<Self::Response, Self::Errors> {
        ctx.api.create(&self.form).await.map_err(UseCaseErrors::Api)
    }
}
