use crate::shared::usecase::UseCase;
use dayplan_infra::{ApiError, DayplanContext};

#[derive(Debug)]
pub struct DeleteEventUseCase {
    pub event_id: String,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    Api(ApiError),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteEventUseCase {
    type Response = ();
    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &DayplanContext) -> Result<Self::Response, Self::Errors> {
        ctx.api.delete(&self.event_id).await.map_err(UseCaseErrors::Api)
    }
}
