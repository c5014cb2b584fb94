use dayplan_core::{EventOperations, InMemoryToaster};
use dayplan_infra::{DayplanContext, HttpEventApi};
use std::sync::Arc;
use wiremock::MockServer;

pub struct TestApp {
    pub ctx: DayplanContext,
    pub server: MockServer,
    pub toaster: Arc<InMemoryToaster>,
}

impl TestApp {
    pub fn operations(&self, editing: bool) -> EventOperations {
        EventOperations::new(self.ctx.clone(), self.toaster.clone(), editing)
    }
}

// Launch a mock events api and a context talking to it
pub async fn spawn_app() -> TestApp {
    let server = MockServer::start().await;

    let mut ctx = DayplanContext::create_inmemory();
    ctx.config.api_url = Some(server.uri());
    ctx.api = Arc::new(HttpEventApi::new(server.uri()));

    TestApp {
        ctx,
        server,
        toaster: Arc::new(InMemoryToaster::new()),
    }
}
