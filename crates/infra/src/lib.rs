mod api;
mod config;
mod holidays;
mod shared;
mod system;

pub use api::{APIResponse, ApiError, HttpEventApi, IEventApi, InMemoryEventApi};
pub use config::Config;
pub use holidays::{IHolidayApi, StaticHolidayApi};
use std::sync::Arc;
pub use system::{ISys, MockSys, RealSys};
use tracing::info;

#[derive(Clone)]
pub struct DayplanContext {
    pub api: Arc<dyn IEventApi>,
    pub holidays: Arc<dyn IHolidayApi>,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl DayplanContext {
    fn create(config: Config) -> Self {
        let api: Arc<dyn IEventApi> = match &config.api_url {
            Some(url) => {
                info!("Using the event api at: {}", url);
                Arc::new(HttpEventApi::new(url.clone()))
            }
            None => {
                info!("No event api url was configured. Events are only kept in memory.");
                Arc::new(InMemoryEventApi::new())
            }
        };
        Self {
            api,
            holidays: Arc::new(StaticHolidayApi::new()),
            sys: Arc::new(RealSys::new(config.timezone)),
            config,
        }
    }

    /// Context backed by an empty `InMemoryEventApi` and the default `Config`
    pub fn create_inmemory() -> Self {
        let config = Config::default();
        Self {
            api: Arc::new(InMemoryEventApi::new()),
            holidays: Arc::new(StaticHolidayApi::new()),
            sys: Arc::new(RealSys::new(config.timezone)),
            config,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> DayplanContext {
    DayplanContext::create(Config::new())
}
