mod telemetry;
mod view;

use dayplan_core::{EventOperations, NotificationPoller, TracingToaster};
use dayplan_domain::get_filtered_events;
use dayplan_infra::setup_context;
use std::sync::Arc;
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("dayplan".into(), "info".into());
    init_subscriber(subscriber)?;

    let ctx = setup_context();

    let mut operations = EventOperations::new(ctx.clone(), Arc::new(TracingToaster), false);
    operations.load_events().await;

    let mut poller = NotificationPoller::from_context(&ctx);
    poller.start(operations.subscribe());

    let today = ctx.sys.now().date();
    let view_mode = ctx.config.view_mode;
    let events = get_filtered_events(operations.events(), "", today, view_mode)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    let holidays = ctx.holidays.fetch_holidays(today);
    for line in view::render(view_mode, today, &events, &holidays) {
        info!("{}", line);
    }

    tokio::signal::ctrl_c().await?;
    poller.stop();
    info!("Shutting down");
    Ok(())
}
