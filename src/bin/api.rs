use anyhow::Result;
use checkin::{
    config::Config,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    let subscriber = get_subscriber("info", config.log_format(), std::io::stdout);
    init_subscriber(subscriber)?;

    let application = Application::build(config).await?;
    info!(port = application.port(), "check-in form service listening");

    application.run_until_stopped().await?;
    Ok(())
}
