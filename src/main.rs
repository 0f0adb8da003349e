mod server;

use dioxus_logger::tracing;

use crate::server::{bot, config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logger(config.log_level)?;

    let state = startup::build_state(&config);

    let mut client = bot::start::init_bot(&config, state).await?;

    // Shut down all shards once a termination signal arrives
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        bot::start::shutdown_signal().await;
        tracing::info!("Shutdown signal received, disconnecting from Discord");
        shard_manager.shutdown_all().await;
    });

    bot::start::start_bot(&mut client).await
}
