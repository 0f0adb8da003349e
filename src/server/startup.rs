use dioxus_logger::tracing::{self, Level};

use crate::server::{
    config::Config, data::CounterRegistry, error::AppError, service::counting::CountingService,
    state::AppState,
};

/// Installs the global tracing subscriber.
///
/// Must be called once, before the first log statement, so that startup messages are
/// not lost.
///
/// # Arguments
/// - `level` - Most verbose level that is emitted
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::LoggerErr)` - A global subscriber was already installed
pub fn init_logger(level: Level) -> Result<(), AppError> {
    dioxus_logger::init(level)?;

    Ok(())
}

/// Builds the shared application state.
///
/// Counting state starts empty on every launch; scopes are created as messages
/// arrive.
///
/// # Arguments
/// - `config` - Application configuration providing the counting settings
///
/// # Returns
/// - `AppState` - State ready to be handed to the bot's event handler
pub fn build_state(config: &Config) -> AppState {
    let settings = config.counting_settings();

    tracing::info!(
        "Counting per {} with command prefix `{}`",
        settings.granularity.noun(),
        settings.command_prefix
    );

    AppState::new(CountingService::new(CounterRegistry::new(), settings))
}
