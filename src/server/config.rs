use dioxus_logger::tracing::Level;

use crate::server::{
    error::{config::ConfigError, AppError},
    model::scope::ScopeGranularity,
    service::counting::{CountingSettings, DEFAULT_COMMAND_PREFIX},
};

const DISCORD_BOT_TOKEN: &str = "DISCORD_BOT_TOKEN";
const COUNTING_SCOPE: &str = "COUNTING_SCOPE";
const COMMAND_PREFIX: &str = "COMMAND_PREFIX";
const LOG_LEVEL: &str = "LOG_LEVEL";

pub struct Config {
    pub discord_bot_token: String,

    pub counting_scope: ScopeGranularity,
    pub command_prefix: String,

    pub log_level: Level,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset, so optional variables fall back to their
    /// defaults.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let discord_bot_token = get(DISCORD_BOT_TOKEN)
            .ok_or_else(|| ConfigError::MissingEnvVar(DISCORD_BOT_TOKEN.to_string()))?;

        let counting_scope = match get(COUNTING_SCOPE) {
            Some(value) => value
                .parse::<ScopeGranularity>()
                .map_err(|reason| invalid(COUNTING_SCOPE, &value, reason))?,
            None => ScopeGranularity::default(),
        };

        let command_prefix = match get(COMMAND_PREFIX) {
            Some(value) if value.chars().any(char::is_whitespace) => {
                return Err(invalid(
                    COMMAND_PREFIX,
                    &value,
                    "prefix must not contain whitespace".to_string(),
                )
                .into());
            }
            Some(value) => value,
            None => DEFAULT_COMMAND_PREFIX.to_string(),
        };

        let log_level = match get(LOG_LEVEL) {
            Some(value) => value
                .trim()
                .parse::<Level>()
                .map_err(|e| invalid(LOG_LEVEL, &value, e.to_string()))?,
            None => Level::INFO,
        };

        Ok(Self {
            discord_bot_token,
            counting_scope,
            command_prefix,
            log_level,
        })
    }

    /// Settings handed to the counting service.
    pub fn counting_settings(&self) -> CountingSettings {
        CountingSettings {
            command_prefix: self.command_prefix.clone(),
            granularity: self.counting_scope,
        }
    }
}

fn invalid(name: &str, value: &str, reason: String) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    }
}
