//! Counting game service.
//!
//! `CountingService` resolves the scope of each inbound message, serializes access to
//! that scope's state, runs the rules in [`engine`], and hands the resulting effects
//! back to the caller for dispatch. Reply texts live in [`reply`].

pub mod engine;
pub mod reply;

#[cfg(test)]
mod test;

use dioxus_logger::tracing;

use crate::server::{
    data::CounterRegistry,
    model::{
        command::{Command, MessageInput},
        effect::Effect,
        message::InboundMessage,
        scope::{ScopeGranularity, ScopeKey},
    },
};

use self::engine::Outcome;

/// Default command prefix, as in `!cc help`.
pub const DEFAULT_COMMAND_PREFIX: &str = "!cc";

/// Settings that shape how messages are classified and scoped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountingSettings {
    /// Prefix of bot commands, without the trailing space.
    pub command_prefix: String,
    /// Whether counting state is kept per channel or per guild.
    pub granularity: ScopeGranularity,
}

impl Default for CountingSettings {
    fn default() -> Self {
        Self {
            command_prefix: DEFAULT_COMMAND_PREFIX.to_string(),
            granularity: ScopeGranularity::default(),
        }
    }
}

/// Service applying the counting rules to inbound messages.
///
/// Cloning is cheap; clones share the same registry.
#[derive(Clone)]
pub struct CountingService {
    registry: CounterRegistry,
    settings: CountingSettings,
}

impl CountingService {
    /// Creates a counting service backed by the provided registry.
    ///
    /// # Arguments
    /// - `registry` - Store of per-scope counting state
    /// - `settings` - Command prefix and scope granularity
    pub fn new(registry: CounterRegistry, settings: CountingSettings) -> Self {
        Self { registry, settings }
    }

    pub fn settings(&self) -> &CountingSettings {
        &self.settings
    }

    /// Resolves the scope key of a message under the configured granularity.
    pub fn scope_of(&self, message: &InboundMessage) -> ScopeKey {
        self.settings
            .granularity
            .key_for(message.guild_id, message.channel_id)
    }

    /// Handles one inbound message and returns the effects to dispatch.
    ///
    /// Bot messages are dropped here and nowhere else. Help requests are answered
    /// before the registry is touched, so neither creates state for an unseen scope.
    /// Every other message creates its scope on first sight and is evaluated while
    /// holding that scope's lock; the lock is released before returning.
    ///
    /// # Arguments
    /// - `message` - Guild message received from the gateway
    ///
    /// # Returns
    /// - `Vec<Effect>` - Replies and reactions to deliver, possibly empty
    pub async fn handle(&self, message: &InboundMessage) -> Vec<Effect> {
        if message.author_is_bot {
            tracing::trace!("Ignoring message {} from bot account", message.message_id);
            return Vec::new();
        }

        let input = MessageInput::classify(&message.content, &self.settings.command_prefix);
        if input == MessageInput::Command(Command::Help) {
            return vec![Effect::reply(
                message.channel_id,
                reply::help(&self.settings.command_prefix, self.settings.granularity),
            )];
        }

        let key = self.scope_of(message);
        let handle = self.registry.get_or_create(key).await;

        let transition = {
            let mut state = handle.lock().await;
            let transition = engine::apply(&state, input, message, &self.settings);
            *state = transition.state.clone();
            transition
        };

        match transition.outcome {
            Outcome::Ignored => {
                tracing::trace!("Ignoring message {} in {}", message.message_id, key);
                return transition.effects;
            }
            Outcome::Enabled => tracing::info!("Counting enabled for {}", key),
            Outcome::Disabled => tracing::info!("Counting disabled for {}", key),
            Outcome::Reset {
                violations,
                previous_count,
                new_record,
            } => tracing::debug!(
                "Count reset in {} at {} by user {} ({:?}, new record: {})",
                key,
                previous_count,
                message.author_id,
                violations,
                new_record
            ),
            Outcome::Counted(_) | Outcome::Help => {}
        }

        tracing::debug!(
            "State update for {}: count {}, highest {}, previous sender {:?}",
            key,
            transition.state.raw_count(),
            transition.state.highest_count,
            transition.state.previous_sender
        );

        transition.effects
    }

    /// Copies the current state of a scope.
    ///
    /// # Returns
    /// - `Some(CounterState)` - Scope has been observed
    /// - `None` - Scope has not been created yet
    #[cfg(test)]
    pub async fn snapshot(
        &self,
        key: &ScopeKey,
    ) -> Option<crate::server::model::counter::CounterState> {
        self.registry.snapshot(key).await
    }
}
