use crate::server::{
    data::CounterRegistry,
    model::{
        command::MessageInput,
        counter::CounterState,
        effect::{Effect, FAILURE_REACTION, SUCCESS_REACTION},
        message::InboundMessage,
        scope::{ScopeGranularity, ScopeKey},
    },
    service::counting::{
        engine::{apply, Outcome, Transition, Violations},
        CountingService, CountingSettings,
    },
};
use serenity::all::{ChannelId, GuildId, MessageId, UserId};

mod handle;

const GUILD: u64 = 100;
const CHANNEL: u64 = 200;

/// Builds a guild message from a human author in the default test channel.
fn message(author: u64, content: &str) -> InboundMessage {
    message_in(CHANNEL, author, content)
}

/// Classifies a message and applies it, as `CountingService::handle` does once bot
/// messages have been dropped.
fn classify_and_apply(
    state: &CounterState,
    message: &InboundMessage,
    settings: &CountingSettings,
) -> Transition {
    let input = MessageInput::classify(&message.content, &settings.command_prefix);
    apply(state, input, message, settings)
}

fn message_in(channel: u64, author: u64, content: &str) -> InboundMessage {
    InboundMessage {
        author_id: UserId::new(author),
        author_is_bot: false,
        guild_id: GuildId::new(GUILD),
        channel_id: ChannelId::new(channel),
        message_id: MessageId::new(900),
        content: content.to_string(),
    }
}

fn state(count: Option<u64>, highest_count: u64, previous_sender: Option<u64>) -> CounterState {
    CounterState {
        count,
        highest_count,
        previous_sender: previous_sender.map(UserId::new),
    }
}

fn channel_key(channel: u64) -> ScopeKey {
    ScopeKey::Channel {
        guild_id: GuildId::new(GUILD),
        channel_id: ChannelId::new(channel),
    }
}

fn service(granularity: ScopeGranularity) -> CountingService {
    CountingService::new(
        CounterRegistry::new(),
        CountingSettings {
            granularity,
            ..CountingSettings::default()
        },
    )
}
