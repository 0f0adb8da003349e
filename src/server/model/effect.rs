//! Outbound effects produced by the counting service.

use serenity::all::{ChannelId, MessageId};

/// Reaction added to an accepted count.
pub const SUCCESS_REACTION: &str = "✅";
/// Reaction added to a count that broke the streak.
pub const FAILURE_REACTION: &str = "🚫";

/// Intent to perform a Discord action, delivered by a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Post a text message in a channel.
    Reply {
        channel_id: ChannelId,
        content: String,
    },
    /// Add a unicode reaction to a message.
    React {
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &'static str,
    },
}

impl Effect {
    pub fn reply(channel_id: ChannelId, content: impl Into<String>) -> Self {
        Self::Reply {
            channel_id,
            content: content.into(),
        }
    }

    pub fn react(channel_id: ChannelId, message_id: MessageId, emoji: &'static str) -> Self {
        Self::React {
            channel_id,
            message_id,
            emoji,
        }
    }

    pub fn channel_id(&self) -> ChannelId {
        match self {
            Self::Reply { channel_id, .. } | Self::React { channel_id, .. } => *channel_id,
        }
    }
}
