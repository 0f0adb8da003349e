//! Inbound chat message as seen by the counting service.

use serenity::all::{ChannelId, GuildId, Message, MessageId, UserId};

/// Guild message the counting service evaluates.
///
/// Carries only the fields the counting rules need, decoupling the rules from
/// Serenity's full `Message` type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub author_id: UserId,
    /// Whether the author is a bot account (including this bot).
    pub author_is_bot: bool,
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub content: String,
}

impl InboundMessage {
    /// Converts a Serenity message at the gateway boundary.
    ///
    /// # Arguments
    /// - `message` - Message received from the Discord gateway
    ///
    /// # Returns
    /// - `Some(InboundMessage)` - Message was posted in a guild channel
    /// - `None` - Message was a direct message and has no guild
    pub fn from_message(message: &Message) -> Option<Self> {
        let guild_id = message.guild_id?;

        Some(Self {
            author_id: message.author.id,
            author_is_bot: message.author.bot,
            guild_id,
            channel_id: message.channel_id,
            message_id: message.id,
            content: message.content.clone(),
        })
    }
}
