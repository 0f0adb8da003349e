//! Factory for creating Serenity Message objects for testing.
//!
//! Provides a builder for gateway messages with unique default IDs. Messages are
//! posted in a guild by a human author unless configured otherwise.

use serenity::all::Message;

use crate::{
    factory::helpers::next_id,
    serenity::{create_test_message, create_test_user},
};

/// Factory for creating test gateway messages.
///
/// Provides a builder pattern for creating messages with customizable fields.
/// The guild, channel, message, and author IDs default to unique values and the
/// content defaults to an empty string.
pub struct MessageFactory {
    guild_id: Option<u64>,
    channel_id: u64,
    message_id: u64,
    author_id: u64,
    bot: bool,
    content: String,
}

impl MessageFactory {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `Some(next_id())`
    /// - channel_id, message_id, author_id: `next_id()`
    /// - bot: `false`
    /// - content: empty
    ///
    /// # Returns
    /// - `MessageFactory` - New factory instance with defaults
    pub fn new() -> Self {
        Self {
            guild_id: Some(next_id()),
            channel_id: next_id(),
            message_id: next_id(),
            author_id: next_id(),
            bot: false,
            content: String::new(),
        }
    }

    /// Sets the guild the message was posted in.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID, or `None` for a direct message
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn guild_id(mut self, guild_id: Option<u64>) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the channel the message was posted in.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel ID
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn channel_id(mut self, channel_id: u64) -> Self {
        self.channel_id = channel_id;
        self
    }

    /// Sets the message ID.
    ///
    /// # Arguments
    /// - `message_id` - Discord message ID
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn message_id(mut self, message_id: u64) -> Self {
        self.message_id = message_id;
        self
    }

    /// Sets the author's user ID.
    ///
    /// # Arguments
    /// - `author_id` - Discord user ID of the author
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn author_id(mut self, author_id: u64) -> Self {
        self.author_id = author_id;
        self
    }

    /// Sets whether the author is a bot account.
    ///
    /// # Arguments
    /// - `bot` - Whether the author is a bot
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn bot(mut self, bot: bool) -> Self {
        self.bot = bot;
        self
    }

    /// Sets the message text.
    ///
    /// # Arguments
    /// - `content` - Message content
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds the Serenity Message.
    ///
    /// # Returns
    /// - `Message` - Message with the configured fields
    pub fn build(self) -> Message {
        let name = if self.bot { "bot" } else { "counter" };
        let author = create_test_user(self.author_id, name, self.bot);

        create_test_message(
            self.message_id,
            self.channel_id,
            self.guild_id,
            &author,
            &self.content,
        )
    }
}

impl Default for MessageFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a guild message with the given content and default IDs.
///
/// Shorthand for `MessageFactory::new().content(content).build()`.
///
/// # Arguments
/// - `content` - Message content
///
/// # Returns
/// - `Message` - New guild message from a human author
pub fn create_message(content: &str) -> Message {
    MessageFactory::new().content(content).build()
}
