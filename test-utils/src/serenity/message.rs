//! Test factory for creating Serenity Message objects.
//!
//! This module provides factory functions for creating mock Serenity `Message` structs
//! for testing purposes. These factories create valid Message objects by deserializing
//! JSON, simulating a `MESSAGE_CREATE` event delivered by Discord's gateway.

use serenity::all::{Message, User};

/// Creates a test Serenity Message with customizable fields.
///
/// Creates a plain text message (type 0) with no mentions, attachments, embeds, or
/// reactions. Omitting the guild ID produces a direct message.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Discord channel ID the message was posted in
/// - `guild_id` - Discord guild ID, or `None` for a direct message
/// - `author` - Author of the message
/// - `content` - Message text
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::{create_test_message, create_test_user};
///
/// let author = create_test_user(42, "counter", false);
/// let message = create_test_message(1, 2, Some(3), &author, "7");
/// assert_eq!(message.content, "7");
/// assert_eq!(message.guild_id.unwrap().get(), 3);
/// ```
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    author: &User,
    content: &str,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": guild_id.map(|id| id.to_string()),
        "author": author,
        "content": content,
        "timestamp": "2025-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "pinned": false,
        "webhook_id": null,
        "type": 0,
        "activity": null,
        "application": null,
        "application_id": null,
        "message_reference": null,
        "flags": 0,
        "referenced_message": null,
        "thread": null,
        "position": null,
        "role_subscription_data": null,
        "member": null,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
