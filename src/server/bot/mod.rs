//! Discord bot integration for the counting game.
//!
//! This module connects the counting service to Discord. Incoming guild messages are
//! converted to domain messages, evaluated by the counting service, and the resulting
//! replies and reactions are delivered through an `EffectDispatcher`.
//!
//! The bot runs until the process receives a shutdown signal, at which point all
//! shards are shut down gracefully.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability so guild messages are attributed correctly
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `MESSAGE_CONTENT` - Read the text of those messages (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod dispatch;
pub mod handler;
pub mod start;
