//! Countbot Test Utils
//!
//! Provides shared testing utilities for building unit tests for the counting bot.
//! This crate offers factories for the Serenity objects the bot receives from the
//! Discord gateway, so tests can drive the bot's handlers without a live connection.
//!
//! # Overview
//!
//! The test utilities consist of two main components:
//! - **serenity**: Functions creating Serenity structs by deserializing JSON
//! - **factory**: Fluent builders with unique default IDs on top of those functions
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory::message::MessageFactory;
//!
//! #[tokio::test]
//! async fn test_counting() {
//!     let message = MessageFactory::new()
//!         .guild_id(Some(1))
//!         .channel_id(2)
//!         .author_id(3)
//!         .content("1")
//!         .build();
//!
//!     // Hand the message to the handler under test...
//! }
//! ```

pub mod factory;
pub mod serenity;
