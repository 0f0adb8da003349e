//! Factory builders for creating test data.
//!
//! Factories wrap the plain functions in [`crate::serenity`] with a builder pattern
//! and unique default IDs, so tests only spell out the fields they care about.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory::message::{create_message, MessageFactory};
//!
//! // Create with defaults
//! let message = create_message("1");
//!
//! // Customize through the builder
//! let message = MessageFactory::new()
//!     .guild_id(None)
//!     .author_id(42)
//!     .content("!cc help")
//!     .build();
//! ```

pub mod helpers;
pub mod message;
