//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Message, User) for testing purposes. These factories create valid Serenity
//! objects by deserializing JSON, simulating what Discord's gateway would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_user};
//!
//! let author = create_test_user(123456789, "counter", false);
//! let message = create_test_message(1, 2, Some(3), &author, "1");
//! ```
//!
//! # Available Factories
//!
//! - `message::create_test_message` - Create Serenity Message objects
//! - `user::create_test_user` - Create Serenity User objects

pub mod message;
pub mod user;

// Re-export commonly used functions for convenience
pub use message::create_test_message;
pub use user::create_test_user;
