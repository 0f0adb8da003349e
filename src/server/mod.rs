//! Bot backend and business logic.
//!
//! This module contains the complete implementation of the counting bot: the Discord
//! integration, the counting rules, and the in-memory state they operate on. Serenity
//! provides the gateway connection and HTTP client.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Bot Layer** (`bot/`) - Gateway event handlers and effect dispatch
//! - **Service Layer** (`service/`) - Counting rules and per-scope orchestration
//! - **Data Layer** (`data/`) - In-memory registry of per-scope counting state
//! - **Model Layer** (`model/`) - Domain models (scopes, counters, messages, effects)
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Logging and state initialization
//!
//! # Message Flow
//!
//! 1. **Bot** receives a message event and converts it to an `InboundMessage`
//! 2. **Service** resolves the message's scope and locks its state
//! 3. **Service** evaluates the counting rules and stores the new state
//! 4. **Bot** dispatches the returned replies and reactions to Discord

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod state;
