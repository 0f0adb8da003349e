//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot's event handlers and the data layer. They are
//! responsible for:
//!
//! - **Business Logic**: Applying the counting game rules
//! - **Orchestration**: Coordinating registry access and per-scope locking
//! - **Domain Models**: Working with domain models rather than Serenity types

pub mod counting;
