//! Server-side domain models.
//!
//! Serenity types are converted into these models at the gateway boundary so the
//! counting rules never depend on the full Discord object graph.

pub mod command;
pub mod counter;
pub mod effect;
pub mod message;
pub mod scope;
