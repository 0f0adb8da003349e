//! Data access layer.
//!
//! Counting state is kept in memory only; repositories here own the stores and hand
//! out domain models to the service layer.

pub mod counter;

pub use counter::CounterRegistry;
