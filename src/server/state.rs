//! Application state shared across all event handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed
//! by the bot. The state is initialized once during startup and cloned into the
//! Discord event handler.

use crate::server::service::counting::CountingService;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `CountingService` wraps its registry in an `Arc`, so clones share scope state
#[derive(Clone)]
pub struct AppState {
    /// Service applying the counting rules.
    ///
    /// Owns the in-memory registry of per-scope counting state for the lifetime of
    /// the process.
    pub counting: CountingService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `counting` - Counting service backed by the process-wide registry
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(counting: CountingService) -> Self {
        Self { counting }
    }
}
