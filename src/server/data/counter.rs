//! In-memory store of counting state keyed by scope.
//!
//! State lives for the lifetime of the process. Each scope's state sits behind its own
//! mutex so that messages for one scope are evaluated one at a time, while different
//! scopes proceed independently.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::server::model::{counter::CounterState, scope::ScopeKey};

/// Shared handle to the state of a single scope.
pub type ScopeHandle = Arc<Mutex<CounterState>>;

/// Registry of counting state for every scope observed so far.
///
/// Cloning is cheap; clones share the same underlying map.
#[derive(Clone, Default)]
pub struct CounterRegistry {
    scopes: Arc<RwLock<HashMap<ScopeKey, ScopeHandle>>>,
}

impl CounterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state handle for a scope, creating it on first access.
    ///
    /// Unseen scopes start from `CounterState::new()`. The fast path only takes the
    /// read lock; the write lock is taken when the scope has to be inserted.
    ///
    /// # Arguments
    /// - `key` - Scope to look up
    ///
    /// # Returns
    /// - `ScopeHandle` - Lockable state of the scope
    pub async fn get_or_create(&self, key: ScopeKey) -> ScopeHandle {
        if let Some(handle) = self.scopes.read().await.get(&key) {
            return handle.clone();
        }

        let mut scopes = self.scopes.write().await;
        scopes
            .entry(key)
            .or_insert_with(|| Arc::new(Mutex::new(CounterState::new())))
            .clone()
    }
}

/// Inspection and seeding helpers for tests.
#[cfg(test)]
impl CounterRegistry {
    /// Returns the state handle for a scope without creating it.
    pub async fn get(&self, key: &ScopeKey) -> Option<ScopeHandle> {
        self.scopes.read().await.get(key).cloned()
    }

    /// Copies the current state of a scope.
    ///
    /// # Returns
    /// - `Some(CounterState)` - Scope has been observed
    /// - `None` - No message has created the scope yet
    pub async fn snapshot(&self, key: &ScopeKey) -> Option<CounterState> {
        let handle = self.get(key).await?;
        let state = handle.lock().await;
        Some(state.clone())
    }

    /// Replaces the state of a scope, creating the scope if needed.
    pub async fn insert(&self, key: ScopeKey, state: CounterState) {
        let handle = self.get_or_create(key).await;
        *handle.lock().await = state;
    }

    /// Number of scopes observed so far.
    pub async fn len(&self) -> usize {
        self.scopes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.scopes.read().await.is_empty()
    }
}
