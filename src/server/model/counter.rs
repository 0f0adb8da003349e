//! Domain model for the per-scope counting state.

use serenity::all::UserId;

/// Counting state of a single scope.
///
/// A scope is either enabled, in which case `count` holds the length of the current
/// streak, or disabled, in which case `count` is `None` and every count attempt is
/// ignored until the scope is enabled again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    /// Current count, `None` while counting is disabled for the scope.
    pub count: Option<u64>,
    /// Largest count reached before any reset.
    pub highest_count: u64,
    /// Author of the last accepted count.
    pub previous_sender: Option<UserId>,
}

impl CounterState {
    /// Creates the state of a scope that has never been observed before.
    ///
    /// # Returns
    /// - `CounterState` - Enabled state with a count of 0 and no history
    pub fn new() -> Self {
        Self {
            count: Some(0),
            highest_count: 0,
            previous_sender: None,
        }
    }

    /// Count in its sentinel form, `-1` while disabled.
    pub fn raw_count(&self) -> i64 {
        self.count
            .map(|count| i64::try_from(count).unwrap_or(i64::MAX))
            .unwrap_or(-1)
    }

    /// Number the next participant must post, `None` while disabled.
    pub fn expected(&self) -> Option<u64> {
        self.count.map(|count| count.saturating_add(1))
    }

    /// Restarts counting at 0, keeping the high-water mark.
    pub fn enable(&mut self) {
        self.count = Some(0);
        self.previous_sender = None;
    }

    pub fn disable(&mut self) {
        self.count = None;
    }

    /// Accepts a correct count from `author`.
    pub fn advance(&mut self, author: UserId) {
        if let Some(count) = self.count.as_mut() {
            *count += 1;
            self.previous_sender = Some(author);
        }
    }

    /// Resets the streak after a violation.
    ///
    /// The high-water mark is raised to the pre-reset count if that count exceeds it.
    ///
    /// # Returns
    /// - `true` - The pre-reset count became the new high-water mark
    /// - `false` - The high-water mark was kept
    pub fn reset(&mut self) -> bool {
        let count = self.count.unwrap_or(0);
        let new_record = self.highest_count < count;
        if new_record {
            self.highest_count = count;
        }

        self.count = Some(0);
        self.previous_sender = None;

        new_record
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new()
    }
}
