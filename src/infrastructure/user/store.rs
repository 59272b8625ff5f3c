//! In-memory user store implementation

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::{DomainError, UserId, UserStore};

/// In-memory implementation of UserStore
///
/// Every id answers `false` unless an answer was configured for it. The
/// store can be switched to unavailable, in which case every deletion fails.
#[derive(Debug)]
pub struct InMemoryUserStore {
    answers: RwLock<HashMap<UserId, bool>>,
    available: RwLock<bool>,
    /// Ids received by `delete`, in call order
    calls: RwLock<Vec<UserId>>,
}

impl InMemoryUserStore {
    /// Create a new store that reports nothing as deleted
    pub fn new() -> Self {
        Self {
            answers: RwLock::new(HashMap::new()),
            available: RwLock::new(true),
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Create a store with preconfigured answers
    pub fn with_answers(answers: impl IntoIterator<Item = (UserId, bool)>) -> Self {
        let store = Self::new();
        store.answers.write().extend(answers);
        store
    }

    /// Configure what `delete` reports for an id
    pub fn set_answer(&self, id: UserId, deleted: bool) {
        self.answers.write().insert(id, deleted);
    }

    /// Mark the store as reachable or not
    pub fn set_available(&self, available: bool) {
        *self.available.write() = available;
    }

    pub fn is_available(&self) -> bool {
        *self.available.read()
    }

    /// Ids passed to `delete` so far
    pub fn delete_calls(&self) -> Vec<UserId> {
        self.calls.read().clone()
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserStore {
    fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        self.calls.write().push(id);

        if !self.is_available() {
            return Err(DomainError::storage("User store is not available"));
        }

        let deleted = self.answers.read().get(&id).copied().unwrap_or(false);
        debug!(user_id = %id, deleted, "Store processed delete");

        Ok(deleted)
    }
}
