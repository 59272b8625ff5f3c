//! User directory for registration, login lookup and delegated deletion

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::{DomainError, User, UserId, UserStore};

const NULL_CREDENTIALS_MESSAGE: &str = "Username or password is null";

/// In-process directory of known users.
///
/// Users are kept in insertion order. Ids and usernames are not required to
/// be unique. Deletion is forwarded to the store and never removes entries
/// from the directory itself.
#[derive(Debug)]
pub struct UserDirectory<S: UserStore> {
    users: RwLock<Vec<User>>,
    store: Arc<S>,
}

impl<S: UserStore> UserDirectory<S> {
    /// Create an empty directory bound to a store
    pub fn new(store: Arc<S>) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            store,
        }
    }

    /// Append users in the given order
    pub fn add(&self, users: impl IntoIterator<Item = User>) {
        let mut stored = self.users.write();
        let before = stored.len();
        stored.extend(users);

        debug!(added = stored.len() - before, total = stored.len(), "Users added");
    }

    /// Snapshot of all users in insertion order
    pub fn get_all(&self) -> Vec<User> {
        self.users.read().clone()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }

    /// Find the first user whose username and password both match exactly
    pub fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<User>, DomainError> {
        let (Some(username), Some(password)) = (username, password) else {
            return Err(DomainError::invalid_argument(NULL_CREDENTIALS_MESSAGE));
        };

        let user = self
            .users
            .read()
            .iter()
            .find(|u| u.has_credentials(username, password))
            .cloned();

        debug!(username, matched = user.is_some(), "Login lookup");

        Ok(user)
    }

    /// Index users by id. When ids repeat, the user added last wins.
    pub fn get_all_converted_by_id(&self) -> HashMap<UserId, User> {
        self.users
            .read()
            .iter()
            .map(|u| (u.id(), u.clone()))
            .collect()
    }

    /// Delete a user through the store, returning its answer unchanged
    pub fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        debug!(user_id = %id, "Forwarding delete to store");
        self.store.delete(id)
    }
}
