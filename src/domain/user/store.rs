//! User store trait

use super::entity::UserId;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Capability to delete users from the backing store.
///
/// The store owns persistence and durability. Callers only learn whether the
/// deletion happened; any failure is reported as an error.
#[cfg_attr(test, automock)]
pub trait UserStore: Send + Sync {
    /// Delete the user with the given id, returning whether anything was deleted
    fn delete(&self, id: UserId) -> Result<bool, DomainError>;
}
