//! User entity and related types

use serde::{Deserialize, Serialize};

/// User identifier, assigned by whoever registers the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the inner integer value
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<UserId> for i32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User record held by the directory
///
/// The password is kept and compared in cleartext. It is accepted when
/// deserializing seed data but never serialized back out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    #[serde(skip_serializing)]
    password: String,
}

impl User {
    /// Create a new user
    pub fn new(id: impl Into<UserId>, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Exact, case-sensitive match on both credentials
    pub fn has_credentials(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
