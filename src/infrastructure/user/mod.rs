//! User infrastructure module
//!
//! This module provides the user directory and an in-memory store it can
//! delegate deletions to.

mod directory;
mod store;

pub use directory::UserDirectory;
pub use store::InMemoryUserStore;
