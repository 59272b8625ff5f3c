//! User Directory
//!
//! A minimal in-memory user directory with:
//! - Ordered registration of user records
//! - Credential lookup for login
//! - An id-indexed projection of the directory
//! - Deletion delegated to a pluggable user store

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use infrastructure::user::{InMemoryUserStore, UserDirectory};

/// Build a directory seeded from configuration, backed by an in-memory store
pub fn create_directory_with_config(config: &AppConfig) -> UserDirectory<InMemoryUserStore> {
    let store = InMemoryUserStore::with_answers(
        config.store.deletable.iter().map(|id| (*id, true)),
    );
    store.set_available(config.store.available);

    let directory = UserDirectory::new(Arc::new(store));
    directory.add(config.directory.users.iter().cloned());

    info!(
        users = directory.len(),
        store_available = config.store.available,
        "User directory ready"
    );

    directory
}
