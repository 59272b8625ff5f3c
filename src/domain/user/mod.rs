//! User domain module
//!
//! This module contains the user record and the store capability the
//! directory delegates deletions to.

mod entity;
mod store;

pub use entity::{User, UserId};
pub use store::UserStore;

#[cfg(test)]
pub use store::MockUserStore;
