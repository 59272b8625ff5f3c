//! Command execution against a directory

use std::collections::BTreeMap;

use serde_json::{Value, json};
use tracing::info;

use super::Command;
use crate::domain::{DomainError, UserId, UserStore};
use crate::infrastructure::user::UserDirectory;

/// Run a command and return its JSON output
pub fn execute<S: UserStore>(
    directory: &UserDirectory<S>,
    command: &Command,
) -> Result<Value, DomainError> {
    match command {
        Command::List => Ok(json!(directory.get_all())),
        Command::Login(args) => {
            let user = directory.login(args.username.as_deref(), args.password.as_deref())?;
            Ok(json!({ "user": user }))
        }
        Command::Index => {
            let by_id: BTreeMap<UserId, _> = directory.get_all_converted_by_id().into_iter().collect();
            Ok(json!(by_id))
        }
        Command::Delete { id } => {
            let id = UserId::new(*id);
            let deleted = directory.delete(id)?;
            info!(user_id = %id, deleted, "Delete finished");
            Ok(json!({ "id": id, "deleted": deleted }))
        }
    }
}
