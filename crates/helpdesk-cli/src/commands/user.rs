// Rust guideline compliant 2026-02-06

//! Implementation of `hd user` commands.

use crate::commands::Session;
use crate::OutputFormatter;
use anyhow::Result;
use helpdesk_app::{list_users, register_user, NewUser};

/// Registers a user.
///
/// # Errors
///
/// Returns a validation error if a field is invalid or already taken.
pub fn add(session: &Session, new_user: NewUser, formatter: &dyn OutputFormatter) -> Result<String> {
    let user = register_user(session.storage(), new_user)?;
    Ok(formatter.format_user(&user))
}

/// Lists registered users.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list(session: &Session, formatter: &dyn OutputFormatter) -> Result<String> {
    let users = list_users(session.storage())?;
    Ok(formatter.format_user_list(&users))
}
