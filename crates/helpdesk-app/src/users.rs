// Rust guideline compliant 2026-02-09

//! User registration and lookup.

use crate::error::Result;
use helpdesk_core::{Storage, User};
use tracing::info;

/// Input for registering a user.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    /// Login name; unique, case-insensitive.
    pub username: String,
    /// Email address; unique, case-insensitive.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Whether the user is staff.
    pub is_staff: bool,
}

/// Registers a new user.
///
/// # Errors
///
/// Returns a validation error if a field is invalid or the username or email
/// is already taken.
pub fn register_user(storage: &Storage, new_user: NewUser) -> Result<User> {
    let user = User::new(
        new_user.username,
        new_user.email,
        new_user.first_name,
        new_user.last_name,
        new_user.is_staff,
    );
    let user = storage.transaction(|tx| tx.insert_user(user))?;
    info!(user = %user.id, username = %user.username, staff = user.is_staff, "user registered");
    Ok(user)
}

/// Returns all users ordered by username.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_users(storage: &Storage) -> Result<Vec<User>> {
    let mut users = storage.load()?.users().to_vec();
    users.sort_by(|a, b| a.username.to_lowercase().cmp(&b.username.to_lowercase()));
    Ok(users)
}
