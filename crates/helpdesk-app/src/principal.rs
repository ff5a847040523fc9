// Rust guideline compliant 2026-02-09

//! Resolution of the acting principal.

use crate::error::{AppError, Result};
use helpdesk_core::{Principal, Snapshot};

/// Looks up `username` and turns the user into a [`Principal`].
///
/// The lookup is case-insensitive, matching how usernames are kept unique.
///
/// # Errors
///
/// Returns `UnknownUser` if no such user is registered.
pub fn resolve_principal(snapshot: &Snapshot, username: &str) -> Result<Principal> {
    let username = username.trim();
    snapshot
        .user_by_username(username)
        .map(Principal::from_user)
        .ok_or_else(|| AppError::UnknownUser(username.to_string()))
}
