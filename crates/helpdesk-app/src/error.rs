// Rust guideline compliant 2026-02-09

//! Error handling for Helpdesk application services.

use helpdesk_core::{Error as CoreError, ValidationError};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and JSON responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested entity was not found.
    NotFound,
    /// The provided identifier matched multiple entities.
    AmbiguousId,
    /// A field-scoped domain rule rejected the request.
    ValidationError,
    /// The principal may not act on the target at all.
    PermissionDenied,
    /// A commit would have broken referential integrity.
    IntegrityError,
    /// A stored record could not be read.
    InvalidRecord,
    /// IO failure while reading or writing repository data.
    IoError,
    /// The repository has not been initialized.
    RepoNotInitialized,
    /// The acting username is not registered.
    UnknownUser,
    /// The request included invalid inputs.
    InvalidInput,
    /// JSON serialization or parsing failed.
    JsonError,
    /// Configuration could not be loaded.
    ConfigError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Repository is missing or not initialized.
    #[error("Helpdesk repository not initialized at {path}. Run 'hd init' first.")]
    RepoNotInitialized {
        /// Path where `.helpdesk` was expected.
        path: PathBuf,
    },

    /// The acting username does not match a registered user.
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::RepoNotInitialized { .. } => ErrorCode::RepoNotInitialized,
            AppError::UnknownUser(_) => ErrorCode::UnknownUser,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => ErrorCode::NotFound,
                CoreError::AmbiguousId(_, _) => ErrorCode::AmbiguousId,
                CoreError::Validation(err) if err.is_form_level() => ErrorCode::PermissionDenied,
                CoreError::Validation(_) => ErrorCode::ValidationError,
                CoreError::Integrity(_) => ErrorCode::IntegrityError,
                CoreError::InvalidRecord(_) => ErrorCode::InvalidRecord,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
                CoreError::Config(_) => ErrorCode::ConfigError,
            },
        }
    }

    /// Returns the validation error, if this is one.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            AppError::Core(core) => core.as_validation(),
            _ => None,
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::RepoNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::UnknownUser(username) => Some(serde_json::json!({
                "username": username,
            })),
            AppError::InvalidInput(_) => None,
            AppError::Io(_) => None,
            AppError::Core(core) => match core {
                CoreError::AmbiguousId(partial, matches) => Some(serde_json::json!({
                    "partial": partial,
                    "matches": matches,
                })),
                CoreError::NotFound { kind, id } => Some(serde_json::json!({
                    "kind": kind,
                    "id": id,
                })),
                CoreError::Validation(err) => err.field.map(|field| {
                    serde_json::json!({
                        "field": field.as_str(),
                    })
                }),
                _ => None,
            },
        }
    }
}
