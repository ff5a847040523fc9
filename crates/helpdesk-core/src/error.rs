// Rust guideline compliant 2026-02-06

//! Error types for the Helpdesk core library.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result type alias for Helpdesk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Kind of stored entity, used to label lookups that fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A registered user.
    User,
    /// A support ticket.
    Ticket,
    /// A ticket comment.
    Comment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::User => "User",
            EntityKind::Ticket => "Ticket",
            EntityKind::Comment => "Comment",
        };
        f.write_str(name)
    }
}

/// Input field a validation error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Requested ticket status.
    Status,
    /// Comment text accompanying a status change.
    Comment,
    /// Ticket a discussion comment targets.
    Ticket,
    /// Body of a discussion comment.
    Body,
    /// Ticket title.
    Title,
    /// Ticket priority.
    Priority,
    /// Account username.
    Username,
    /// Account email address.
    Email,
    /// Account first name.
    FirstName,
    /// Account last name.
    LastName,
}

impl Field {
    /// Returns the wire name of the field.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Status => "status",
            Field::Comment => "comment",
            Field::Ticket => "ticket",
            Field::Body => "body",
            Field::Title => "title",
            Field::Priority => "priority",
            Field::Username => "username",
            Field::Email => "email",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recoverable, user-visible rule violation.
///
/// Field-scoped errors let a front end highlight the offending input;
/// errors without a field are form-level (typically a role mismatch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Offending field, if the error is field-scoped.
    pub field: Option<Field>,
    /// Human-readable message.
    pub message: String,
}

impl ValidationError {
    /// Creates an error scoped to `field`.
    pub fn field(field: Field, message: impl Into<String>) -> Self {
        Self {
            field: Some(field),
            message: message.into(),
        }
    }

    /// Creates a form-level error.
    pub fn form(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    /// Creates the standard "required" error for `field`.
    pub fn required(field: Field) -> Self {
        Self::field(field, "This field is required.")
    }

    /// Returns true if the error is not attached to a field.
    #[must_use]
    pub fn is_form_level(&self) -> bool {
        self.field.is_none()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(f, "{}: {}", field, self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Error types for Helpdesk operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A domain rule rejected the request.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A referenced entity does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up.
        kind: EntityKind,
        /// Identifier that failed to resolve.
        id: String,
    },

    /// A stored record could not be understood.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// A commit would break referential integrity or an immutable field.
    #[error("Integrity violation: {0}")]
    Integrity(String),

    /// Ambiguous partial ID.
    #[error("Ambiguous ID: {0} matches {1:?}")]
    AmbiguousId(String, Vec<String>),

    /// Configuration could not be loaded or failed validation.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Shorthand for a not-found error.
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Returns the validation error, if this is one.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }
}
