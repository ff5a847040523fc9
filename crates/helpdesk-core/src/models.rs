// Rust guideline compliant 2026-02-06

//! Core data models for Helpdesk.

use crate::error::{Field, ValidationError};
use crate::identity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a Ticket in the finite state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Ticket was just submitted and awaits triage.
    Active,
    /// Ticket was accepted by staff and is being worked on.
    Processed,
    /// Ticket was turned down by staff.
    Rejected,
    /// Owner asked staff to reconsider a rejected ticket.
    Restored,
    /// Work on the ticket is finished.
    Completed,
}

impl Status {
    /// Every status, in workflow order.
    pub const ALL: [Status; 5] = [
        Status::Active,
        Status::Processed,
        Status::Rejected,
        Status::Restored,
        Status::Completed,
    ];

    /// Returns the lowercase wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Processed => "processed",
            Status::Rejected => "rejected",
            Status::Restored => "restored",
            Status::Completed => "completed",
        }
    }

    /// Parses a status name, ignoring case.
    #[must_use]
    pub fn from_name(value: &str) -> Option<Status> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency of a Ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Needs attention first.
    High,
    /// Default urgency.
    #[default]
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    /// Every priority, most urgent first.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Returns the lowercase wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Parses a priority name, ignoring case.
    #[must_use]
    pub fn from_name(value: &str) -> Option<Priority> {
        Priority::ALL
            .into_iter()
            .find(|priority| priority.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a Comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// Free-form discussion between owner and staff.
    #[default]
    Discussion,
    /// Reason given by staff when rejecting an active ticket.
    Reject,
    /// Reason given by the owner when restoring a rejected ticket.
    Restore,
}

impl Topic {
    /// Returns the lowercase wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Discussion => "discussion",
            Topic::Reject => "reject",
            Topic::Restore => "restore",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique hash-based identifier (format: usr-XXXXXX).
    pub id: String,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Whether the account belongs to staff (administrator).
    #[serde(default)]
    pub is_staff: bool,
    /// Time of registration.
    pub created: DateTime<Utc>,
}

impl User {
    /// Creates a new User with a generated ID.
    pub fn new(
        username: String,
        email: String,
        first_name: String,
        last_name: String,
        is_staff: bool,
    ) -> Self {
        let created = Utc::now();
        let id = identity::generate_id(
            identity::USER_PREFIX,
            &[&username, &email],
            created.timestamp_micros(),
            0,
        );
        Self {
            id,
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            is_staff,
            created,
        }
    }

    /// Returns "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Validates the User data.
    ///
    /// # Errors
    ///
    /// Returns a field-scoped error if:
    /// - Username, first name or last name is blank
    /// - Email is blank or has no `@`
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::required(Field::Username));
        }
        if self.username.chars().any(char::is_whitespace) {
            return Err(ValidationError::field(
                Field::Username,
                "Username cannot contain whitespace.",
            ));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::required(Field::Email));
        }
        if !self.email.contains('@') {
            return Err(ValidationError::field(
                Field::Email,
                "Enter a valid email address.",
            ));
        }
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::required(Field::FirstName));
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::required(Field::LastName));
        }
        Ok(())
    }
}

/// A support request and the subject of the status workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique hash-based identifier (format: tkt-XXXXXX).
    pub id: String,
    /// One-line summary; fixed at creation.
    pub title: String,
    /// Detailed description.
    #[serde(default)]
    pub description: String,
    /// Urgency.
    #[serde(default)]
    pub priority: Priority,
    /// Current status in the FSM.
    pub status: Status,
    /// ID of the user who submitted the ticket; fixed at creation.
    pub owner: String,
    /// Time of submission.
    pub created: DateTime<Utc>,
    /// Time of the last change.
    pub updated: DateTime<Utc>,
}

impl Ticket {
    /// Creates a new active Ticket owned by `owner`.
    pub fn new(title: String, owner: String) -> Self {
        let created = Utc::now();
        let title = title.trim().to_string();
        let id = identity::generate_id(
            identity::TICKET_PREFIX,
            &[&title, &owner],
            created.timestamp_micros(),
            0,
        );
        Self {
            id,
            title,
            description: String::new(),
            priority: Priority::default(),
            status: Status::Active,
            owner,
            created,
            updated: created,
        }
    }

    /// Validates the Ticket data.
    ///
    /// # Errors
    ///
    /// Returns a field-scoped error if the title is blank.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::required(Field::Title));
        }
        Ok(())
    }

    /// Records a change at the current time.
    pub fn touch(&mut self) {
        self.updated = Utc::now();
    }
}

/// An append-only note attached to a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique hash-based identifier (format: cmt-XXXXXX).
    pub id: String,
    /// ID of the ticket the comment belongs to.
    pub ticket: String,
    /// ID of the user who wrote the comment.
    pub author: String,
    /// Discussion, or the side effect of a reject/restore.
    #[serde(default)]
    pub topic: Topic,
    /// Comment text.
    pub body: String,
    /// Time of creation.
    pub created: DateTime<Utc>,
}

impl Comment {
    /// Creates a new Comment.
    ///
    /// The body is trimmed.
    ///
    /// # Errors
    ///
    /// Returns a `body` error if the trimmed body is empty.
    pub fn new(
        ticket: String,
        author: String,
        topic: Topic,
        body: &str,
    ) -> std::result::Result<Self, ValidationError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(ValidationError::required(Field::Body));
        }

        let created = Utc::now();
        let id = identity::generate_id(
            identity::COMMENT_PREFIX,
            &[&ticket, &author, body],
            created.timestamp_micros(),
            0,
        );
        Ok(Self {
            id,
            ticket,
            author,
            topic,
            body: body.to_string(),
            created,
        })
    }
}
