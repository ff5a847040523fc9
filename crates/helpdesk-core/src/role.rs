// Rust guideline compliant 2026-02-06

//! Principals and their standing towards a ticket.
//!
//! The `is_staff` flag is turned into a [`Role`] once, when the principal is
//! resolved, and the workflow rules then reason about a [`Relation`] to the
//! ticket at hand rather than re-checking booleans.

use crate::models::{Ticket, User};
use serde::Serialize;

/// Account-wide role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Ordinary user who submits tickets.
    User,
    /// Staff member who triages tickets.
    Admin,
}

impl Role {
    /// Maps the stored staff flag to a role.
    #[must_use]
    pub fn from_staff_flag(is_staff: bool) -> Self {
        if is_staff {
            Role::Admin
        } else {
            Role::User
        }
    }
}

/// How a principal stands towards one ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Staff; acts on any ticket with administrator rights.
    Admin,
    /// Non-staff author of the ticket.
    Owner,
    /// Non-staff user who did not submit the ticket.
    Stranger,
}

/// The authenticated actor performing a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    /// ID of the underlying user.
    pub user_id: String,
    /// Login name, for messages and logs.
    pub username: String,
    /// Resolved role.
    pub role: Role,
}

impl Principal {
    /// Builds a principal from a stored user.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            username: user.username.clone(),
            role: Role::from_staff_flag(user.is_staff),
        }
    }

    /// Returns true for staff.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Returns true if the principal submitted `ticket`.
    #[must_use]
    pub fn owns(&self, ticket: &Ticket) -> bool {
        self.user_id == ticket.owner
    }

    /// Resolves the principal's relation to `ticket`.
    ///
    /// Staff always act as `Admin`, even on tickets they submitted themselves.
    #[must_use]
    pub fn relation_to(&self, ticket: &Ticket) -> Relation {
        match self.role {
            Role::Admin => Relation::Admin,
            Role::User if self.owns(ticket) => Relation::Owner,
            Role::User => Relation::Stranger,
        }
    }
}
