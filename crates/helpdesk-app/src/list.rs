// Rust guideline compliant 2026-02-09

//! Listing and filtering helpers for Helpdesk.

use crate::error::Result;
use helpdesk_core::{Field, Priority, Status, Ticket, ValidationError};
use rayon::prelude::*;

/// List options for filtering tickets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Filter by status.
    pub status: Option<Status>,
    /// Filter by priority.
    pub priority: Option<Priority>,
}

fn invalid_choice(field: Field, value: &str) -> ValidationError {
    ValidationError::field(
        field,
        format!(
            "Select a valid choice. {} is not one of the available choices.",
            value
        ),
    )
}

/// Parses a status name such as `active` or `Rejected`.
///
/// # Errors
///
/// Returns a `status`-scoped validation error for unknown names.
pub fn parse_status(value: &str) -> Result<Status> {
    Status::from_name(value).ok_or_else(|| invalid_choice(Field::Status, value).into())
}

/// Parses a priority name such as `high`.
///
/// # Errors
///
/// Returns a `priority`-scoped validation error for unknown names.
pub fn parse_priority(value: &str) -> Result<Priority> {
    Priority::from_name(value).ok_or_else(|| invalid_choice(Field::Priority, value).into())
}

/// Filters tickets by `options` and sorts them newest first.
pub fn filter_tickets(tickets: Vec<Ticket>, options: &ListOptions) -> Vec<Ticket> {
    const PARALLEL_THRESHOLD: usize = 1_000;

    let predicate = |ticket: &Ticket| {
        if let Some(status) = options.status {
            if ticket.status != status {
                return false;
            }
        }
        if let Some(priority) = options.priority {
            if ticket.priority != priority {
                return false;
            }
        }
        true
    };

    let mut tickets: Vec<Ticket> = if tickets.len() >= PARALLEL_THRESHOLD {
        tickets.into_par_iter().filter(|t| predicate(t)).collect()
    } else {
        tickets.into_iter().filter(predicate).collect()
    };

    tickets.sort_by(|a, b| b.created.cmp(&a.created));
    tickets
}
