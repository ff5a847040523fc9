// Rust guideline compliant 2026-02-06

//! Comment policy: who may add a discussion comment to a ticket.

use crate::error::{Field, ValidationError};
use crate::models::{Status, Ticket};
use crate::role::{Principal, Relation};

/// Checks whether `principal` may leave a discussion comment on `ticket`.
///
/// # Errors
///
/// Returns a `ticket`-scoped error if:
/// - The ticket is not active
/// - The principal is neither the ticket's author nor staff
pub fn can_comment(principal: &Principal, ticket: &Ticket) -> Result<(), ValidationError> {
    if ticket.status != Status::Active {
        return Err(ValidationError::field(
            Field::Ticket,
            "You cannot comment on a ticket that is not in the active status.",
        ));
    }

    if principal.relation_to(ticket) == Relation::Stranger {
        return Err(ValidationError::field(
            Field::Ticket,
            "Only the author or an administrator can leave a comment on the ticket.",
        ));
    }

    Ok(())
}
