// Rust guideline compliant 2026-02-09

//! ID resolution helpers for Helpdesk.

use crate::error::Result;
use helpdesk_core::{identity, EntityKind, Snapshot};

/// Resolves a partial ticket ID to its canonical full ID.
///
/// # Arguments
///
/// * `snapshot` - Records to match against
/// * `partial` - Partial or full ticket ID
///
/// # Errors
///
/// Returns an error if the partial ID is too short, ambiguous, or not found.
pub fn resolve_ticket_id(snapshot: &Snapshot, partial: &str) -> Result<String> {
    let ids = snapshot.tickets().iter().map(|ticket| ticket.id.as_str());
    Ok(identity::resolve_partial_id(
        EntityKind::Ticket,
        partial,
        ids,
    )?)
}
