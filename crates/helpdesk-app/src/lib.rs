// Rust guideline compliant 2026-02-09

//! Shared application services for Helpdesk.
//!
//! This crate provides reusable, non-CLI-specific services for repository
//! discovery, principal resolution, ticket and comment workflows, list
//! filtering, and standardized response envelopes.

pub mod comments;
pub mod error;
pub mod ids;
pub mod list;
pub mod principal;
pub mod repo;
pub mod response;
pub mod tickets;
pub mod transition;
pub mod users;

pub use comments::{add_comment, list_comments};
pub use error::{AppError, ErrorCode, Result};
pub use ids::resolve_ticket_id;
pub use list::{filter_tickets, parse_priority, parse_status, ListOptions};
pub use principal::resolve_principal;
pub use repo::RepoContext;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use tickets::{
    create_ticket, edit_ticket, list_tickets, restored_tickets, show_ticket, TicketDetail,
    TicketDraft, TicketEdit,
};
pub use transition::{apply_status_transition, TransitionOutcome};
pub use users::{list_users, register_user, NewUser};
