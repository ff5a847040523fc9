// Rust guideline compliant 2026-02-06

//! Helpdesk Core Library
//!
//! This crate provides the foundational components for the Helpdesk ticketing system:
//! - Data models (User, Ticket, Comment, Status, Priority, Topic)
//! - Role resolution (Principal, Relation)
//! - FSM logic (transition table, validation, available transitions)
//! - Comment policy and ticket visibility rules
//! - Storage engine (JSONL records, exclusive locking, atomic transactions)
//! - Hash ID generation and resolution
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod fsm;
pub mod identity;
pub mod models;
pub mod policy;
pub mod role;
pub mod storage;
pub mod visibility;

pub use config::{Config, OutputFormat};
pub use error::{EntityKind, Error, Field, Result, ValidationError};
pub use fsm::{
    available_transitions, plan_transition, Actor, CommentRule, Effect, Transition,
    TransitionPlan, TransitionRule,
};
pub use models::{Comment, Priority, Status, Ticket, Topic, User};
pub use policy::can_comment;
pub use role::{Principal, Relation, Role};
pub use storage::{Snapshot, Storage, TicketQuery, Transaction};
pub use visibility::{
    can_edit, can_view, is_listed, restored_tickets, visible_tickets, VisibilityOptions,
};
