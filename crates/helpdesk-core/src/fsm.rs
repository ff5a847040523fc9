// Rust guideline compliant 2026-02-06

//! Finite State Machine module for ticket status transitions.
//!
//! The workflow is a table of named transitions. Each row fixes the source
//! and target status, the actor allowed to trigger it, what it demands of
//! the accompanying comment, and its effect:
//!
//! - Accept:   Active | Restored → Processed (admin)
//! - Reject:   Active → Rejected (admin, comment required)
//! - Discard:  Restored → Rejected (admin, deletes the ticket)
//! - Complete: Processed → Completed (admin)
//! - Restore:  Rejected → Restored (owner, comment optional)

use crate::error::{Field, ValidationError};
use crate::models::{Status, Ticket, Topic};
use crate::role::{Principal, Relation};
use serde::Serialize;

/// Named workflow transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Staff take the ticket on.
    Accept,
    /// Staff turn an active ticket down, with a reason.
    Reject,
    /// Staff turn a restored ticket down for good; the ticket is deleted.
    Discard,
    /// Staff finish a processed ticket.
    Complete,
    /// The owner asks staff to reconsider a rejected ticket.
    Restore,
}

impl Transition {
    /// Returns the verb used in messages.
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Transition::Accept => "accept",
            Transition::Reject => "reject",
            Transition::Discard => "discard",
            Transition::Complete => "complete",
            Transition::Restore => "restore",
        }
    }
}

/// Who may trigger a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    /// Staff only.
    Admin,
    /// The non-staff owner of the ticket only.
    Owner,
}

impl Actor {
    /// Returns true if a principal with `relation` qualifies as this actor.
    #[must_use]
    pub fn permits(&self, relation: Relation) -> bool {
        matches!(
            (self, relation),
            (Actor::Admin, Relation::Admin) | (Actor::Owner, Relation::Owner)
        )
    }
}

/// What a transition demands of the accompanying comment text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "rule", content = "topic")]
pub enum CommentRule {
    /// No comment is taken; any text supplied is ignored.
    Hidden,
    /// Non-blank text is mandatory and is stored with the given topic.
    Required(Topic),
    /// Text is stored with the given topic if present.
    Optional(Topic),
}

/// What applying a transition does to the ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// The status field is updated in place.
    UpdateStatus,
    /// The ticket and its comments are deleted.
    Delete,
}

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionRule {
    /// Name of the transition.
    pub transition: Transition,
    /// Required current status.
    pub from: Status,
    /// Requested status.
    pub to: Status,
    /// Who may trigger it.
    pub actor: Actor,
    /// Comment requirement.
    pub comment: CommentRule,
    /// Effect on the ticket.
    pub effect: Effect,
}

/// The complete workflow.
pub const TRANSITIONS: &[TransitionRule] = &[
    TransitionRule {
        transition: Transition::Accept,
        from: Status::Active,
        to: Status::Processed,
        actor: Actor::Admin,
        comment: CommentRule::Hidden,
        effect: Effect::UpdateStatus,
    },
    TransitionRule {
        transition: Transition::Reject,
        from: Status::Active,
        to: Status::Rejected,
        actor: Actor::Admin,
        comment: CommentRule::Required(Topic::Reject),
        effect: Effect::UpdateStatus,
    },
    TransitionRule {
        transition: Transition::Accept,
        from: Status::Restored,
        to: Status::Processed,
        actor: Actor::Admin,
        comment: CommentRule::Hidden,
        effect: Effect::UpdateStatus,
    },
    TransitionRule {
        transition: Transition::Discard,
        from: Status::Restored,
        to: Status::Rejected,
        actor: Actor::Admin,
        comment: CommentRule::Hidden,
        effect: Effect::Delete,
    },
    TransitionRule {
        transition: Transition::Complete,
        from: Status::Processed,
        to: Status::Completed,
        actor: Actor::Admin,
        comment: CommentRule::Hidden,
        effect: Effect::UpdateStatus,
    },
    TransitionRule {
        transition: Transition::Restore,
        from: Status::Rejected,
        to: Status::Restored,
        actor: Actor::Owner,
        comment: CommentRule::Optional(Topic::Restore),
        effect: Effect::UpdateStatus,
    },
];

/// Looks up the table row for `from → to`.
#[must_use]
pub fn find_rule(from: Status, to: Status) -> Option<&'static TransitionRule> {
    TRANSITIONS
        .iter()
        .find(|rule| rule.from == from && rule.to == to)
}

impl Status {
    /// Checks whether the table has an edge to `target`, for any actor.
    #[must_use]
    pub fn can_transition_to(&self, target: Status) -> bool {
        find_rule(*self, target).is_some()
    }

    /// Returns the statuses reachable in one step, for any actor.
    #[must_use]
    pub fn valid_transitions(&self) -> Vec<Status> {
        TRANSITIONS
            .iter()
            .filter(|rule| rule.from == *self)
            .map(|rule| rule.to)
            .collect()
    }

    /// Returns true if no transition leaves this status.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !TRANSITIONS.iter().any(|rule| rule.from == *self)
    }
}

/// Comment the engine must write alongside a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedComment {
    /// Topic of the comment.
    pub topic: Topic,
    /// Trimmed, non-empty text.
    pub body: String,
}

/// A validated transition, ready to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionPlan {
    /// Matching table row.
    pub rule: &'static TransitionRule,
    /// Comment to create in the same unit of work, if any.
    pub comment: Option<PlannedComment>,
}

impl TransitionPlan {
    /// Returns the transition name.
    #[must_use]
    pub fn transition(&self) -> Transition {
        self.rule.transition
    }

    /// Returns the target status.
    #[must_use]
    pub fn target(&self) -> Status {
        self.rule.to
    }

    /// Returns true if applying the plan deletes the ticket.
    #[must_use]
    pub fn deletes_ticket(&self) -> bool {
        self.rule.effect == Effect::Delete
    }
}

/// Validates a requested status change.
///
/// Checks run in order and the first failure is returned:
/// 1. a status was requested
/// 2. it differs from the current one
/// 3. it is not `Active`
/// 4. a non-staff principal owns the ticket
/// 5. the principal is the actor the target status requires
/// 6. the table has an edge from the current status
/// 7. the comment requirement of that edge is met
///
/// # Arguments
///
/// * `ticket` - The ticket to change
/// * `requested` - Desired status
/// * `comment` - Accompanying text; blank counts as absent
/// * `principal` - Who is asking
///
/// # Errors
///
/// Returns a `status`- or `comment`-scoped error, or a form-level error when
/// a non-staff principal targets someone else's ticket.
pub fn plan_transition(
    ticket: &Ticket,
    requested: Option<Status>,
    comment: Option<&str>,
    principal: &Principal,
) -> Result<TransitionPlan, ValidationError> {
    let target = requested.ok_or_else(|| ValidationError::required(Field::Status))?;

    if target == ticket.status {
        return Err(ValidationError::field(
            Field::Status,
            "The new status should be different from the current status.",
        ));
    }

    if target == Status::Active {
        return Err(ValidationError::field(
            Field::Status,
            "A ticket cannot be moved back to the active status.",
        ));
    }

    let relation = principal.relation_to(ticket);
    if relation == Relation::Stranger {
        return Err(ValidationError::form(
            "You can only change the status of your own tickets.",
        ));
    }

    let candidates: Vec<&'static TransitionRule> =
        TRANSITIONS.iter().filter(|rule| rule.to == target).collect();
    let first = candidates.first().ok_or_else(|| {
        ValidationError::field(Field::Status, format!("Unsupported status: {}", target))
    })?;

    if !candidates.iter().any(|rule| rule.actor.permits(relation)) {
        let message = match first.actor {
            Actor::Admin => format!(
                "Only an administrator can {} a ticket.",
                first.transition.verb()
            ),
            Actor::Owner => format!(
                "An administrator cannot {} a ticket.",
                first.transition.verb()
            ),
        };
        return Err(ValidationError::field(Field::Status, message));
    }

    let rule = candidates
        .into_iter()
        .find(|rule| rule.from == ticket.status)
        .ok_or_else(|| {
            ValidationError::field(
                Field::Status,
                format!(
                    "Cannot change status from {} to {}.",
                    ticket.status, target
                ),
            )
        })?;

    let comment = plan_comment(rule, comment)?;
    Ok(TransitionPlan { rule, comment })
}

fn plan_comment(
    rule: &TransitionRule,
    comment: Option<&str>,
) -> Result<Option<PlannedComment>, ValidationError> {
    let text = comment.map(str::trim).filter(|text| !text.is_empty());

    match rule.comment {
        CommentRule::Hidden => Ok(None),
        CommentRule::Required(topic) => {
            let body = text.ok_or_else(|| ValidationError::required(Field::Comment))?;
            Ok(Some(PlannedComment {
                topic,
                body: body.to_string(),
            }))
        }
        CommentRule::Optional(topic) => Ok(text.map(|body| PlannedComment {
            topic,
            body: body.to_string(),
        })),
    }
}

/// Returns the transitions `principal` may trigger on `ticket` right now.
///
/// A front end uses this to decide which actions to offer and whether each
/// one shows a comment box (`Required`/`Optional`) or not (`Hidden`).
#[must_use]
pub fn available_transitions(ticket: &Ticket, principal: &Principal) -> Vec<&'static TransitionRule> {
    let relation = principal.relation_to(ticket);
    TRANSITIONS
        .iter()
        .filter(|rule| rule.from == ticket.status && rule.actor.permits(relation))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_no_duplicate_edges() {
        for (i, a) in TRANSITIONS.iter().enumerate() {
            for b in &TRANSITIONS[i + 1..] {
                assert!(
                    !(a.from == b.from && a.to == b.to),
                    "duplicate edge {:?} → {:?}",
                    a.from,
                    a.to
                );
            }
        }
    }

    #[test]
    fn test_active_is_never_a_target() {
        assert!(TRANSITIONS.iter().all(|rule| rule.to != Status::Active));
    }

    #[test]
    fn test_only_discard_deletes() {
        for rule in TRANSITIONS {
            assert_eq!(
                rule.effect == Effect::Delete,
                rule.transition == Transition::Discard
            );
        }
    }

    #[test]
    fn test_completed_is_terminal() {
        assert!(Status::Completed.is_terminal());
        assert!(!Status::Active.is_terminal());
        assert!(!Status::Restored.is_terminal());
    }
}
