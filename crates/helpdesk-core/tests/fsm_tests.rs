// Rust guideline compliant 2026-02-06

//! Unit tests for the FSM module.
//!
//! These tests walk the transition table through `plan_transition` for each
//! actor and check the rejection order and messages.

use helpdesk_core::fsm::{find_rule, PlannedComment};
use helpdesk_core::{
    available_transitions, plan_transition, CommentRule, Field, Principal, Role, Status, Ticket,
    Topic, Transition,
};

const OWNER_ID: &str = "usr-000001";

fn owner() -> Principal {
    Principal {
        user_id: OWNER_ID.to_string(),
        username: "owner".to_string(),
        role: Role::User,
    }
}

fn stranger() -> Principal {
    Principal {
        user_id: "usr-000002".to_string(),
        username: "stranger".to_string(),
        role: Role::User,
    }
}

fn admin() -> Principal {
    Principal {
        user_id: "usr-000003".to_string(),
        username: "admin".to_string(),
        role: Role::Admin,
    }
}

fn ticket_in(status: Status) -> Ticket {
    let mut ticket = Ticket::new("Broken laptop".to_string(), OWNER_ID.to_string());
    ticket.status = status;
    ticket
}

#[test]
fn test_missing_status_is_rejected() {
    let err = plan_transition(&ticket_in(Status::Active), None, None, &admin()).unwrap_err();
    assert_eq!(err.field, Some(Field::Status));
    assert!(err.message.contains("required"));
}

#[test]
fn test_same_status_is_rejected_for_every_actor() {
    for status in Status::ALL {
        for principal in [owner(), stranger(), admin()] {
            let err = plan_transition(&ticket_in(status), Some(status), Some("x"), &principal)
                .unwrap_err();
            assert_eq!(err.field, Some(Field::Status));
            assert!(
                err.message.contains("should be different"),
                "unexpected message: {}",
                err.message
            );
        }
    }
}

#[test]
fn test_active_is_never_a_valid_target() {
    for status in [
        Status::Processed,
        Status::Rejected,
        Status::Restored,
        Status::Completed,
    ] {
        for principal in [owner(), admin()] {
            let err = plan_transition(&ticket_in(status), Some(Status::Active), None, &principal)
                .unwrap_err();
            assert_eq!(err.field, Some(Field::Status));
            assert!(err.message.contains("active"));
        }
    }
}

#[test]
fn test_admin_accepts_active_ticket_without_comment() {
    let plan =
        plan_transition(&ticket_in(Status::Active), Some(Status::Processed), None, &admin())
            .unwrap();
    assert_eq!(plan.transition(), Transition::Accept);
    assert_eq!(plan.target(), Status::Processed);
    assert!(plan.comment.is_none());
}

#[test]
fn test_accept_ignores_comment_text() {
    let plan = plan_transition(
        &ticket_in(Status::Active),
        Some(Status::Processed),
        Some("on it"),
        &admin(),
    )
    .unwrap();
    assert!(plan.comment.is_none());
}

#[test]
fn test_reject_active_requires_comment() {
    for comment in [None, Some(""), Some("   ")] {
        let err = plan_transition(
            &ticket_in(Status::Active),
            Some(Status::Rejected),
            comment,
            &admin(),
        )
        .unwrap_err();
        assert_eq!(err.field, Some(Field::Comment));
        assert!(err.message.contains("required"));
    }
}

#[test]
fn test_reject_active_with_comment_plans_reject_comment() {
    let plan = plan_transition(
        &ticket_in(Status::Active),
        Some(Status::Rejected),
        Some("  duplicate of another ticket "),
        &admin(),
    )
    .unwrap();
    assert_eq!(plan.transition(), Transition::Reject);
    assert!(!plan.deletes_ticket());
    assert_eq!(
        plan.comment,
        Some(PlannedComment {
            topic: Topic::Reject,
            body: "duplicate of another ticket".to_string(),
        })
    );
}

#[test]
fn test_restored_to_rejected_is_discard() {
    for comment in [None, Some("final answer")] {
        let plan = plan_transition(
            &ticket_in(Status::Restored),
            Some(Status::Rejected),
            comment,
            &admin(),
        )
        .unwrap();
        assert_eq!(plan.transition(), Transition::Discard);
        assert!(plan.deletes_ticket());
        assert!(plan.comment.is_none());
    }
}

#[test]
fn test_restored_to_processed_by_admin() {
    let plan = plan_transition(
        &ticket_in(Status::Restored),
        Some(Status::Processed),
        None,
        &admin(),
    )
    .unwrap();
    assert_eq!(plan.transition(), Transition::Accept);
}

#[test]
fn test_complete_requires_processed() {
    let plan = plan_transition(
        &ticket_in(Status::Processed),
        Some(Status::Completed),
        None,
        &admin(),
    )
    .unwrap();
    assert_eq!(plan.transition(), Transition::Complete);

    for status in [Status::Active, Status::Rejected, Status::Restored] {
        let err = plan_transition(&ticket_in(status), Some(Status::Completed), None, &admin())
            .unwrap_err();
        assert_eq!(err.field, Some(Field::Status));
        assert!(err.message.contains("Cannot change status"));
    }
}

#[test]
fn test_owner_cannot_use_admin_transitions() {
    let cases = [
        (Status::Active, Status::Processed, "accept"),
        (Status::Active, Status::Rejected, "reject"),
        (Status::Processed, Status::Completed, "complete"),
    ];
    for (from, to, verb) in cases {
        let err = plan_transition(&ticket_in(from), Some(to), Some("please"), &owner())
            .unwrap_err();
        assert_eq!(err.field, Some(Field::Status));
        assert_eq!(
            err.message,
            format!("Only an administrator can {} a ticket.", verb)
        );
    }
}

#[test]
fn test_owner_restores_rejected_ticket() {
    let plan = plan_transition(&ticket_in(Status::Rejected), Some(Status::Restored), None, &owner())
        .unwrap();
    assert_eq!(plan.transition(), Transition::Restore);
    assert!(plan.comment.is_none());

    let plan = plan_transition(
        &ticket_in(Status::Rejected),
        Some(Status::Restored),
        Some("x"),
        &owner(),
    )
    .unwrap();
    assert_eq!(
        plan.comment,
        Some(PlannedComment {
            topic: Topic::Restore,
            body: "x".to_string(),
        })
    );
}

#[test]
fn test_admin_cannot_restore() {
    let err = plan_transition(
        &ticket_in(Status::Rejected),
        Some(Status::Restored),
        None,
        &admin(),
    )
    .unwrap_err();
    assert_eq!(err.field, Some(Field::Status));
    assert!(err.message.contains("administrator cannot restore"));
}

#[test]
fn test_restore_requires_rejected_source() {
    for status in [Status::Active, Status::Processed, Status::Completed] {
        let err = plan_transition(&ticket_in(status), Some(Status::Restored), None, &owner())
            .unwrap_err();
        assert_eq!(err.field, Some(Field::Status));
    }
}

#[test]
fn test_stranger_is_rejected_at_form_level() {
    for from in Status::ALL {
        for to in Status::ALL {
            if from == to || to == Status::Active {
                continue;
            }
            let err =
                plan_transition(&ticket_in(from), Some(to), Some("x"), &stranger()).unwrap_err();
            assert!(err.is_form_level(), "{:?} → {:?}: {}", from, to, err);
        }
    }
}

#[test]
fn test_completed_is_terminal_for_admin() {
    for to in [Status::Processed, Status::Rejected] {
        let err = plan_transition(&ticket_in(Status::Completed), Some(to), Some("x"), &admin())
            .unwrap_err();
        assert_eq!(err.field, Some(Field::Status));
    }
}

#[test]
fn test_available_transitions_for_admin() {
    let names: Vec<Transition> = available_transitions(&ticket_in(Status::Active), &admin())
        .into_iter()
        .map(|rule| rule.transition)
        .collect();
    assert_eq!(names, vec![Transition::Accept, Transition::Reject]);

    let rules = available_transitions(&ticket_in(Status::Restored), &admin());
    let names: Vec<Transition> = rules.iter().map(|rule| rule.transition).collect();
    assert_eq!(names, vec![Transition::Accept, Transition::Discard]);
    assert!(rules.iter().all(|rule| rule.comment == CommentRule::Hidden));
}

#[test]
fn test_available_transitions_comment_rules() {
    let reject = find_rule(Status::Active, Status::Rejected).unwrap();
    assert_eq!(reject.comment, CommentRule::Required(Topic::Reject));

    let restore = available_transitions(&ticket_in(Status::Rejected), &owner());
    assert_eq!(restore.len(), 1);
    assert_eq!(restore[0].comment, CommentRule::Optional(Topic::Restore));
}

#[test]
fn test_available_transitions_empty_for_stranger_and_terminal() {
    for status in Status::ALL {
        assert!(available_transitions(&ticket_in(status), &stranger()).is_empty());
    }
    assert!(available_transitions(&ticket_in(Status::Completed), &admin()).is_empty());
    assert!(available_transitions(&ticket_in(Status::Active), &owner()).is_empty());
}

#[test]
fn test_valid_transitions_graph() {
    assert_eq!(
        Status::Active.valid_transitions(),
        vec![Status::Processed, Status::Rejected]
    );
    assert_eq!(Status::Processed.valid_transitions(), vec![Status::Completed]);
    assert_eq!(Status::Rejected.valid_transitions(), vec![Status::Restored]);
    assert_eq!(
        Status::Restored.valid_transitions(),
        vec![Status::Processed, Status::Rejected]
    );
    assert!(Status::Completed.valid_transitions().is_empty());
    assert!(!Status::Active.can_transition_to(Status::Restored));
}
