// Rust guideline compliant 2026-02-09

//! End-to-end tests of the ticket workflow against a real record store.

use helpdesk_app::{
    add_comment, apply_status_transition, create_ticket, edit_ticket, list_comments,
    list_tickets, register_user, restored_tickets, show_ticket, AppError, ErrorCode, ListOptions,
    NewUser, RepoContext, TicketDraft, TicketEdit, TransitionOutcome,
};
use helpdesk_core::{Field, Priority, Status, Storage, Ticket, Topic, Transition};
use std::fs;
use tempfile::TempDir;

struct Desk {
    _temp_dir: TempDir,
    storage: Storage,
}

fn desk() -> Desk {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let context = RepoContext::init(temp_dir.path()).expect("Failed to init repository");
    let storage = context.open_storage().expect("Failed to open storage");

    for (username, is_staff) in [("alice", false), ("bob", false), ("root", true)] {
        register_user(
            &storage,
            NewUser {
                username: username.to_string(),
                email: format!("{}@example.com", username),
                first_name: "First".to_string(),
                last_name: "Last".to_string(),
                is_staff,
            },
        )
        .expect("Failed to register user");
    }

    Desk {
        _temp_dir: temp_dir,
        storage,
    }
}

fn open_ticket(desk: &Desk) -> Ticket {
    create_ticket(
        &desk.storage,
        "alice",
        TicketDraft {
            title: "Printer on fire".to_string(),
            description: "Third floor".to_string(),
            priority: Priority::High,
        },
    )
    .expect("Failed to create ticket")
}

fn transition(
    desk: &Desk,
    username: &str,
    ticket: &Ticket,
    status: Status,
    comment: Option<&str>,
) -> Result<TransitionOutcome, AppError> {
    apply_status_transition(&desk.storage, username, &ticket.id, Some(status), comment)
}

fn status_of(desk: &Desk, ticket: &Ticket) -> Status {
    desk.storage
        .load()
        .expect("load")
        .ticket(&ticket.id)
        .expect("ticket exists")
        .status
}

fn field_of(err: &AppError) -> Option<Field> {
    err.as_validation().and_then(|validation| validation.field)
}

/// Drives a ticket to `Rejected` with a staff comment.
fn rejected_ticket(desk: &Desk) -> Ticket {
    let ticket = open_ticket(desk);
    transition(desk, "root", &ticket, Status::Rejected, Some("duplicate")).expect("reject");
    ticket
}

#[test]
fn test_reject_without_comment_requires_comment() {
    let desk = desk();
    let ticket = open_ticket(&desk);

    let err = transition(&desk, "root", &ticket, Status::Rejected, None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);
    assert_eq!(field_of(&err), Some(Field::Comment));
    assert_eq!(status_of(&desk, &ticket), Status::Active);

    let err = transition(&desk, "root", &ticket, Status::Rejected, Some("   ")).unwrap_err();
    assert_eq!(field_of(&err), Some(Field::Comment));
}

#[test]
fn test_reject_with_comment_writes_both() {
    let desk = desk();
    let ticket = open_ticket(&desk);

    let outcome = transition(&desk, "root", &ticket, Status::Rejected, Some("duplicate"))
        .expect("reject");
    match outcome {
        TransitionOutcome::Updated { ticket, comment } => {
            assert_eq!(ticket.status, Status::Rejected);
            let comment = comment.expect("reject comment");
            assert_eq!(comment.topic, Topic::Reject);
            assert_eq!(comment.body, "duplicate");
        }
        other => panic!("unexpected outcome {:?}", other),
    }

    let snapshot = desk.storage.load().expect("load");
    let comments = snapshot.comments_for(&ticket.id);
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].topic, Topic::Reject);
}

#[test]
fn test_restore_without_comment() {
    let desk = desk();
    let ticket = rejected_ticket(&desk);

    let outcome =
        transition(&desk, "alice", &ticket, Status::Restored, None).expect("restore");
    assert!(matches!(
        outcome,
        TransitionOutcome::Updated { comment: None, .. }
    ));
    assert_eq!(status_of(&desk, &ticket), Status::Restored);
    let snapshot = desk.storage.load().expect("load");
    assert_eq!(snapshot.comments_for(&ticket.id).len(), 1);
}

#[test]
fn test_restore_with_comment() {
    let desk = desk();
    let ticket = rejected_ticket(&desk);

    transition(&desk, "alice", &ticket, Status::Restored, Some("x")).expect("restore");

    let snapshot = desk.storage.load().expect("load");
    let comments = snapshot.comments_for(&ticket.id);
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[1].topic, Topic::Restore);
    assert_eq!(comments[1].body, "x");
}

#[test]
fn test_discard_deletes_ticket_and_comments() {
    let desk = desk();
    let ticket = rejected_ticket(&desk);
    transition(&desk, "alice", &ticket, Status::Restored, Some("please")).expect("restore");

    let outcome = transition(&desk, "root", &ticket, Status::Rejected, Some("ignored"))
        .expect("discard");
    assert_eq!(
        outcome,
        TransitionOutcome::Discarded {
            ticket_id: ticket.id.clone(),
            removed_comments: 2,
        }
    );

    let snapshot = desk.storage.load().expect("load");
    assert!(snapshot.ticket(&ticket.id).is_err());
    assert!(snapshot.comments().is_empty());
}

#[test]
fn test_stranger_cannot_transition() {
    let desk = desk();
    let ticket = open_ticket(&desk);
    let before = fs::read_to_string(desk.storage.path()).expect("read");

    for status in [Status::Processed, Status::Rejected, Status::Completed] {
        let err = transition(&desk, "bob", &ticket, status, Some("x")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::PermissionDenied);
    }

    let after = fs::read_to_string(desk.storage.path()).expect("read");
    assert_eq!(before, after);
}

#[test]
fn test_admin_cannot_restore() {
    let desk = desk();
    let ticket = rejected_ticket(&desk);

    let err = transition(&desk, "root", &ticket, Status::Restored, None).unwrap_err();
    assert_eq!(field_of(&err), Some(Field::Status));
    assert_eq!(
        err.as_validation().map(|v| v.message.as_str()),
        Some("An administrator cannot restore a ticket.")
    );
    assert_eq!(status_of(&desk, &ticket), Status::Rejected);
}

#[test]
fn test_repeated_transition_is_same_status_error() {
    let desk = desk();
    let ticket = open_ticket(&desk);
    transition(&desk, "root", &ticket, Status::Processed, None).expect("accept");

    for username in ["root", "alice", "bob"] {
        let err = transition(&desk, username, &ticket, Status::Processed, None).unwrap_err();
        assert_eq!(field_of(&err), Some(Field::Status));
        assert_eq!(
            err.as_validation().map(|v| v.message.as_str()),
            Some("The new status should be different from the current status.")
        );
    }
}

#[test]
fn test_missing_status_is_required() {
    let desk = desk();
    let ticket = open_ticket(&desk);

    let err = apply_status_transition(&desk.storage, "root", &ticket.id, None, None).unwrap_err();
    assert_eq!(field_of(&err), Some(Field::Status));
}

#[test]
fn test_full_lifecycle_to_completed() {
    let desk = desk();
    let ticket = rejected_ticket(&desk);
    transition(&desk, "alice", &ticket, Status::Restored, None).expect("restore");
    transition(&desk, "root", &ticket, Status::Processed, None).expect("accept");
    transition(&desk, "root", &ticket, Status::Completed, None).expect("complete");
    assert_eq!(status_of(&desk, &ticket), Status::Completed);

    let detail = show_ticket(&desk.storage, "root", &ticket.id).expect("show");
    assert!(detail.transitions.is_empty());
}

#[test]
fn test_partial_ticket_id_is_accepted() {
    let desk = desk();
    let ticket = open_ticket(&desk);
    let partial = &ticket.id[..7];

    apply_status_transition(&desk.storage, "root", partial, Some(Status::Processed), None)
        .expect("accept via partial id");
    assert_eq!(status_of(&desk, &ticket), Status::Processed);
}

#[test]
fn test_comment_on_processed_ticket_is_refused() {
    let desk = desk();
    let ticket = open_ticket(&desk);
    transition(&desk, "root", &ticket, Status::Processed, None).expect("accept");

    let err = add_comment(&desk.storage, "alice", &ticket.id, "any news?").unwrap_err();
    assert_eq!(field_of(&err), Some(Field::Ticket));
    assert_eq!(
        err.as_validation().map(|v| v.message.as_str()),
        Some("You cannot comment on a ticket that is not in the active status.")
    );
}

#[test]
fn test_discussion_comments() {
    let desk = desk();
    let ticket = open_ticket(&desk);

    let first = add_comment(&desk.storage, "alice", &ticket.id, "hello").expect("owner");
    add_comment(&desk.storage, "root", &ticket.id, "looking").expect("staff");
    assert_eq!(first.topic, Topic::Discussion);

    let err = add_comment(&desk.storage, "bob", &ticket.id, "me too").unwrap_err();
    assert_eq!(field_of(&err), Some(Field::Ticket));

    let err = add_comment(&desk.storage, "alice", &ticket.id, "  ").unwrap_err();
    assert_eq!(field_of(&err), Some(Field::Body));

    let bodies: Vec<String> = list_comments(&desk.storage, "alice", &ticket.id)
        .expect("list")
        .into_iter()
        .map(|comment| comment.body)
        .collect();
    assert_eq!(bodies, vec!["hello", "looking"]);

    let err = list_comments(&desk.storage, "bob", &ticket.id).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[test]
fn test_show_hides_ticket_from_strangers() {
    let desk = desk();
    let ticket = open_ticket(&desk);

    let err = show_ticket(&desk.storage, "bob", &ticket.id).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);

    let detail = show_ticket(&desk.storage, "alice", &ticket.id).expect("owner view");
    assert!(detail.can_edit);
    assert!(detail.can_comment);
    assert!(detail.transitions.is_empty());

    let detail = show_ticket(&desk.storage, "root", &ticket.id).expect("staff view");
    assert!(!detail.can_edit);
    let offered: Vec<Transition> = detail.transitions.iter().map(|r| r.transition).collect();
    assert_eq!(offered, vec![Transition::Accept, Transition::Reject]);
}

#[test]
fn test_edit_is_silently_refused_outside_active() {
    let desk = desk();
    let ticket = open_ticket(&desk);
    let edit = TicketEdit {
        description: Some("Second floor".to_string()),
        priority: Some(Priority::Low),
    };

    let updated = edit_ticket(&desk.storage, "alice", &ticket.id, edit.clone())
        .expect("edit")
        .expect("owner may edit");
    assert_eq!(updated.description, "Second floor");
    assert_eq!(updated.priority, Priority::Low);

    assert!(edit_ticket(&desk.storage, "root", &ticket.id, edit.clone())
        .expect("edit")
        .is_none());
    assert!(edit_ticket(&desk.storage, "bob", &ticket.id, edit.clone())
        .expect("edit")
        .is_none());

    transition(&desk, "root", &ticket, Status::Processed, None).expect("accept");
    let before = fs::read_to_string(desk.storage.path()).expect("read");
    let refused = edit_ticket(
        &desk.storage,
        "alice",
        &ticket.id,
        TicketEdit {
            priority: Some(Priority::High),
            ..TicketEdit::default()
        },
    )
    .expect("edit");
    assert!(refused.is_none());
    assert_eq!(before, fs::read_to_string(desk.storage.path()).expect("read"));
}

#[test]
fn test_lists_follow_visibility() {
    let desk = desk();
    let rejected = rejected_ticket(&desk);
    let restored = rejected_ticket(&desk);
    transition(&desk, "alice", &restored, Status::Restored, None).expect("restore");
    let active = open_ticket(&desk);

    let ids = |tickets: Vec<Ticket>| -> Vec<String> {
        tickets.into_iter().map(|ticket| ticket.id).collect()
    };

    let staff = list_tickets(&desk.storage, "root", &ListOptions::default(), Default::default())
        .expect("list");
    assert_eq!(ids(staff), vec![active.id.clone(), rejected.id.clone()]);

    let hiding = helpdesk_core::VisibilityOptions {
        admin_hides_rejected: true,
    };
    let staff = list_tickets(&desk.storage, "root", &ListOptions::default(), hiding)
        .expect("list");
    assert_eq!(ids(staff), vec![active.id.clone()]);

    let owner = list_tickets(&desk.storage, "alice", &ListOptions::default(), hiding)
        .expect("list");
    assert_eq!(ids(owner), vec![active.id.clone(), rejected.id.clone()]);

    let stranger = list_tickets(&desk.storage, "bob", &ListOptions::default(), Default::default())
        .expect("list");
    assert!(stranger.is_empty());

    let filtered = list_tickets(
        &desk.storage,
        "root",
        &ListOptions {
            status: Some(Status::Rejected),
            ..ListOptions::default()
        },
        Default::default(),
    )
    .expect("list");
    assert_eq!(ids(filtered), vec![rejected.id.clone()]);

    assert_eq!(
        ids(restored_tickets(&desk.storage, "root").expect("restored")),
        vec![restored.id.clone()]
    );
    let err = restored_tickets(&desk.storage, "alice").unwrap_err();
    assert_eq!(err.code(), ErrorCode::PermissionDenied);

    let detail = show_ticket(&desk.storage, "alice", &restored.id).expect("owner lookup");
    assert_eq!(detail.ticket.status, Status::Restored);
}

#[test]
fn test_status_filter_keeps_owner_scope() {
    let desk = desk();
    let mine = open_ticket(&desk);
    let theirs = create_ticket(
        &desk.storage,
        "bob",
        TicketDraft {
            title: "Badge reader broken".to_string(),
            description: "Lobby".to_string(),
            priority: Priority::Low,
        },
    )
    .expect("create");
    let restored = rejected_ticket(&desk);
    transition(&desk, "alice", &restored, Status::Restored, None).expect("restore");

    let active = ListOptions {
        status: Some(Status::Active),
        ..ListOptions::default()
    };
    let ids = |tickets: Vec<Ticket>| -> Vec<String> {
        tickets.into_iter().map(|ticket| ticket.id).collect()
    };

    let owner = list_tickets(&desk.storage, "alice", &active, Default::default()).expect("list");
    assert_eq!(ids(owner), vec![mine.id.clone()]);

    let other = list_tickets(&desk.storage, "bob", &active, Default::default()).expect("list");
    assert_eq!(ids(other), vec![theirs.id.clone()]);

    let staff = list_tickets(&desk.storage, "root", &active, Default::default()).expect("list");
    assert_eq!(ids(staff), vec![theirs.id.clone(), mine.id.clone()]);

    let queue = restored_tickets(&desk.storage, "root").expect("restored");
    assert_eq!(ids(queue), vec![restored.id.clone()]);
}

#[test]
fn test_unknown_user_is_reported() {
    let desk = desk();
    let err = list_tickets(&desk.storage, "mallory", &ListOptions::default(), Default::default())
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownUser);
}
