// Rust guideline compliant 2026-02-06

//! Property-based tests for ticket visibility and the comment policy.

use helpdesk_core::{
    can_comment, can_edit, can_view, is_listed, visible_tickets, Principal, Role, Status,
    Ticket, VisibilityOptions,
};
use proptest::prelude::*;

const USER_IDS: [&str; 3] = ["usr-000001", "usr-000002", "usr-000003"];

fn arb_status() -> impl Strategy<Value = Status> {
    (0..Status::ALL.len()).prop_map(|i| Status::ALL[i])
}

fn arb_principal() -> impl Strategy<Value = Principal> {
    (0..USER_IDS.len(), any::<bool>()).prop_map(|(i, staff)| Principal {
        user_id: USER_IDS[i].to_string(),
        username: format!("user{}", i),
        role: if staff { Role::Admin } else { Role::User },
    })
}

fn arb_tickets() -> impl Strategy<Value = Vec<Ticket>> {
    prop::collection::vec((0..USER_IDS.len(), arb_status()), 0..40).prop_map(|rows| {
        rows
            .into_iter()
            .enumerate()
            .map(|(n, (owner, status))| {
                let mut ticket = Ticket::new(format!("Ticket {}", n), USER_IDS[owner].to_string());
                ticket.status = status;
                ticket
            })
            .collect()
    })
}

fn arb_options() -> impl Strategy<Value = VisibilityOptions> {
    any::<bool>().prop_map(|admin_hides_rejected| VisibilityOptions {
        admin_hides_rejected,
    })
}

proptest! {
    #[test]
    fn prop_listed_tickets_are_viewable_and_never_restored(
        principal in arb_principal(),
        tickets in arb_tickets(),
        options in arb_options(),
    ) {
        for ticket in visible_tickets(&principal, tickets, options) {
            prop_assert!(can_view(&principal, &ticket));
            prop_assert_ne!(ticket.status, Status::Restored);
        }
    }

    #[test]
    fn prop_non_staff_only_list_own_tickets(
        principal in arb_principal(),
        tickets in arb_tickets(),
        options in arb_options(),
    ) {
        prop_assume!(principal.role == Role::User);
        let expected = tickets
            .iter()
            .filter(|t| t.owner == principal.user_id && t.status != Status::Restored)
            .count();
        let listed = visible_tickets(&principal, tickets, options);
        prop_assert_eq!(listed.len(), expected);
    }

    #[test]
    fn prop_filter_preserves_order(
        principal in arb_principal(),
        tickets in arb_tickets(),
        options in arb_options(),
    ) {
        let expected: Vec<String> = tickets
            .iter()
            .filter(|t| is_listed(&principal, t, options))
            .map(|t| t.id.clone())
            .collect();
        let listed: Vec<String> = visible_tickets(&principal, tickets, options)
            .into_iter()
            .map(|t| t.id)
            .collect();
        prop_assert_eq!(listed, expected);
    }

    #[test]
    fn prop_edit_implies_comment(principal in arb_principal(), tickets in arb_tickets()) {
        for ticket in &tickets {
            if can_edit(&principal, ticket) {
                prop_assert!(can_comment(&principal, ticket).is_ok());
            }
        }
    }

    #[test]
    fn prop_comment_requires_active_and_view(principal in arb_principal(), tickets in arb_tickets()) {
        for ticket in &tickets {
            let allowed = can_comment(&principal, ticket).is_ok();
            prop_assert_eq!(
                allowed,
                ticket.status == Status::Active && can_view(&principal, ticket)
            );
        }
    }
}
