use super::*;

#[test]
fn open_disputes_offer_every_forward_transition() {
    assert_eq!(
        next_statuses(DisputeStatus::Open),
        [DisputeStatus::UnderReview, DisputeStatus::Resolved, DisputeStatus::Rejected]
    );
    assert_eq!(next_statuses(DisputeStatus::UnderReview), [DisputeStatus::Resolved, DisputeStatus::Rejected]);
}

#[test]
fn closed_and_unknown_disputes_offer_nothing() {
    assert!(next_statuses(DisputeStatus::Resolved).is_empty());
    assert!(next_statuses(DisputeStatus::Rejected).is_empty());
    assert!(next_statuses(DisputeStatus::Unknown).is_empty());
}

#[test]
fn build_update_drops_blank_note() {
    assert_eq!(
        build_update(DisputeStatus::UnderReview, "  "),
        DisputeUpdate { status: DisputeStatus::UnderReview, resolution: None }
    );
    assert_eq!(
        build_update(DisputeStatus::Resolved, " Refund issued "),
        DisputeUpdate { status: DisputeStatus::Resolved, resolution: Some("Refund issued".to_owned()) }
    );
}

#[test]
fn action_labels_name_the_target() {
    assert_eq!(action_label(DisputeStatus::Resolved), "Resolve");
    assert_eq!(action_label(DisputeStatus::Rejected), "Reject");
    assert_eq!(action_label(DisputeStatus::UnderReview), "Start review");
}
