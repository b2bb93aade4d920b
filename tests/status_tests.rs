use std::collections::HashSet;

use pr_reaction_sync::github::{Review, ReviewState, ReviewUser};
use pr_reaction_sync::status::{diff_reactions, emoji_for_reviews};

const NEEDS_CHANGES: &str = "construction";
const READY_TO_MERGE: &str = "white_check_mark";

fn review(login: &str, state: ReviewState) -> Review {
    Review {
        user: ReviewUser {
            login: login.to_string(),
        },
        state,
    }
}

fn emoji_for(reviews: &[Review]) -> Option<String> {
    emoji_for_reviews(reviews, NEEDS_CHANGES, READY_TO_MERGE)
}

fn set(emojis: &[&str]) -> HashSet<String> {
    emojis.iter().map(|e| (*e).to_string()).collect()
}

#[test]
fn no_reviews_yields_no_emoji() {
    assert_eq!(emoji_for(&[]), None);
}

#[test]
fn single_approval_yields_ready_to_merge() {
    let reviews = [review("alice", ReviewState::Approved)];
    assert_eq!(emoji_for(&reviews), Some(READY_TO_MERGE.to_string()));
}

#[test]
fn single_changes_requested_yields_needs_changes() {
    let reviews = [review("alice", ReviewState::ChangesRequested)];
    assert_eq!(emoji_for(&reviews), Some(NEEDS_CHANGES.to_string()));
}

#[test]
fn changes_requested_outweighs_approval_from_another_reviewer() {
    let reviews = [
        review("alice", ReviewState::Approved),
        review("bob", ReviewState::ChangesRequested),
    ];
    assert_eq!(emoji_for(&reviews), Some(NEEDS_CHANGES.to_string()));
}

#[test]
fn later_approval_supersedes_same_reviewers_changes_request() {
    let reviews = [
        review("alice", ReviewState::ChangesRequested),
        review("alice", ReviewState::Approved),
    ];
    assert_eq!(emoji_for(&reviews), Some(READY_TO_MERGE.to_string()));
}

#[test]
fn comment_does_not_erase_prior_approval() {
    let reviews = [
        review("alice", ReviewState::Approved),
        review("alice", ReviewState::Commented),
    ];
    assert_eq!(emoji_for(&reviews), Some(READY_TO_MERGE.to_string()));
}

#[test]
fn comment_only_reviewer_contributes_nothing() {
    let reviews = [review("alice", ReviewState::Commented)];
    assert_eq!(emoji_for(&reviews), None);

    let reviews = [
        review("alice", ReviewState::Commented),
        review("bob", ReviewState::Approved),
    ];
    assert_eq!(emoji_for(&reviews), Some(READY_TO_MERGE.to_string()));
}

#[test]
fn trailing_comment_does_not_hide_another_reviewers_changes_request() {
    // alice approved, bob requested changes, then alice commented: bob's
    // request still stands and alice's approval is unchanged.
    let reviews = [
        review("alice", ReviewState::Approved),
        review("bob", ReviewState::ChangesRequested),
        review("alice", ReviewState::Commented),
    ];
    assert_eq!(emoji_for(&reviews), Some(NEEDS_CHANGES.to_string()));
}

#[test]
fn dismissal_supersedes_that_reviewers_earlier_verdict() {
    let reviews = [
        review("alice", ReviewState::Approved),
        review("alice", ReviewState::Dismissed),
    ];
    assert_eq!(emoji_for(&reviews), None);
}

#[test]
fn interleaved_authors_only_count_their_last_review() {
    let reviews = [
        review("alice", ReviewState::ChangesRequested),
        review("bob", ReviewState::ChangesRequested),
        review("alice", ReviewState::Approved),
        review("bob", ReviewState::Approved),
    ];
    assert_eq!(emoji_for(&reviews), Some(READY_TO_MERGE.to_string()));
}

#[test]
fn diff_adds_missing_desired_emoji() {
    let (to_add, to_remove) = diff_reactions("ready", &set(&[]));
    assert_eq!(to_add, set(&["ready"]));
    assert_eq!(to_remove, set(&[]));
}

#[test]
fn diff_removes_everything_except_desired_emoji() {
    let (to_add, to_remove) = diff_reactions("ready", &set(&["eyes", "ready"]));
    assert_eq!(to_add, set(&[]));
    assert_eq!(to_remove, set(&["eyes"]));
}

#[test]
fn diff_replaces_unrelated_reactions() {
    let (to_add, to_remove) = diff_reactions("construction", &set(&["eyes", "tada", "ready"]));
    assert_eq!(to_add, set(&["construction"]));
    assert_eq!(to_remove, set(&["eyes", "tada", "ready"]));
}

#[test]
fn diff_law_applying_the_diff_yields_exactly_the_desired_emoji() {
    let cases: [(&str, &[&str]); 4] = [
        ("ready", &[]),
        ("ready", &["ready"]),
        ("ready", &["eyes", "tada"]),
        ("construction", &["eyes", "ready", "construction"]),
    ];

    for (desired, current) in cases {
        let current = set(current);
        let (to_add, to_remove) = diff_reactions(desired, &current);

        let mut result: HashSet<String> = current.difference(&to_remove).cloned().collect();
        result.extend(to_add);

        assert_eq!(result, set(&[desired]), "desired={desired}");
    }
}

#[test]
fn diff_is_idempotent_on_its_own_output() {
    let (to_add, to_remove) = diff_reactions("ready", &set(&["eyes"]));
    assert_eq!((to_add, to_remove), (set(&["ready"]), set(&["eyes"])));

    let (to_add, to_remove) = diff_reactions("ready", &set(&["ready"]));
    assert_eq!((to_add, to_remove), (set(&[]), set(&[])));
}
