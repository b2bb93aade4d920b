//! Pure decision logic: reduce reviews to a status emoji, and diff the
//! desired emoji against a message's current reactions.

use std::collections::{HashMap, HashSet};

use crate::github::{Review, ReviewState};

/// Reduce an ordered review sequence to the emoji that should represent the
/// PR's status, or `None` when no substantive review exists.
///
/// Comments never change status, so `Commented` reviews are ignored outright.
/// For every other review, only the author's most recent one counts: a
/// reviewer who requested changes and later approved reads as approved. Any
/// remaining changes-requested outweighs every approval.
pub fn emoji_for_reviews(
    reviews: &[Review],
    emoji_needs_changes: &str,
    emoji_ready_to_merge: &str,
) -> Option<String> {
    // Last-write-wins per author; relies only on the input being in
    // submission order, not on any grouping by author.
    let mut last_state_by_author: HashMap<&str, ReviewState> = HashMap::new();
    for review in reviews {
        if review.state == ReviewState::Commented {
            continue;
        }
        last_state_by_author.insert(review.user.login.as_str(), review.state);
    }

    let states: HashSet<ReviewState> = last_state_by_author.into_values().collect();

    if states.contains(&ReviewState::ChangesRequested) {
        return Some(emoji_needs_changes.to_string());
    }

    if states.contains(&ReviewState::Approved) {
        return Some(emoji_ready_to_merge.to_string());
    }

    None
}

/// Compute the reaction changes that turn `current` into exactly `{desired}`.
///
/// This is a destructive reconciliation: every emoji other than the desired
/// one is scheduled for removal, whether or not this tool put it there.
pub fn diff_reactions(
    desired: &str,
    current: &HashSet<String>,
) -> (HashSet<String>, HashSet<String>) {
    let mut to_add = HashSet::new();
    if !current.contains(desired) {
        to_add.insert(desired.to_string());
    }

    let to_remove = current
        .iter()
        .filter(|emoji| emoji.as_str() != desired)
        .cloned()
        .collect();

    (to_add, to_remove)
}
