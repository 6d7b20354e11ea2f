use std::cmp::Reverse;

use itertools::Itertools;

use crate::reviewer_votes::LabelVotes;
use crate::reviewer_votes::ReviewerVote;
use crate::styling::Styling;

/// Marks a reviewer who hasn't voted yet.
const PENDING_MARKER: &str = "⏳";

/// Format a vote value with an explicit sign for positive votes, e.g. `+2` or `-1`.
pub fn signed_value(value: i32) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

/// Render votes compactly for the terminal, e.g. `CR: +2 Alice, ⏳ Bob  V: +1 CI`.
///
/// `Code-Review` votes are ordered strongest first, with pending reviewers last. `Verified` votes
/// are ordered strongest first.
pub fn format_reviewer_votes(votes: &LabelVotes, styling: &Styling) -> String {
    let code_review = if votes.code_review.is_empty() {
        styling.dim("no reviewers")
    } else {
        votes
            .code_review
            .iter()
            .sorted_by_key(|vote| (vote.pending, Reverse(vote.value)))
            .map(|vote| {
                if vote.pending {
                    styling.dim(&format!("{PENDING_MARKER} {}", vote.name))
                } else {
                    format_vote(vote, styling)
                }
            })
            .join(", ")
    };

    let verified = if votes.verified.is_empty() {
        styling.dim("—")
    } else {
        votes
            .verified
            .iter()
            .sorted_by_key(|vote| Reverse(vote.value))
            .map(|vote| format_vote(vote, styling))
            .join(", ")
    };

    format!("CR: {code_review}  V: {verified}")
}

fn format_vote(vote: &ReviewerVote, styling: &Styling) -> String {
    let value = signed_value(vote.value);
    let value = if vote.value > 0 {
        styling.positive(&value)
    } else {
        styling.negative(&value)
    };
    format!("{value} {}", vote.name)
}
