use crate::change::Change;
use crate::label::LabelInfo;
use crate::label::CODE_REVIEW;
use crate::label::VERIFIED;

/// A single reviewer's vote on a label.
///
/// A vote of `0` means the reviewer hasn't voted yet, and is marked `pending`.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReviewerVote {
    pub name: String,
    pub value: i32,
    pub pending: bool,
}

impl ReviewerVote {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
            pending: value == 0,
        }
    }
}

/// Normalized votes on the labels we display.
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelVotes {
    #[serde(rename = "Code-Review")]
    pub code_review: Vec<ReviewerVote>,
    #[serde(rename = "Verified")]
    pub verified: Vec<ReviewerVote>,
}

/// What to do with reviewers who haven't voted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZeroVotes {
    /// Keep them, as pending reviewers.
    Pending,
    /// Drop them.
    ///
    /// `Verified` is set by bots, which either vote or don't show up at all.
    Drop,
}

/// Extract the `Code-Review` and `Verified` votes from a change.
///
/// Never fails; missing or unrecognized label data gives no votes.
pub fn extract_reviewer_votes(change: &Change) -> LabelVotes {
    LabelVotes {
        code_review: change
            .label(CODE_REVIEW)
            .map(|label| label_votes(label, ZeroVotes::Pending))
            .unwrap_or_default(),
        verified: change
            .label(VERIFIED)
            .map(|label| label_votes(label, ZeroVotes::Drop))
            .unwrap_or_default(),
    }
}

fn label_votes(label: &LabelInfo, zero_votes: ZeroVotes) -> Vec<ReviewerVote> {
    match label {
        LabelInfo::Detailed { all } => all
            .iter()
            .map(|approval| {
                ReviewerVote::new(approval.account.display_name(), approval.value.unwrap_or(0))
            })
            .filter(|vote| !(vote.pending && zero_votes == ZeroVotes::Drop))
            .collect(),
        LabelInfo::Summary { .. } | LabelInfo::Unrecognized(_) => label
            .summary_votes()
            .into_iter()
            .map(|(value, author)| ReviewerVote::new(author.display_name(), value))
            .collect(),
    }
}
