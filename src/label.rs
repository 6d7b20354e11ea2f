use crate::author::Author;

/// Name of the label reviewers use to approve code.
pub const CODE_REVIEW: &str = "Code-Review";
/// Name of the label CI systems use to report build results.
pub const VERIFIED: &str = "Verified";

/// A label on a change, as returned by Gerrit.
///
/// Gerrit sends one of two shapes depending on the query options: with
/// `DETAILED_LABELS` we get an `all` list naming every reviewer (including ones who haven't voted
/// yet), and otherwise we only get the strongest vote in each direction.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum LabelInfo {
    /// Every reviewer on the label.
    Detailed { all: Vec<ApprovalInfo> },
    /// At most one reviewer per vote value.
    Summary {
        /// `+2`.
        #[serde(default)]
        approved: Option<Author>,
        /// `+1`.
        #[serde(default)]
        recommended: Option<Author>,
        /// `-1`.
        #[serde(default)]
        disliked: Option<Author>,
        /// `-2`.
        #[serde(default)]
        rejected: Option<Author>,
    },
    /// Anything else. Contributes no votes.
    #[allow(dead_code)]
    Unrecognized(serde_json::Value),
}

impl LabelInfo {
    /// The summary fields that are set, strongest positive vote first.
    pub fn summary_votes(&self) -> Vec<(i32, &Author)> {
        match self {
            LabelInfo::Summary {
                approved,
                recommended,
                disliked,
                rejected,
            } => [(2, approved), (1, recommended), (-1, disliked), (-2, rejected)]
                .into_iter()
                .filter_map(|(value, author)| author.as_ref().map(|author| (value, author)))
                .collect(),
            LabelInfo::Detailed { .. } | LabelInfo::Unrecognized(_) => Vec::new(),
        }
    }
}

/// One reviewer's entry in a label's `all` list.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ApprovalInfo {
    #[serde(flatten)]
    pub account: Author,
    /// Missing for reviewers who haven't voted.
    #[serde(default)]
    pub value: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_label_info_detailed() {
        let label: LabelInfo = serde_json::from_value(json!({
            "all": [
                {"_account_id": 1000, "name": "Alice", "value": 2},
                {"_account_id": 1001, "name": "Bob"},
            ],
            "approved": {"name": "Alice"},
        }))
        .unwrap();

        assert_eq!(
            label,
            LabelInfo::Detailed {
                all: vec![
                    ApprovalInfo {
                        account: Author {
                            name: Some("Alice".to_owned()),
                        },
                        value: Some(2),
                    },
                    ApprovalInfo {
                        account: Author {
                            name: Some("Bob".to_owned()),
                        },
                        value: None,
                    },
                ]
            }
        );
    }

    #[test]
    fn test_label_info_summary() {
        let label: LabelInfo = serde_json::from_value(json!({
            "recommended": {"name": "Carol"},
            "rejected": {"email": "dave@example.com"},
        }))
        .unwrap();

        let votes = label
            .summary_votes()
            .into_iter()
            .map(|(value, author)| (value, author.display_name().to_owned()))
            .collect::<Vec<_>>();
        assert_eq!(
            votes,
            vec![(1, "Carol".to_owned()), (-2, "Unknown".to_owned())]
        );
    }

    #[test]
    fn test_label_info_unrecognized() {
        let label: LabelInfo = serde_json::from_value(json!("REJECTED")).unwrap();
        assert_eq!(label, LabelInfo::Unrecognized(json!("REJECTED")));
        assert!(label.summary_votes().is_empty());
    }
}
