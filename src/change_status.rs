use std::fmt::Display;

/// A change's status.
///
/// Older Gerrit servers also report statuses like `DRAFT`; those are kept verbatim.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeStatus {
    New,
    Merged,
    Abandoned,
    #[serde(untagged)]
    Other(String),
}

impl Display for ChangeStatus {
    /// Formats the status the same way Gerrit sends it, e.g. `NEW`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeStatus::New => write!(f, "NEW"),
            ChangeStatus::Merged => write!(f, "MERGED"),
            ChangeStatus::Abandoned => write!(f, "ABANDONED"),
            ChangeStatus::Other(status) => write!(f, "{status}"),
        }
    }
}
