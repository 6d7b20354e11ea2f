/// A Gerrit account, as it appears in change owners and label votes.
///
/// Gerrit omits the name when the caller isn't allowed to see it.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub name: Option<String>,
}

impl Author {
    /// The display name for this account, or `Unknown`.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }
}

/// Name shown for accounts Gerrit didn't give us a name for.
pub const UNKNOWN_NAME: &str = "Unknown";
