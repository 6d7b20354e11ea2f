use std::fmt::Display;

/// A Gerrit change query, like `project:my-project status:open limit:20`, along with the REST
/// options controlling which fields Gerrit returns.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ChangeQuery {
    /// `key:value` search predicates.
    predicates: Vec<String>,
    /// Include every reviewer on each label, including ones who haven't voted
    detailed_labels: bool,
    /// Include names and emails of accounts, not just their IDs
    detailed_accounts: bool,
}

impl ChangeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open changes in `project`, at most `limit` of them, with the label details we render.
    pub fn open_in_project(project: &str, limit: u32) -> Self {
        Self::new()
            .project(project)
            .status("open")
            .limit(limit)
            .detailed_labels()
            .detailed_accounts()
    }

    fn predicate(mut self, key: &str, value: impl Display) -> Self {
        self.predicates.push(format!("{key}:{value}"));
        self
    }

    /// Only changes in the given project.
    pub fn project(self, project: &str) -> Self {
        self.predicate("project", project)
    }

    /// Only changes with the given status, like `open` or `merged`.
    pub fn status(self, status: &str) -> Self {
        self.predicate("status", status)
    }

    /// Return at most this many changes.
    pub fn limit(self, limit: u32) -> Self {
        self.predicate("limit", limit)
    }

    /// Include every reviewer on each label.
    pub fn detailed_labels(mut self) -> Self {
        self.detailed_labels = true;
        self
    }

    /// Include account names and emails.
    pub fn detailed_accounts(mut self) -> Self {
        self.detailed_accounts = true;
        self
    }

    /// Query parameters for the `/changes/` endpoint.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", self.to_string())];

        if self.detailed_labels {
            params.push(("o", "DETAILED_LABELS".to_owned()));
        }
        if self.detailed_accounts {
            params.push(("o", "DETAILED_ACCOUNTS".to_owned()));
        }

        params
    }
}

impl Display for ChangeQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.predicates.join(" "))
    }
}
