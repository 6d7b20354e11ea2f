use std::collections::BTreeMap;

use serde_with::serde_as;
use serde_with::DefaultOnNull;
use time::macros::format_description;
use time::OffsetDateTime;
use time::PrimitiveDateTime;

use crate::author::Author;
use crate::author::UNKNOWN_NAME;
use crate::change_number::ChangeNumber;
use crate::change_status::ChangeStatus;
use crate::label::LabelInfo;

/// A change, as returned by Gerrit's `/changes/` REST endpoint.
#[serde_as]
#[derive(serde::Deserialize, Debug, Clone)]
pub struct Change {
    #[serde(rename = "_number")]
    pub number: ChangeNumber,
    #[serde(default)]
    pub subject: String,
    pub status: ChangeStatus,
    #[serde(default)]
    pub owner: Option<Author>,
    /// Last update, in Gerrit's timestamp format: `2024-01-15 10:30:00.000000000`, UTC.
    #[serde(default)]
    pub updated: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: BTreeMap<String, LabelInfo>,
    #[serde(default)]
    pub work_in_progress: bool,
    #[serde(default)]
    pub submittable: bool,
}

impl Change {
    pub fn owner_name(&self) -> &str {
        self.owner
            .as_ref()
            .map(Author::display_name)
            .unwrap_or(UNKNOWN_NAME)
    }

    pub fn label(&self, name: &str) -> Option<&LabelInfo> {
        self.labels.get(name)
    }

    /// When this change was last updated.
    ///
    /// Missing or unparseable timestamps are treated as the Unix epoch, so they sort as the
    /// oldest possible changes.
    pub fn updated_at(&self) -> OffsetDateTime {
        self.updated
            .as_deref()
            .and_then(|updated| {
                PrimitiveDateTime::parse(
                    updated,
                    format_description!(
                        "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]"
                    ),
                )
                .map_err(|error| {
                    tracing::debug!(change = %self.number, updated, %error, "Failed to parse timestamp");
                })
                .ok()
            })
            .map(PrimitiveDateTime::assume_utc)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
}

/// Build a [`Change`] from JSON, for tests.
#[cfg(test)]
pub fn change_from_json(value: serde_json::Value) -> Change {
    serde_json::from_value(value).expect("Test change parses")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn test_change_deserialize_minimal() {
        let change = change_from_json(json!({
            "_number": 12345,
            "status": "NEW",
            "labels": null,
        }));
        assert_eq!(change.number, ChangeNumber::from(12345));
        assert_eq!(change.subject, "");
        assert_eq!(change.owner_name(), "Unknown");
        assert!(change.labels.is_empty());
        assert!(!change.work_in_progress);
    }

    #[test]
    fn test_change_updated_at() {
        let change = change_from_json(json!({
            "_number": 1,
            "status": "NEW",
            "updated": "2024-01-15 10:30:00.000000000",
        }));
        assert_eq!(change.updated_at(), datetime!(2024-01-15 10:30:00 UTC));
    }

    #[test]
    fn test_change_updated_at_without_subseconds() {
        let change = change_from_json(json!({
            "_number": 1,
            "status": "NEW",
            "updated": "2024-01-15 10:30:00",
        }));
        assert_eq!(change.updated_at(), datetime!(2024-01-15 10:30:00 UTC));
    }

    #[test]
    fn test_change_updated_at_missing_or_invalid() {
        let missing = change_from_json(json!({"_number": 1, "status": "NEW"}));
        assert_eq!(missing.updated_at(), OffsetDateTime::UNIX_EPOCH);

        let invalid = change_from_json(json!({
            "_number": 1,
            "status": "NEW",
            "updated": "last tuesday",
        }));
        assert_eq!(invalid.updated_at(), OffsetDateTime::UNIX_EPOCH);
    }
}
