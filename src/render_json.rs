use std::io::Write;

use crate::change::Change;
use crate::change_number::ChangeNumber;
use crate::change_status::ChangeStatus;
use crate::reviewer_votes::extract_reviewer_votes;
use crate::reviewer_votes::LabelVotes;

#[derive(serde::Serialize, Debug)]
struct JsonOutput<'a> {
    project: &'a str,
    count: usize,
    changes: Vec<JsonChange<'a>>,
}

#[derive(serde::Serialize, Debug)]
struct JsonChange<'a> {
    number: ChangeNumber,
    subject: &'a str,
    status: &'a ChangeStatus,
    owner: &'a str,
    updated: Option<&'a str>,
    reviewers: LabelVotes,
}

/// Render changes as a JSON document, for scripts.
pub fn render_json(changes: &[Change], project: &str, out: &mut impl Write) -> std::io::Result<()> {
    let output = JsonOutput {
        project,
        count: changes.len(),
        changes: changes
            .iter()
            .map(|change| JsonChange {
                number: change.number,
                subject: &change.subject,
                status: &change.status,
                owner: change.owner_name(),
                updated: change.updated.as_deref(),
                reviewers: extract_reviewer_votes(change),
            })
            .collect(),
    };

    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::change::change_from_json;

    fn render(changes: &[Change]) -> serde_json::Value {
        let mut out = Vec::new();
        render_json(changes, "my-project", &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_render_json_empty() {
        assert_eq!(
            render(&[]),
            json!({"project": "my-project", "count": 0, "changes": []})
        );
    }

    #[test]
    fn test_render_json_key_order() {
        let mut out = Vec::new();
        render_json(&[], "my-project", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n  \"project\": \"my-project\",\n  \"count\": 0,\n  \"changes\": []\n}\n"
        );
    }

    #[test]
    fn test_render_json() {
        let changes = [change_from_json(json!({
            "_number": 12345,
            "subject": "Fix authentication bug",
            "status": "NEW",
            "owner": {"name": "Alice", "email": "alice@example.com"},
            "updated": "2024-01-15 10:30:00.000000000",
            "labels": {
                "Code-Review": {"all": [
                    {"name": "Bob", "value": 1},
                    {"name": "Carol"},
                ]},
                "Verified": {"all": [
                    {"name": "CI", "value": 1},
                    {"name": "Lint", "value": 0},
                ]},
            },
        }))];

        let rendered = render(&changes);
        assert_eq!(
            rendered,
            json!({
                "project": "my-project",
                "count": 1,
                "changes": [{
                    "number": 12345,
                    "subject": "Fix authentication bug",
                    "status": "NEW",
                    "owner": "Alice",
                    "updated": "2024-01-15 10:30:00.000000000",
                    "reviewers": {
                        "Code-Review": [
                            {"name": "Bob", "value": 1, "pending": false},
                            {"name": "Carol", "value": 0, "pending": true},
                        ],
                        "Verified": [
                            {"name": "CI", "value": 1, "pending": false},
                        ],
                    },
                }],
            })
        );

        for change in rendered["changes"].as_array().unwrap() {
            for vote in change["reviewers"]["Code-Review"].as_array().unwrap() {
                assert_eq!(vote["pending"].as_bool(), Some(vote["value"] == 0));
            }
        }
    }

    #[test]
    fn test_render_json_missing_fields() {
        let changes = [change_from_json(json!({"_number": 7, "status": "NEW"}))];
        assert_eq!(
            render(&changes)["changes"][0],
            json!({
                "number": 7,
                "subject": "",
                "status": "NEW",
                "owner": "Unknown",
                "updated": null,
                "reviewers": {"Code-Review": [], "Verified": []},
            })
        );
    }
}
