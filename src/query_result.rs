use crate::change::Change;

/// Gerrit prefixes JSON responses with this line to defeat cross-site script inclusion.
const XSSI_PREFIX: &str = ")]}'";

/// Parse the body of a `/changes/` response.
pub fn parse_changes(body: &str) -> Result<Vec<Change>, serde_json::Error> {
    let body = body.trim_start();
    let body = body.strip_prefix(XSSI_PREFIX).unwrap_or(body);
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use crate::change_number::ChangeNumber;
    use crate::change_status::ChangeStatus;

    #[test]
    fn test_parse_changes() {
        let changes = parse_changes(indoc!(
            r#"
            )]}'
            [
              {
                "id": "my-project~main~I8473b95934b5732ac55d26311a706c9c2bde9940",
                "project": "my-project",
                "branch": "main",
                "change_id": "I8473b95934b5732ac55d26311a706c9c2bde9940",
                "subject": "Fix authentication bug",
                "status": "NEW",
                "created": "2024-01-14 09:00:00.000000000",
                "updated": "2024-01-15 10:30:00.000000000",
                "owner": {"_account_id": 1000096, "name": "Alice", "email": "alice@example.com"},
                "labels": {
                  "Code-Review": {
                    "all": [{"_account_id": 1000097, "name": "Bob", "value": 2}],
                    "approved": {"_account_id": 1000097, "name": "Bob"}
                  }
                },
                "_number": 12345
              }
            ]
            "#
        ))
        .unwrap();

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].number, ChangeNumber::from(12345));
        assert_eq!(changes[0].owner_name(), "Alice");
    }

    #[test]
    fn test_parse_changes_without_prefix() {
        assert!(parse_changes("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_changes_unknown_status() {
        let changes = parse_changes(
            r#")]}'
            [{"_number": 1, "status": "DRAFT"}, {"_number": 2, "status": "NEW"}]"#,
        )
        .unwrap();
        assert_eq!(changes[0].status, ChangeStatus::Other("DRAFT".to_owned()));
        assert_eq!(changes[0].status.to_string(), "DRAFT");
        assert_eq!(changes[1].status, ChangeStatus::New);
    }

    #[test]
    fn test_parse_changes_malformed() {
        assert!(parse_changes(")]}'\n<html>Sign in</html>").is_err());
    }
}
