//! Identity artifact model
//!
//! The artifact records which account and role each profile resolved to. Two
//! layouts are accepted:
//!
//! ```json
//! { "dev": { "Account": "111", "RoleName": "Admin" } }
//! [ { "ProfileName": "dev", "AccountId": "111", "Role": "Admin" } ]
//! ```
//!
//! A mapping may also hold records that name their profile through
//! `ProfileName` under an unrelated key.

use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

/// Accepted account field names, first present wins
pub const ACCOUNT_FIELDS: &[&str] = &["Account", "AccountId"];

/// Accepted role field names, first present wins
pub const ROLE_FIELDS: &[&str] = &["RoleName", "Role"];

/// Field through which a record names its profile
pub const PROFILE_NAME_FIELD: &str = "ProfileName";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// Parsed identity artifact
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityDocument {
    root: Value,
}

impl IdentityDocument {
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn parse(content: &str) -> Result<Self, DocumentError> {
        Ok(Self::from_value(serde_json::from_str(content)?))
    }

    pub fn read(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Number of top-level entries, if the shape is valid.
    pub fn entry_count(&self) -> Option<usize> {
        match &self.root {
            Value::Object(map) => Some(map.len()),
            Value::Array(items) => Some(items.len()),
            _ => None,
        }
    }

    /// JSON type name of the top level, for error messages.
    pub fn type_name(&self) -> &'static str {
        json_type_name(&self.root)
    }

    /// Find the record describing `profile`.
    ///
    /// Lookup order: direct key in a mapping, then a mapping value whose
    /// `ProfileName` matches, then a sequence item whose `ProfileName` matches.
    pub fn find_record(&self, profile: &str) -> Option<&Map<String, Value>> {
        match &self.root {
            Value::Object(map) => match map.get(profile) {
                Some(record) => record.as_object(),
                None => map.values().find_map(|v| named_record(v, profile)),
            },
            Value::Array(items) => items.iter().find_map(|v| named_record(v, profile)),
            _ => None,
        }
    }

    /// Account and role recorded for `profile`. Missing pieces are `None`.
    pub fn account_role(&self, profile: &str) -> AccountRole {
        match self.find_record(profile) {
            Some(record) => AccountRole {
                account: first_field(record, ACCOUNT_FIELDS),
                role: first_field(record, ROLE_FIELDS),
            },
            None => AccountRole::default(),
        }
    }
}

fn named_record<'a>(value: &'a Value, profile: &str) -> Option<&'a Map<String, Value>> {
    let record = value.as_object()?;
    match record.get(PROFILE_NAME_FIELD) {
        Some(Value::String(name)) if name == profile => Some(record),
        _ => None,
    }
}

/// First field in `names` holding a usable value. Empty strings and
/// non-scalar values count as absent.
fn first_field(record: &Map<String, Value>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| record.get(*name))
        .find_map(|value| match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Account/role resolved for one profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountRole {
    pub account: Option<String>,
    pub role: Option<String>,
}

impl AccountRole {
    pub fn new(account: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            account: Some(account.into()),
            role: Some(role.into()),
        }
    }

    /// `account:role`, only when both parts are known.
    pub fn pair(&self) -> Option<String> {
        match (&self.account, &self.role) {
            (Some(account), Some(role)) => Some(format!("{}:{}", account, role)),
            _ => None,
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            self.account.as_deref().unwrap_or("<missing>"),
            self.role.as_deref().unwrap_or("<missing>")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mapping_direct_key_lookup() {
        let doc = IdentityDocument::from_value(json!({
            "dev": {"Account": "111", "RoleName": "A"},
            "prod": {"Account": "222", "RoleName": "B"}
        }));

        assert_eq!(doc.entry_count(), Some(2));
        assert_eq!(doc.account_role("dev"), AccountRole::new("111", "A"));
        assert_eq!(doc.account_role("prod").pair().as_deref(), Some("222:B"));
    }

    #[test]
    fn mapping_falls_back_to_profile_name_field() {
        let doc = IdentityDocument::from_value(json!({
            "first": {"ProfileName": "dev", "AccountId": "111", "Role": "Admin"}
        }));

        assert_eq!(doc.account_role("dev"), AccountRole::new("111", "Admin"));
    }

    #[test]
    fn sequence_lookup_by_profile_name() {
        let doc = IdentityDocument::from_value(json!([
            {"ProfileName": "dev", "Account": "111", "RoleName": "A"},
            "not a record",
            {"ProfileName": "prod", "AccountId": 222, "Role": "B"}
        ]));

        assert_eq!(doc.entry_count(), Some(3));
        assert_eq!(doc.account_role("prod"), AccountRole::new("222", "B"));
    }

    #[test]
    fn preferred_field_names_win() {
        let doc = IdentityDocument::from_value(json!({
            "dev": {"Account": "111", "AccountId": "999", "RoleName": "A", "Role": "Z"}
        }));
        assert_eq!(doc.account_role("dev"), AccountRole::new("111", "A"));
    }

    #[test]
    fn empty_preferred_field_falls_through() {
        let doc = IdentityDocument::from_value(json!({
            "dev": {"Account": "", "AccountId": "111", "RoleName": null, "Role": "A"}
        }));
        assert_eq!(doc.account_role("dev"), AccountRole::new("111", "A"));
    }

    #[test]
    fn missing_profile_resolves_to_nothing() {
        let doc = IdentityDocument::from_value(json!({"dev": {"Account": "111"}}));
        assert_eq!(doc.account_role("prod"), AccountRole::default());

        let partial = doc.account_role("dev");
        assert_eq!(partial.account.as_deref(), Some("111"));
        assert_eq!(partial.pair(), None);
    }

    #[test]
    fn scalar_document_has_no_entries() {
        let doc = IdentityDocument::parse("42").unwrap();
        assert_eq!(doc.entry_count(), None);
        assert_eq!(doc.type_name(), "number");
        assert_eq!(doc.account_role("dev"), AccountRole::default());
    }

    #[test]
    fn malformed_document_reports_parser_error() {
        let err = IdentityDocument::parse("{not json").unwrap_err();
        assert!(err.to_string().contains("line 1"), "{}", err);
    }

    #[test]
    fn display_marks_missing_parts() {
        let partial = AccountRole {
            account: Some("111".to_string()),
            role: None,
        };
        assert_eq!(partial.to_string(), "(111, <missing>)");
    }
}
