//! Structural diff between two JSON documents.
//!
//! Objects are compared key by key (keys visited in sorted order), arrays
//! index by index. Paths use JSON Pointer syntax; the root is `""`.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Removed,
    Changed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonChange {
    pub path: String,
    pub kind: ChangeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Value>,
}

/// Lists every difference between `left` and `right`. Empty when equal.
pub fn diff_json(left: &Value, right: &Value) -> Vec<JsonChange> {
    let mut changes = Vec::new();
    diff_at(String::new(), left, right, &mut changes);
    changes
}

fn diff_at(path: String, left: &Value, right: &Value, out: &mut Vec<JsonChange>) {
    match (left, right) {
        (Value::Object(a), Value::Object(b)) => {
            let keys: BTreeSet<&String> = a.keys().chain(b.keys()).collect();
            for key in keys {
                let child = format!("{path}/{}", escape_token(key));
                match (a.get(key), b.get(key)) {
                    (Some(l), Some(r)) => diff_at(child, l, r, out),
                    (Some(l), None) => out.push(removed(child, l)),
                    (None, Some(r)) => out.push(added(child, r)),
                    (None, None) => {}
                }
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            for i in 0..a.len().max(b.len()) {
                let child = format!("{path}/{i}");
                match (a.get(i), b.get(i)) {
                    (Some(l), Some(r)) => diff_at(child, l, r, out),
                    (Some(l), None) => out.push(removed(child, l)),
                    (None, Some(r)) => out.push(added(child, r)),
                    (None, None) => {}
                }
            }
        }
        _ if left == right => {}
        _ => out.push(JsonChange {
            path,
            kind: ChangeKind::Changed,
            left: Some(left.clone()),
            right: Some(right.clone()),
        }),
    }
}

fn added(path: String, value: &Value) -> JsonChange {
    JsonChange {
        path,
        kind: ChangeKind::Added,
        left: None,
        right: Some(value.clone()),
    }
}

fn removed(path: String, value: &Value) -> JsonChange {
    JsonChange {
        path,
        kind: ChangeKind::Removed,
        left: Some(value.clone()),
        right: None,
    }
}

/// RFC 6901 escaping: `~` becomes `~0`, `/` becomes `~1`.
fn escape_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identical_documents_have_no_changes() {
        let doc = json!({"a": [1, {"b": null}], "c": "x"});
        assert!(diff_json(&doc, &doc).is_empty());
    }

    #[test]
    fn test_scalar_root_change() {
        let changes = diff_json(&json!(1), &json!("1"));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].path, "");
        assert_eq!(changes[0].kind, ChangeKind::Changed);
    }

    #[test]
    fn test_nested_object_changes_in_key_order() {
        let left = json!({"z": 1, "user": {"name": "Ada", "age": 36}});
        let right = json!({"user": {"name": "Ada", "age": 37, "email": "ada@example.com"}});
        let changes = diff_json(&left, &right);

        let summary: Vec<(&str, ChangeKind)> =
            changes.iter().map(|c| (c.path.as_str(), c.kind)).collect();
        assert_eq!(
            summary,
            vec![
                ("/user/age", ChangeKind::Changed),
                ("/user/email", ChangeKind::Added),
                ("/z", ChangeKind::Removed),
            ]
        );
        assert_eq!(changes[0].left, Some(json!(36)));
        assert_eq!(changes[0].right, Some(json!(37)));
    }

    #[test]
    fn test_array_length_changes() {
        let changes = diff_json(&json!([1, 2, 3]), &json!([1, 5]));
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].path, "/1");
        assert_eq!(changes[0].kind, ChangeKind::Changed);
        assert_eq!(changes[1].path, "/2");
        assert_eq!(changes[1].kind, ChangeKind::Removed);
    }

    #[test]
    fn test_type_change_is_reported_once() {
        let changes = diff_json(&json!({"a": {"b": 1}}), &json!({"a": [1]}));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].path, "/a");
    }

    #[test]
    fn test_keys_are_pointer_escaped() {
        let changes = diff_json(&json!({}), &json!({"a/b~c": 1}));
        assert_eq!(changes[0].path, "/a~1b~0c");
    }
}
