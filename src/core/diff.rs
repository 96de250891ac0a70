//! Attribute-level diffing between the before and after states of a change

use crate::core::data::{Action, Change};
use serde_json::Value;

pub const UNKNOWN_PLACEHOLDER: &str = "(known after apply)";
pub const SENSITIVE_PLACEHOLDER: &str = "(sensitive value)";

/// One rendered attribute line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeChange {
    Added { key: String, value: String },
    Modified { key: String, before: String, after: String },
    Removed { key: String, before: String },
}

/// Render a JSON value the way attribute lines show it
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => value.to_string(),
    }
}

fn is_flagged(marks: Option<&Value>, key: &str) -> bool {
    marks
        .and_then(Value::as_object)
        .and_then(|obj| obj.get(key))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// A sensitivity mark hides the value if it is `true` anywhere inside
fn contains_mark(mark: &Value) -> bool {
    match mark {
        Value::Bool(flag) => *flag,
        Value::Object(obj) => obj.values().any(contains_mark),
        Value::Array(items) => items.iter().any(contains_mark),
        _ => false,
    }
}

/// Nested values render as compact JSON, so any marked member masks the whole value
fn is_sensitive(marks: Option<&Value>, key: &str) -> bool {
    marks
        .and_then(Value::as_object)
        .and_then(|obj| obj.get(key))
        .is_some_and(contains_mark)
}

fn display(value: &Value, sensitive: bool) -> String {
    if sensitive {
        SENSITIVE_PLACEHOLDER.to_string()
    } else {
        format_value(value)
    }
}

/// Compute the attribute lines shown under a resource header
pub fn attribute_changes(change: &Change, action: Action) -> Vec<AttributeChange> {
    let after_sensitive = change.after_sensitive.as_ref();
    let before_sensitive = change.before_sensitive.as_ref();
    let mut lines = Vec::new();

    match action {
        Action::Update | Action::Replace => {
            let before_obj = change.before.as_ref().and_then(Value::as_object);
            let after_obj = change.after.as_ref().and_then(Value::as_object);
            if let (Some(before_obj), Some(after_obj)) = (before_obj, after_obj) {
                for (key, after_val) in after_obj {
                    let after_str = display(after_val, is_sensitive(after_sensitive, key));
                    match before_obj.get(key) {
                        Some(before_val) if before_val != after_val => {
                            lines.push(AttributeChange::Modified {
                                key: key.clone(),
                                before: display(before_val, is_sensitive(before_sensitive, key)),
                                after: after_str,
                            });
                        }
                        Some(_) => {}
                        None => lines.push(AttributeChange::Added {
                            key: key.clone(),
                            value: after_str,
                        }),
                    }
                }
                for (key, before_val) in before_obj {
                    if !after_obj.contains_key(key) && !is_flagged(change.after_unknown.as_ref(), key) {
                        lines.push(AttributeChange::Removed {
                            key: key.clone(),
                            before: display(before_val, is_sensitive(before_sensitive, key)),
                        });
                    }
                }
            }
        }
        Action::Create => {
            if let Some(after_obj) = change.after.as_ref().and_then(Value::as_object) {
                for (key, val) in after_obj {
                    lines.push(AttributeChange::Added {
                        key: key.clone(),
                        value: display(val, is_sensitive(after_sensitive, key)),
                    });
                }
            }
        }
        Action::Delete | Action::Read | Action::NoOp | Action::Unknown => return lines,
    }

    lines.extend(unknown_attributes(change));
    lines
}

/// Attributes whose values are only known after apply
fn unknown_attributes(change: &Change) -> Vec<AttributeChange> {
    let Some(unknown) = change.after_unknown.as_ref().and_then(Value::as_object) else {
        return Vec::new();
    };
    let after_obj = change.after.as_ref().and_then(Value::as_object);
    let before_obj = change.before.as_ref().and_then(Value::as_object);
    let before_sensitive = change.before_sensitive.as_ref();

    unknown
        .iter()
        .filter(|(key, flag)| {
            flag.as_bool() == Some(true) && after_obj.is_none_or(|obj| !obj.contains_key(*key))
        })
        .map(|(key, _)| match before_obj.and_then(|obj| obj.get(key)) {
            Some(before_val) => AttributeChange::Modified {
                key: key.clone(),
                before: display(before_val, is_sensitive(before_sensitive, key)),
                after: UNKNOWN_PLACEHOLDER.to_string(),
            },
            None => AttributeChange::Added {
                key: key.clone(),
                value: UNKNOWN_PLACEHOLDER.to_string(),
            },
        })
        .collect()
}
