//! Field-level change descriptions for update entries

use serde_json::Value;

/// Longest string value shown before truncation
const MAX_SHOWN_CHARS: usize = 40;

/// Describe top-level field changes between two JSON objects
///
/// Returns `None` when nothing changed, e.g. `amount: 3500.0 -> 4000.0`.
pub fn describe_changes(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        return (before != after).then(|| format!("{} -> {}", show(before), show(after)));
    };

    let mut changes: Vec<String> = before_obj
        .iter()
        .filter_map(|(key, old)| match after_obj.get(key) {
            Some(new) if new != old => Some(format!("{}: {} -> {}", key, show(old), show(new))),
            Some(_) => None,
            None => Some(format!("{}: {} -> (removed)", key, show(old))),
        })
        .collect();

    changes.extend(
        after_obj
            .iter()
            .filter(|(key, _)| !before_obj.contains_key(*key))
            .map(|(key, new)| format!("{}: (added) -> {}", key, show(new))),
    );

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn show(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > MAX_SHOWN_CHARS => {
            let head: String = s.chars().take(MAX_SHOWN_CHARS - 3).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(fields) => format!("{{{} fields}}", fields.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_changed_fields_listed() {
        let before = json!({"title": "Groceries", "amount": 3500.0, "category": "Food"});
        let after = json!({"title": "Groceries", "amount": 4000.0, "category": "Other"});

        let diff = describe_changes(&before, &after).unwrap();
        assert!(diff.contains("amount: 3500.0 -> 4000.0"));
        assert!(diff.contains("category: \"Food\" -> \"Other\""));
        assert!(!diff.contains("title"));
    }

    #[test]
    fn test_identical_values_have_no_diff() {
        let value = json!({"amount": 1.0});
        assert!(describe_changes(&value, &value).is_none());
    }

    #[test]
    fn test_long_strings_truncated_on_char_boundary() {
        let before = json!({"title": "₹".repeat(60)});
        let after = json!({"title": "short"});
        let diff = describe_changes(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }
}
