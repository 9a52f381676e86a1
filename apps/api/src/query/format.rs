//! Text rendering helpers for matcher answers.

use serde_json::Value;

pub const NOT_PROVIDED: &str = "Not provided";

/// Renders a value the way it is shown to a reader: strings verbatim,
/// structured values as 2-space indented JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

/// A field's text, or `fallback` when the field is absent or null.
pub fn field_text(value: Option<&Value>, fallback: &str) -> String {
    match value {
        Some(Value::Null) | None => fallback.to_string(),
        Some(v) => render_value(v),
    }
}

/// The string members of a sequence. Non-sequences render as empty.
pub fn string_list(value: Option<&Value>) -> Vec<&str> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// `items` as `- a\n- b`, always starting with a dash.
pub fn bullets(items: &[&str]) -> String {
    format!("- {}", items.join("\n- "))
}

/// `performance` → `Performance`, `daily_users` → `Daily Users`.
pub fn title_case(key: &str) -> String {
    key.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_string_is_verbatim() {
        assert_eq!(render_value(&json!("2 years")), "2 years");
    }

    #[test]
    fn test_render_list_is_indented_json() {
        assert_eq!(
            render_value(&json!(["Python", "Go"])),
            "[\n  \"Python\",\n  \"Go\"\n]"
        );
    }

    #[test]
    fn test_field_text_falls_back_on_missing_and_null() {
        assert_eq!(field_text(None, NOT_PROVIDED), "Not provided");
        assert_eq!(field_text(Some(&Value::Null), NOT_PROVIDED), "Not provided");
        assert_eq!(field_text(Some(&json!("x")), NOT_PROVIDED), "x");
    }

    #[test]
    fn test_string_list_ignores_non_sequences() {
        assert!(string_list(Some(&json!("Python"))).is_empty());
        assert!(string_list(None).is_empty());
        assert_eq!(string_list(Some(&json!(["a", 1, "b"]))), vec!["a", "b"]);
    }

    #[test]
    fn test_bullets() {
        assert_eq!(bullets(&["a", "b"]), "- a\n- b");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("performance"), "Performance");
        assert_eq!(title_case("daily_users"), "Daily Users");
        assert_eq!(title_case("iOT"), "Iot");
    }
}
