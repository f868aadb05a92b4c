use serde_json::Value as JsonValue;

/// Human-readable name of a JSON value's type, for error messages
pub const fn type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "list",
        JsonValue::Object(_) => "object",
    }
}

/// Gets a non-empty string field, treating null, non-strings and "" as absent
pub fn non_empty_str<'a>(object: &'a JsonValue, key: &str) -> Option<&'a str> {
    object
        .get(key)
        .and_then(JsonValue::as_str)
        .filter(|s| !s.is_empty())
}

/// Shortens a response body so it fits into a log line or chat message
pub fn snippet(text: &str) -> String {
    const MAX_CHARS: usize = 100;

    let text = text.trim();
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
