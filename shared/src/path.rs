use serde_json::Value;

/// Walks a `.`-separated path through objects (and arrays by numeric index).
///
/// Returns `None` as soon as a segment is missing, but `Some(Value::Null)`
/// when the path runs into an explicit null. Callers that need to tell
/// "path absent" apart from "path present but null" rely on that split.
pub fn get<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut cursor = value;

    for segment in path.split('.') {
        cursor = match cursor {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };

        if cursor.is_null() {
            return Some(cursor);
        }
    }

    Some(cursor)
}

/// Same as [`get`] but substitutes `default` for a missing path. An explicit
/// null is still returned as null, not as the default.
pub fn get_or<'a>(value: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    get(value, path).unwrap_or(default)
}
