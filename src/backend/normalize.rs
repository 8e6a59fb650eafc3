use serde_json::Value;

/// Key the upstream workflow emits when it stringifies a one-item result list.
pub const SENTINEL_KEY: &str = "object Object";

/// Undo the upstream wrapper `{"object Object": [ {...} ]}`.
///
/// n8n sometimes returns the real payload as the first element of an array
/// stored under the literal key `"object Object"`. That looks like a generic
/// object being stringified upstream, so it is almost certainly a bug on their
/// side. Only that exact shape (key present, non-empty array) is unwrapped;
/// everything else passes through untouched. Delete this once upstream is fixed.
pub fn unwrap_payload(raw: Value) -> Value {
    let mut map = match raw {
        Value::Object(map) => map,
        other => return other,
    };

    if let Some(Value::Array(items)) = map.get_mut(SENTINEL_KEY) {
        if !items.is_empty() {
            log::warn!("Unwrapping '{}' wrapper from webhook response", SENTINEL_KEY);
            return items.swap_remove(0);
        }
    }

    Value::Object(map)
}
