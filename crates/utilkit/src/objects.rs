//! Object helpers over JSON values.

use serde_json::{Map, Value};

/// The entries of `new` that differ from `base`.
///
/// When both sides hold an object under the same key the diff recurses into
/// it; any other changed value (including arrays) is copied whole. Keys only
/// present in `base` are ignored.
///
/// ```
/// use serde_json::json;
/// use utilkit::object_diffs;
///
/// let new = json!({"a": 1, "b": {"c": 2, "d": 3}});
/// let base = json!({"a": 1, "b": {"c": 2, "d": 4}});
/// let diff = object_diffs(new.as_object().unwrap(), base.as_object().unwrap());
/// assert_eq!(serde_json::Value::Object(diff), json!({"b": {"d": 3}}));
/// ```
pub fn object_diffs(new: &Map<String, Value>, base: &Map<String, Value>) -> Map<String, Value> {
    new.iter()
        .filter_map(|(key, value)| {
            let old = base.get(key);
            if old == Some(value) {
                return None;
            }
            let diff = match (value, old) {
                (Value::Object(new_obj), Some(Value::Object(old_obj))) => {
                    Value::Object(object_diffs(new_obj, old_obj))
                }
                _ => value.clone(),
            };
            Some((key.clone(), diff))
        })
        .collect()
}

/// Whether the value is an object with no keys.
pub fn is_empty_object(value: &Value) -> bool {
    matches!(value, Value::Object(map) if map.is_empty())
}
