use serde_json::Value;

/// Walks a path of object keys into a JSON value.
/// Returns None if any intermediate key is absent or not an object.
pub fn get_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = current.as_object()?.get(*key)?;
    }
    Some(current)
}

/// Looks up a string field, substituting a default when the field is
/// absent, null, or not a string. A null is treated the same as a missing
/// field so that downstream formatting never sees "null".
pub fn get_string_or(value: &Value, key: &str, default: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => default.to_string(),
    }
}

/// Looks up a boolean field with a default.
pub fn get_bool_or(value: &Value, key: &str, default: bool) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(default)
}

/// Looks up an integer field with a default.
pub fn get_i64_or(value: &Value, key: &str, default: i64) -> i64 {
    value.get(key).and_then(Value::as_i64).unwrap_or(default)
}

/// Renders a scalar that upstream encodes inconsistently as either a number
/// or a string (staff ids, prices). Anything else becomes the default.
pub fn scalar_to_string(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_path_walks_nested_objects() {
        let doc = json!({"a": {"b": {"c": 7}}});
        assert_eq!(get_path(&doc, &["a", "b", "c"]), Some(&json!(7)));
    }

    #[test]
    fn get_path_defaults_on_missing_or_non_object() {
        let doc = json!({"a": {"b": 1}});
        assert_eq!(get_path(&doc, &["a", "x"]), None);
        // Intermediate value is a number, not an object
        assert_eq!(get_path(&doc, &["a", "b", "c"]), None);
        assert_eq!(get_path(&json!([1, 2]), &["a"]), None);
    }

    #[test]
    fn string_lookup_treats_null_as_missing() {
        let doc = json!({"name": null, "email": "x@y.z"});
        assert_eq!(get_string_or(&doc, "name", ""), "");
        assert_eq!(get_string_or(&doc, "email", ""), "x@y.z");
        assert_eq!(get_string_or(&doc, "phone", "none"), "none");
    }

    #[test]
    fn scalar_accepts_numbers_and_strings() {
        let doc = json!({"id": 11, "price": "45.00", "bad": [1]});
        assert_eq!(scalar_to_string(doc.get("id"), ""), "11");
        assert_eq!(scalar_to_string(doc.get("price"), "0"), "45.00");
        assert_eq!(scalar_to_string(doc.get("bad"), "0"), "0");
        assert_eq!(scalar_to_string(None, "0"), "0");
    }
}
