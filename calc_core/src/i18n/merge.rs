use serde_json::Value;

/// Recursively merge `source` into `target`.
///
/// Objects merge key by key; any other value in `source` (arrays included)
/// replaces the value in `target` wholesale.
///
/// ```rust
/// use calc_core::i18n::deep_merge;
/// use serde_json::json;
///
/// let mut base = json!({"a": {"x": 1, "y": 2}, "list": [1, 2]});
/// deep_merge(&mut base, json!({"a": {"y": 3}, "list": [9]}));
/// assert_eq!(base, json!({"a": {"x": 1, "y": 3}, "list": [9]}));
/// ```
pub fn deep_merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, value) in source_map {
                deep_merge(target_map.entry(key).or_insert(Value::Null), value);
            }
        }
        (target, source) => {
            *target = source;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_override_wins_at_leaf() {
        let mut base = json!({"calculators": {"bmi": {"title": "BMI", "description": "Base"}}});
        deep_merge(&mut base, json!({"calculators": {"bmi": {"title": "Body Mass Index"}}}));
        assert_eq!(base["calculators"]["bmi"]["title"], "Body Mass Index");
        assert_eq!(base["calculators"]["bmi"]["description"], "Base");
    }

    #[test]
    fn test_arrays_replace_instead_of_concatenating() {
        let mut base = json!({"keywords": ["a", "b"]});
        deep_merge(&mut base, json!({"keywords": ["c"]}));
        assert_eq!(base, json!({"keywords": ["c"]}));
    }

    #[test]
    fn test_new_keys_added_and_scalar_replaces_object() {
        let mut base = json!({"nav": {"home": "Home"}});
        deep_merge(&mut base, json!({"nav": "flat", "footer": {"about": "About"}}));
        assert_eq!(base, json!({"nav": "flat", "footer": {"about": "About"}}));
    }
}
