use std::collections::HashMap;

use serde_json::Value;
use tracing::info;

use super::resolver::resolve_locale;
use super::{Locale, MessageSource};

static MISSING: Value = Value::Null;

/// Merged translation trees for every supported locale, resolved once.
///
/// Lookups use dotted paths (`"calculators.bmi.title"`) and fall back to the
/// default locale when a key is missing.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    trees: HashMap<Locale, Value>,
}

impl MessageStore {
    /// Resolve every supported locale from `source`.
    pub fn load(source: &dyn MessageSource) -> Self {
        let trees: HashMap<Locale, Value> = Locale::ALL
            .iter()
            .map(|&locale| (locale, resolve_locale(source, locale)))
            .collect();
        info!(locales = trees.len(), "Message dictionaries resolved");
        MessageStore { trees }
    }

    pub fn from_trees(trees: impl IntoIterator<Item = (Locale, Value)>) -> Self {
        MessageStore {
            trees: trees.into_iter().collect(),
        }
    }

    /// Whole tree for a locale (`null` when the locale was never loaded).
    pub fn tree(&self, locale: Locale) -> &Value {
        self.trees.get(&locale).unwrap_or(&MISSING)
    }

    /// Value at a dotted path, falling back to the default locale.
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&Value> {
        lookup_path(self.tree(locale), key).or_else(|| {
            if locale == Locale::DEFAULT {
                None
            } else {
                lookup_path(self.tree(Locale::DEFAULT), key)
            }
        })
    }

    /// String at a dotted path, if any locale in the fallback chain has one.
    pub fn get_str(&self, locale: Locale, key: &str) -> Option<&str> {
        self.lookup(locale, key).and_then(Value::as_str)
    }

    /// String at a dotted path, or the key itself.
    pub fn text(&self, locale: Locale, key: &str) -> String {
        self.get_str(locale, key).unwrap_or(key).to_string()
    }

    /// String array at a dotted path (non-string items ignored).
    pub fn strings(&self, locale: Locale, key: &str) -> Vec<String> {
        match self.lookup(locale, key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn lookup_path<'a>(tree: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.')
        .try_fold(tree, |node, segment| node.as_object()?.get(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> MessageStore {
        MessageStore::from_trees([
            (
                Locale::En,
                json!({
                    "site": {"name": "Calcora"},
                    "calculators": {"bmi": {"title": "BMI Calculator", "keywords": ["bmi", "weight", 3]}}
                }),
            ),
            (Locale::De, json!({"calculators": {"bmi": {"title": "BMI-Rechner"}}})),
        ])
    }

    #[test]
    fn test_dotted_lookup() {
        let store = store();
        assert_eq!(store.text(Locale::De, "calculators.bmi.title"), "BMI-Rechner");
        assert_eq!(store.lookup(Locale::En, "site"), Some(&json!({"name": "Calcora"})));
    }

    #[test]
    fn test_falls_back_to_default_then_key() {
        let store = store();
        assert_eq!(store.text(Locale::De, "site.name"), "Calcora");
        assert_eq!(store.text(Locale::Ru, "site.name"), "Calcora");
        assert_eq!(store.text(Locale::De, "site.missing"), "site.missing");
        assert_eq!(store.get_str(Locale::En, "calculators.bmi"), None);
    }

    #[test]
    fn test_string_arrays() {
        let store = store();
        assert_eq!(store.strings(Locale::De, "calculators.bmi.keywords"), vec!["bmi", "weight"]);
        assert!(store.strings(Locale::En, "calculators.bmi.title").is_empty());
    }

    #[test]
    fn test_unloaded_locale_tree_is_null() {
        assert!(store().tree(Locale::Pt).is_null());
    }
}
