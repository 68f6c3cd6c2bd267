//! # Message Resolver
//!
//! Builds one merged translation tree per locale: the locale's base
//! dictionary, then every override file of that locale merged on top in file
//! name order.
//!
//! Failures degrade instead of propagating:
//! - unsupported locale code: resolved as the default locale
//! - no override directory: no overrides
//! - unreadable or malformed override file: logged and skipped
//! - unreadable base dictionary: the default locale's base is used
//! - unreadable default base: empty tree, logged as an error

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use super::{deep_merge, Locale};
use crate::errors::{CalcError, CalcResult};

/// Where dictionaries come from.
pub trait MessageSource: Send + Sync {
    /// The locale's base dictionary.
    fn load_base(&self, locale: Locale) -> CalcResult<Value>;

    /// Names of the locale's override files. An absent override directory
    /// is an empty list, not an error.
    fn override_names(&self, locale: Locale) -> CalcResult<Vec<String>>;

    /// One override file by name, as returned from [`override_names`](Self::override_names).
    fn load_override(&self, locale: Locale, name: &str) -> CalcResult<Value>;
}

/// Dictionaries in a directory: `<root>/<code>.json` plus `<root>/<code>/*.json`.
#[derive(Debug, Clone)]
pub struct FsMessageSource {
    root: PathBuf,
}

impl FsMessageSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsMessageSource { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn override_dir(&self, locale: Locale) -> PathBuf {
        self.root.join(locale.code())
    }
}

/// Parse a dictionary file, labelling errors with its path.
pub(crate) fn parse_dictionary(path: &str, contents: &str) -> CalcResult<Value> {
    serde_json::from_str(contents).map_err(|e| CalcError::file_error("parse", path, e.to_string()))
}

fn read_json(path: &Path) -> CalcResult<Value> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    parse_dictionary(&path.display().to_string(), &contents)
}

impl MessageSource for FsMessageSource {
    fn load_base(&self, locale: Locale) -> CalcResult<Value> {
        read_json(&self.root.join(format!("{}.json", locale.code())))
    }

    fn override_names(&self, locale: Locale) -> CalcResult<Vec<String>> {
        let dir = self.override_dir(locale);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(CalcError::file_error("list", dir.display().to_string(), e.to_string()))
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry
                .map_err(|e| CalcError::file_error("list", dir.display().to_string(), e.to_string()))?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }

    fn load_override(&self, locale: Locale, name: &str) -> CalcResult<Value> {
        read_json(&self.override_dir(locale).join(name))
    }
}

fn load_object_base(source: &dyn MessageSource, locale: Locale) -> CalcResult<Value> {
    let base = source.load_base(locale)?;
    if base.is_object() {
        Ok(base)
    } else {
        Err(CalcError::invalid_input(
            "base",
            locale.code(),
            "Base dictionary must be a JSON object",
        ))
    }
}

fn load_base_with_fallback(source: &dyn MessageSource, locale: Locale) -> Value {
    match load_object_base(source, locale) {
        Ok(base) => return base,
        Err(e) if locale != Locale::DEFAULT => {
            warn!(locale = %locale, error = %e, "Base dictionary unavailable, using default locale");
        }
        Err(e) => {
            error!(locale = %locale, error = %e, "Default base dictionary unavailable");
            return Value::Object(Map::new());
        }
    }

    match load_object_base(source, Locale::DEFAULT) {
        Ok(base) => base,
        Err(e) => {
            error!(locale = %Locale::DEFAULT, error = %e, "Default base dictionary unavailable");
            Value::Object(Map::new())
        }
    }
}

/// Resolve the merged translation tree for a locale code.
///
/// The code goes through [`Locale::resolve`], so `ru-RU` and `RU` both load
/// `ru`. Never fails; see the module docs for how each failure degrades.
pub fn resolve_messages(source: &dyn MessageSource, code: &str) -> Value {
    let locale = Locale::resolve(code);
    if locale.code() != code {
        debug!(requested = code, resolved = %locale, "Locale resolved to supported code");
    }
    resolve_locale(source, locale)
}

/// Resolve the merged translation tree for a supported locale.
pub fn resolve_locale(source: &dyn MessageSource, locale: Locale) -> Value {
    let mut tree = load_base_with_fallback(source, locale);

    let mut names = match source.override_names(locale) {
        Ok(names) => names,
        Err(e) => {
            warn!(locale = %locale, error = %e, "Override directory unreadable, skipping overrides");
            Vec::new()
        }
    };
    names.sort();

    for name in names {
        match source.load_override(locale, &name) {
            Ok(overrides @ Value::Object(_)) => {
                debug!(locale = %locale, file = %name, "Merging override");
                deep_merge(&mut tree, overrides);
            }
            Ok(_) => {
                warn!(locale = %locale, file = %name, "Override is not a JSON object, skipping");
            }
            Err(e) => {
                warn!(locale = %locale, file = %name, error = %e, "Override unreadable, skipping");
            }
        }
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, contents: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "en.json",
            r#"{"site": {"name": "Calcora"}, "calculators": {"bmi": {"title": "BMI", "keywords": ["bmi"]}}}"#,
        );
        write(dir.path(), "ru.json", r#"{"site": {"name": "Калькора"}}"#);
        dir
    }

    #[test]
    fn test_base_without_overrides() {
        let dir = fixture();
        let source = FsMessageSource::new(dir.path());
        let tree = resolve_messages(&source, "ru");
        assert_eq!(tree, json!({"site": {"name": "Калькора"}}));
    }

    #[test]
    fn test_overrides_win_and_arrays_replace() {
        let dir = fixture();
        write(
            dir.path(),
            "en/health.json",
            r#"{"calculators": {"bmi": {"title": "Body Mass Index", "keywords": ["body"]}}}"#,
        );
        let tree = resolve_messages(&FsMessageSource::new(dir.path()), "en");
        assert_eq!(tree["calculators"]["bmi"]["title"], "Body Mass Index");
        assert_eq!(tree["calculators"]["bmi"]["keywords"], json!(["body"]));
        assert_eq!(tree["site"]["name"], "Calcora");
    }

    #[test]
    fn test_overrides_applied_in_name_order() {
        let dir = fixture();
        write(dir.path(), "en/b.json", r#"{"site": {"name": "B"}}"#);
        write(dir.path(), "en/a.json", r#"{"site": {"name": "A"}}"#);
        let tree = resolve_messages(&FsMessageSource::new(dir.path()), "en");
        assert_eq!(tree["site"]["name"], "B");
    }

    #[test]
    fn test_malformed_override_skipped() {
        let dir = fixture();
        write(dir.path(), "en/broken.json", "{ not json");
        write(dir.path(), "en/list.json", "[1, 2]");
        write(dir.path(), "en/notes.txt", "ignored");
        write(dir.path(), "en/health.json", r#"{"site": {"tagline": "Fast"}}"#);
        let tree = resolve_messages(&FsMessageSource::new(dir.path()), "en");
        assert_eq!(tree["site"]["name"], "Calcora");
        assert_eq!(tree["site"]["tagline"], "Fast");
    }

    #[test]
    fn test_unsupported_locale_resolves_as_default() {
        let dir = fixture();
        let source = FsMessageSource::new(dir.path());
        assert_eq!(resolve_messages(&source, "xx"), resolve_messages(&source, "en"));
    }

    #[test]
    fn test_region_tags_and_case_map_to_supported_locale() {
        let dir = fixture();
        let source = FsMessageSource::new(dir.path());
        let ru = resolve_messages(&source, "ru");
        assert_eq!(resolve_messages(&source, "ru-RU"), ru);
        assert_eq!(resolve_messages(&source, "RU"), ru);
        assert_eq!(resolve_messages(&source, "xx-RU")["site"]["name"], "Calcora");
    }

    #[test]
    fn test_missing_base_falls_back_to_default() {
        let dir = fixture();
        let tree = resolve_messages(&FsMessageSource::new(dir.path()), "de");
        assert_eq!(tree["site"]["name"], "Calcora");
    }

    #[test]
    fn test_missing_default_base_yields_empty_tree() {
        let dir = TempDir::new().unwrap();
        let tree = resolve_messages(&FsMessageSource::new(dir.path()), "en");
        assert_eq!(tree, json!({}));
    }
}
