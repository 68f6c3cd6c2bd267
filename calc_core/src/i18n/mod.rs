//! # Localisation
//!
//! Nine supported locales, JSON message dictionaries, and the resolver that
//! merges each locale's base dictionary with its per-category overrides.
//!
//! Dictionaries are resolved once into a [`MessageStore`] and shared
//! read-only afterwards.
//!
//! ```rust
//! use calc_core::i18n::Locale;
//!
//! assert_eq!(Locale::resolve("ru"), Locale::Ru);
//! assert_eq!(Locale::resolve("xx"), Locale::En);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod merge;
pub mod resolver;
pub mod store;

pub use merge::deep_merge;
pub use resolver::{resolve_locale, resolve_messages, FsMessageSource, MessageSource};
pub use store::MessageStore;

/// A supported site locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ru,
    De,
    Es,
    Fr,
    It,
    Pl,
    Tr,
    Pt,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::En;

    pub const ALL: &'static [Locale] = &[
        Locale::En,
        Locale::Ru,
        Locale::De,
        Locale::Es,
        Locale::Fr,
        Locale::It,
        Locale::Pl,
        Locale::Tr,
        Locale::Pt,
    ];

    /// Two-letter code used in URLs and file names
    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
            Locale::De => "de",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::It => "it",
            Locale::Pl => "pl",
            Locale::Tr => "tr",
            Locale::Pt => "pt",
        }
    }

    /// Name of the language in that language
    pub const fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ru => "Русский",
            Locale::De => "Deutsch",
            Locale::Es => "Español",
            Locale::Fr => "Français",
            Locale::It => "Italiano",
            Locale::Pl => "Polski",
            Locale::Tr => "Türkçe",
            Locale::Pt => "Português",
        }
    }

    /// Exact lookup. Accepts region tags such as `pt-BR` by their primary
    /// subtag.
    pub fn from_code(code: &str) -> Option<Locale> {
        let primary = code.split(['-', '_']).next().unwrap_or(code).trim();
        Locale::ALL
            .iter()
            .copied()
            .find(|l| l.code().eq_ignore_ascii_case(primary))
    }

    /// Lookup that falls back to [`Locale::DEFAULT`] for unsupported codes.
    pub fn resolve(code: &str) -> Locale {
        Locale::from_code(code).unwrap_or(Locale::DEFAULT)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_locales_with_unique_codes() {
        assert_eq!(Locale::ALL.len(), 9);
        for &locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn test_region_tags_and_case() {
        assert_eq!(Locale::from_code("pt-BR"), Some(Locale::Pt));
        assert_eq!(Locale::from_code("DE"), Some(Locale::De));
        assert_eq!(Locale::from_code("ja"), None);
    }

    #[test]
    fn test_unsupported_falls_back_to_default() {
        assert_eq!(Locale::resolve("zz"), Locale::En);
        assert_eq!(Locale::resolve(""), Locale::En);
    }

    #[test]
    fn test_serde_uses_code() {
        assert_eq!(serde_json::to_value(Locale::Tr).unwrap(), "tr");
        let parsed: Locale = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(parsed, Locale::Fr);
    }
}
