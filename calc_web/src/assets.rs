//! Translation dictionaries compiled into the binary.

use rust_embed::RustEmbed;
use serde_json::Value;

use calc_core::i18n::{Locale, MessageSource};
use calc_core::{CalcError, CalcResult};

#[derive(RustEmbed)]
#[folder = "../messages/"]
struct EmbeddedMessages;

/// [`MessageSource`] over the embedded `messages/` directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedMessageSource;

fn load(path: &str) -> CalcResult<Value> {
    let file = EmbeddedMessages::get(path)
        .ok_or_else(|| CalcError::file_error("read", path, "not embedded"))?;
    serde_json::from_slice(&file.data).map_err(|e| CalcError::file_error("parse", path, e.to_string()))
}

impl MessageSource for EmbeddedMessageSource {
    fn load_base(&self, locale: Locale) -> CalcResult<Value> {
        load(&format!("{}.json", locale.code()))
    }

    fn override_names(&self, locale: Locale) -> CalcResult<Vec<String>> {
        let prefix = format!("{}/", locale.code());
        Ok(EmbeddedMessages::iter()
            .filter_map(|path| {
                let name = path.strip_prefix(&prefix)?;
                (!name.contains('/') && name.ends_with(".json")).then(|| name.to_string())
            })
            .collect())
    }

    fn load_override(&self, locale: Locale, name: &str) -> CalcResult<Value> {
        load(&format!("{}/{}", locale.code(), name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::i18n::resolve_messages;

    #[test]
    fn test_every_locale_has_an_embedded_base() {
        for &locale in Locale::ALL {
            let base = EmbeddedMessageSource.load_base(locale).unwrap();
            assert_eq!(base["site"]["name"], "Calcora");
        }
    }

    #[test]
    fn test_overrides_are_listed_and_merged() {
        let names = EmbeddedMessageSource.override_names(Locale::Ru).unwrap();
        assert!(names.contains(&"health.json".to_string()));

        let tree = resolve_messages(&EmbeddedMessageSource, "ru");
        assert_eq!(tree["calculators"]["bmi"]["title"], "Калькулятор ИМТ");
        assert_eq!(tree["calculators"]["age"]["title"], "Калькулятор возраста");
    }
}
