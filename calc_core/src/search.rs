//! # Search Index
//!
//! In-memory index over the localised catalogue: one entry per
//! (locale, calculator). Titles, descriptions and keywords come from the
//! locale's `calculators.<slug>` messages, falling back to the catalogue's
//! English metadata.
//!
//! Scoring, summed per entry:
//!
//! | Match | Points |
//! |-------|--------|
//! | query equals title | 100 |
//! | title starts with query | 60 |
//! | title contains query | 40 |
//! | token found in a keyword | 25 per token |
//! | token found in the slug | 30 per token |
//! | token found in the description | 10 per token |
//!
//! Only the best of the three title rules counts.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::{CalculatorId, Category};
use crate::i18n::{Locale, MessageStore};

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 50;

#[derive(Debug, Clone)]
struct IndexEntry {
    id: CalculatorId,
    title: String,
    description: String,
    title_lower: String,
    description_lower: String,
    keywords_lower: Vec<String>,
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub slug: &'static str,
    pub category: Category,
    pub title: String,
    pub description: String,
    /// Page URL, `/{locale}/{category}/{slug}`
    pub url: String,
    pub score: u32,
}

#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: HashMap<Locale, Vec<IndexEntry>>,
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl SearchIndex {
    /// Build entries for every locale and calculator.
    pub fn build(messages: &MessageStore) -> Self {
        let mut entries = HashMap::new();
        for &locale in Locale::ALL {
            let list: Vec<IndexEntry> = CalculatorId::ALL
                .iter()
                .map(|&id| {
                    let meta = id.metadata();
                    let prefix = format!("calculators.{}", meta.slug);
                    let title = messages
                        .get_str(locale, &format!("{}.title", prefix))
                        .unwrap_or(meta.name)
                        .to_string();
                    let description = messages
                        .get_str(locale, &format!("{}.description", prefix))
                        .unwrap_or(meta.description)
                        .to_string();
                    let mut keywords = messages.strings(locale, &format!("{}.keywords", prefix));
                    keywords.extend(meta.keywords.iter().map(|k| k.to_string()));

                    IndexEntry {
                        id,
                        title_lower: normalize(&title),
                        description_lower: description.to_lowercase(),
                        keywords_lower: keywords.iter().map(|k| k.to_lowercase()).collect(),
                        title,
                        description,
                    }
                })
                .collect();
            entries.insert(locale, list);
        }
        SearchIndex { entries }
    }

    /// Number of indexed entries across all locales
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Search one locale. An empty query returns nothing; `limit` is clamped
    /// to `1..=50`.
    pub fn search(&self, query: &str, locale: Locale, limit: usize) -> Vec<SearchHit> {
        let query = normalize(query);
        if query.is_empty() {
            return Vec::new();
        }
        let tokens: Vec<&str> = query.split(' ').collect();
        let limit = limit.clamp(1, MAX_LIMIT);

        let Some(entries) = self.entries.get(&locale) else {
            return Vec::new();
        };

        let mut hits: Vec<SearchHit> = entries
            .iter()
            .filter_map(|entry| {
                let score = score_entry(entry, &query, &tokens);
                (score > 0).then(|| SearchHit {
                    slug: entry.id.slug(),
                    category: entry.id.category(),
                    title: entry.title.clone(),
                    description: entry.description.clone(),
                    url: format!("/{}/{}/{}", locale.code(), entry.id.category().slug(), entry.id.slug()),
                    score,
                })
            })
            .collect();

        hits.sort_by(|a, b| match b.score.cmp(&a.score) {
            Ordering::Equal => a.title.cmp(&b.title),
            other => other,
        });
        hits.truncate(limit);
        hits
    }
}

fn score_entry(entry: &IndexEntry, query: &str, tokens: &[&str]) -> u32 {
    let mut score = if entry.title_lower == query {
        100
    } else if entry.title_lower.starts_with(query) {
        60
    } else if entry.title_lower.contains(query) {
        40
    } else {
        0
    };

    let slug = entry.id.slug();
    for token in tokens {
        if entry.keywords_lower.iter().any(|k| k.contains(token)) {
            score += 25;
        }
        if slug.contains(token) {
            score += 30;
        }
        if entry.description_lower.contains(token) {
            score += 10;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn index() -> SearchIndex {
        let store = MessageStore::from_trees([
            (
                Locale::En,
                json!({"calculators": {"bmi": {"title": "BMI Calculator", "keywords": ["body mass"]}}}),
            ),
            (
                Locale::Ru,
                json!({"calculators": {"bmi": {"title": "Калькулятор ИМТ", "description": "Индекс массы тела", "keywords": ["имт", "вес"]}}}),
            ),
        ]);
        SearchIndex::build(&store)
    }

    #[test]
    fn test_one_entry_per_locale_and_calculator() {
        assert_eq!(index().len(), Locale::ALL.len() * CalculatorId::ALL.len());
    }

    #[test]
    fn test_exact_title_ranks_first() {
        let hits = index().search("bmi calculator", Locale::En, 10);
        assert_eq!(hits[0].slug, "bmi");
        assert!(hits[0].score >= 100);
        assert_eq!(hits[0].url, "/en/health/bmi");
    }

    #[test]
    fn test_localised_keywords_case_insensitive() {
        let hits = index().search("ИМТ", Locale::Ru, 5);
        assert_eq!(hits[0].slug, "bmi");
        assert_eq!(hits[0].title, "Калькулятор ИМТ");
    }

    #[test]
    fn test_falls_back_to_catalogue_metadata() {
        let hits = index().search("mortgage", Locale::De, 5);
        assert_eq!(hits[0].slug, "mortgage");
        assert_eq!(hits[0].title, "Mortgage Calculator");
    }

    #[test]
    fn test_empty_query_and_limit_clamp() {
        let index = index();
        assert!(index.search("   ", Locale::En, 10).is_empty());
        assert_eq!(index.search("calculator", Locale::En, 0).len(), 1);
        assert!(index.search("calculator", Locale::En, 500).len() <= MAX_LIMIT);
    }

    #[test]
    fn test_ties_sorted_by_title() {
        let hits = index().search("converter", Locale::En, 50);
        assert!(hits.len() > 2);
        for pair in hits.windows(2) {
            assert!(pair[0].score > pair[1].score || pair[0].title <= pair[1].title);
        }
    }

    #[test]
    fn test_no_match() {
        assert!(index().search("zzzqqq", Locale::En, 10).is_empty());
    }
}
