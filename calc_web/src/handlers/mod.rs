//! Route handlers and the localisation helpers they share.

use axum::response::{IntoResponse, Json};
use serde::Serialize;

use calc_core::{CalculatorId, Category, Locale, MessageStore};

use crate::error::AppError;

pub mod api;
pub mod contact;
pub mod export;
pub mod pages;

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Link to a calculator page.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorLink {
    pub slug: &'static str,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub url: String,
}

impl CalculatorLink {
    pub fn new(messages: &MessageStore, locale: Locale, id: CalculatorId) -> Self {
        CalculatorLink {
            slug: id.slug(),
            category: id.category(),
            title: calculator_title(messages, locale, id),
            description: calculator_description(messages, locale, id),
            url: calculator_url(locale, id),
        }
    }
}

/// Localised calculator title, falling back to the catalogue name.
pub fn calculator_title(messages: &MessageStore, locale: Locale, id: CalculatorId) -> String {
    messages
        .get_str(locale, &format!("calculators.{}.title", id.slug()))
        .map(str::to_string)
        .unwrap_or_else(|| id.metadata().name.to_string())
}

pub fn calculator_description(messages: &MessageStore, locale: Locale, id: CalculatorId) -> String {
    messages
        .get_str(locale, &format!("calculators.{}.description", id.slug()))
        .map(str::to_string)
        .unwrap_or_else(|| id.metadata().description.to_string())
}

pub fn category_title(messages: &MessageStore, locale: Locale, category: Category) -> String {
    messages
        .get_str(locale, &format!("categories.{}.title", category.slug()))
        .unwrap_or(category.display_name())
        .to_string()
}

pub fn calculator_url(locale: Locale, id: CalculatorId) -> String {
    format!("/{}/{}/{}", locale.code(), id.category().slug(), id.slug())
}

pub fn category_url(locale: Locale, category: Category) -> String {
    format!("/{}/{}", locale.code(), category.slug())
}

/// Locale from a URL segment. Pages only exist under exact supported codes.
pub fn page_locale(segment: &str) -> Result<Locale, AppError> {
    Locale::ALL
        .iter()
        .copied()
        .find(|l| l.code() == segment)
        .ok_or_else(|| AppError::NotFound(format!("Locale '{}'", segment)))
}

/// Locale from a query parameter, falling back to the default.
pub fn query_locale(param: Option<&str>) -> Locale {
    param.map(Locale::resolve).unwrap_or_default()
}
