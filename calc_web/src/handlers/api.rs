use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use calc_core::search::DEFAULT_LIMIT;
use calc_core::{run_calculator, CalculatorId, Locale};

use super::{query_locale, CalculatorLink};
use crate::error::{success, ApiJson, ApiResult};
use crate::AppState;

// ============================================================================
// Calculators
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LocaleParams {
    pub locale: Option<String>,
}

#[derive(Debug, Serialize)]
struct CatalogListing {
    locale: Locale,
    count: usize,
    calculators: Vec<CalculatorLink>,
}

pub async fn list_calculators(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> ApiResult {
    let locale = query_locale(params.locale.as_deref());
    let calculators: Vec<CalculatorLink> = CalculatorId::ALL
        .iter()
        .map(|&id| CalculatorLink::new(&state.messages, locale, id))
        .collect();

    success(CatalogListing {
        locale,
        count: calculators.len(),
        calculators,
    })
}

fn evaluate(slug: &str, body: Value) -> ApiResult {
    debug!(calculator = slug, "Evaluating");
    success(run_calculator(slug, body)?)
}

pub async fn calculate(Path(slug): Path<String>, ApiJson(body): ApiJson<Value>) -> ApiResult {
    evaluate(&slug, body)
}

pub async fn calories(ApiJson(body): ApiJson<Value>) -> ApiResult {
    evaluate("calories", body)
}

pub async fn equations(ApiJson(body): ApiJson<Value>) -> ApiResult {
    evaluate("equations", body)
}

pub async fn pregnancy(ApiJson(body): ApiJson<Value>) -> ApiResult {
    evaluate("pregnancy", body)
}

pub async fn statistics(ApiJson(body): ApiJson<Value>) -> ApiResult {
    evaluate("statistics", body)
}

// ============================================================================
// Search and messages
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub locale: Option<String>,
    /// Parsed leniently; anything unparseable means the default
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    query: String,
    locale: Locale,
    results: Vec<calc_core::search::SearchHit>,
}

pub async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> ApiResult {
    let locale = query_locale(params.locale.as_deref());
    let limit = params
        .limit
        .as_deref()
        .and_then(|l| l.trim().parse().ok())
        .unwrap_or(DEFAULT_LIMIT);
    let query = params.q.unwrap_or_default();

    let results = state.search.search(&query, locale, limit);
    success(SearchResponse { query, locale, results })
}

#[derive(Debug, Serialize)]
struct MessagesResponse<'a> {
    locale: Locale,
    messages: &'a Value,
}

/// Merged translation tree. Unsupported locales resolve to the default.
pub async fn messages(State(state): State<AppState>, Path(locale): Path<String>) -> ApiResult {
    let locale = Locale::resolve(&locale);
    success(MessagesResponse {
        locale,
        messages: state.messages.tree(locale),
    })
}
