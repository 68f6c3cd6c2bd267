//! Page data for the localised site.
//!
//! Unknown locales, categories and calculators are 404s, as is a calculator
//! requested under a category it does not belong to.

use axum::extract::{Path, State};
use serde::Serialize;

use calc_core::catalog::Variable;
use calc_core::{CalculatorId, Category, Locale};

use super::{calculator_title, calculator_url, category_title, category_url, page_locale, CalculatorLink};
use crate::error::{success, ApiResult, AppError};
use crate::AppState;

#[derive(Debug, Serialize)]
struct Alternate {
    locale: Locale,
    language: &'static str,
    url: String,
}

#[derive(Debug, Serialize)]
struct Breadcrumb {
    title: String,
    url: String,
}

#[derive(Debug, Serialize)]
struct CategorySummary {
    slug: &'static str,
    title: String,
    url: String,
    calculators: Vec<CalculatorLink>,
}

#[derive(Debug, Serialize)]
struct HomePage {
    locale: Locale,
    site_name: String,
    tagline: String,
    categories: Vec<CategorySummary>,
    alternates: Vec<Alternate>,
}

#[derive(Debug, Serialize)]
struct CategoryPage {
    locale: Locale,
    slug: &'static str,
    title: String,
    calculators: Vec<CalculatorLink>,
    breadcrumbs: Vec<Breadcrumb>,
    alternates: Vec<Alternate>,
}

#[derive(Debug, Serialize)]
struct CalculatorPage {
    locale: Locale,
    slug: &'static str,
    category: Category,
    title: String,
    description: String,
    formula: &'static str,
    inputs: Vec<Variable>,
    api_endpoint: String,
    breadcrumbs: Vec<Breadcrumb>,
    alternates: Vec<Alternate>,
    related: Vec<CalculatorLink>,
}

fn alternates(path: impl Fn(Locale) -> String) -> Vec<Alternate> {
    Locale::ALL
        .iter()
        .map(|&locale| Alternate {
            locale,
            language: locale.native_name(),
            url: path(locale),
        })
        .collect()
}

fn find_category(slug: &str) -> Result<Category, AppError> {
    Category::from_slug(slug).ok_or_else(|| AppError::NotFound(format!("Category '{}'", slug)))
}

fn home_breadcrumb(state: &AppState, locale: Locale) -> Breadcrumb {
    Breadcrumb {
        title: state.messages.text(locale, "nav.home"),
        url: format!("/{}", locale.code()),
    }
}

fn category_links(state: &AppState, locale: Locale, category: Category) -> Vec<CalculatorLink> {
    CalculatorId::in_category(category)
        .into_iter()
        .map(|id| CalculatorLink::new(&state.messages, locale, id))
        .collect()
}

pub async fn home(State(state): State<AppState>, Path(locale): Path<String>) -> ApiResult {
    let locale = page_locale(&locale)?;

    let mut categories = Category::ALL.to_vec();
    categories.sort_by_key(|c| c.sort_order());

    let categories = categories
        .into_iter()
        .map(|category| CategorySummary {
            slug: category.slug(),
            title: category_title(&state.messages, locale, category),
            url: category_url(locale, category),
            calculators: category_links(&state, locale, category),
        })
        .collect();

    success(HomePage {
        locale,
        site_name: state.messages.text(locale, "site.name"),
        tagline: state.messages.text(locale, "site.tagline"),
        categories,
        alternates: alternates(|l| format!("/{}", l.code())),
    })
}

pub async fn category(
    State(state): State<AppState>,
    Path((locale, category)): Path<(String, String)>,
) -> ApiResult {
    let locale = page_locale(&locale)?;
    let category = find_category(&category)?;
    let title = category_title(&state.messages, locale, category);

    success(CategoryPage {
        locale,
        slug: category.slug(),
        calculators: category_links(&state, locale, category),
        breadcrumbs: vec![
            home_breadcrumb(&state, locale),
            Breadcrumb {
                title: title.clone(),
                url: category_url(locale, category),
            },
        ],
        title,
        alternates: alternates(|l| category_url(l, category)),
    })
}

pub async fn calculator(
    State(state): State<AppState>,
    Path((locale, category, calculator)): Path<(String, String, String)>,
) -> ApiResult {
    let locale = page_locale(&locale)?;
    let category = find_category(&category)?;
    let id = CalculatorId::from_slug(&calculator)
        .filter(|id| id.category() == category)
        .ok_or_else(|| AppError::NotFound(format!("Calculator '{}'", calculator)))?;

    let meta = id.metadata();
    let link = CalculatorLink::new(&state.messages, locale, id);
    let related = CalculatorId::in_category(category)
        .into_iter()
        .filter(|other| *other != id)
        .map(|other| CalculatorLink::new(&state.messages, locale, other))
        .collect();

    success(CalculatorPage {
        locale,
        slug: meta.slug,
        category,
        description: link.description,
        formula: meta.formula_plain,
        inputs: meta.variables,
        api_endpoint: format!("/api/calculate/{}", meta.slug),
        breadcrumbs: vec![
            home_breadcrumb(&state, locale),
            Breadcrumb {
                title: category_title(&state.messages, locale, category),
                url: category_url(locale, category),
            },
            Breadcrumb {
                title: calculator_title(&state.messages, locale, id),
                url: calculator_url(locale, id),
            },
        ],
        title: link.title,
        alternates: alternates(|l| calculator_url(l, id)),
        related,
    })
}
