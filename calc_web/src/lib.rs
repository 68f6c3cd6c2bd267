//! # calc_web - Calcora HTTP Service
//!
//! Axum service exposing the calculator engine:
//!
//! - page data for `/{locale}`, `/{locale}/{category}` and
//!   `/{locale}/{category}/{calculator}`
//! - `POST /api/calculate/{slug}` plus dedicated routes for the calorie,
//!   equation, pregnancy and statistics calculators
//! - catalogue listing, search, merged translations
//! - PDF export and the contact form
//!
//! Translations are resolved once at startup into shared read-only state.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use calc_core::contact::{ContactSink, TracingContactSink};
use calc_core::i18n::{FsMessageSource, MessageSource};
use calc_core::{MessageStore, SearchIndex};

pub mod assets;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;

use assets::EmbeddedMessageSource;
use config::ServerConfig;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub messages: Arc<MessageStore>,
    pub search: Arc<SearchIndex>,
    pub contact: Arc<dyn ContactSink>,
}

impl AppState {
    pub fn new(messages: MessageStore, contact: Arc<dyn ContactSink>) -> Self {
        let search = SearchIndex::build(&messages);
        info!(entries = search.len(), "Search index built");
        AppState {
            messages: Arc::new(messages),
            search: Arc::new(search),
            contact,
        }
    }

    /// Resolve dictionaries from the configured directory, or from the
    /// embedded copy when none is configured.
    pub fn from_config(config: &ServerConfig) -> Self {
        let source: Box<dyn MessageSource> = match &config.messages_dir {
            Some(dir) => {
                info!(dir = %dir.display(), "Loading messages from directory");
                Box::new(FsMessageSource::new(dir))
            }
            None => {
                info!("Loading embedded messages");
                Box::new(EmbeddedMessageSource)
            }
        };
        let messages = MessageStore::load(source.as_ref());
        AppState::new(messages, Arc::new(TracingContactSink))
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))

        // JSON API
        .route("/api/calculators", get(handlers::api::list_calculators))
        .route("/api/calculate/{slug}", post(handlers::api::calculate))
        .route("/api/calories", post(handlers::api::calories))
        .route("/api/equations", post(handlers::api::equations))
        .route("/api/pregnancy", post(handlers::api::pregnancy))
        .route("/api/statistics", post(handlers::api::statistics))
        .route("/api/search", get(handlers::api::search))
        .route("/api/messages/{locale}", get(handlers::api::messages))
        .route("/api/contact", post(handlers::contact::submit))
        .route("/api/export/pdf", post(handlers::export::export_pdf))

        // Page data
        .route("/{locale}", get(handlers::pages::home))
        .route("/{locale}/{category}", get(handlers::pages::category))
        .route("/{locale}/{category}/{calculator}", get(handlers::pages::calculator))

        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
