use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use calc_core::pdf::{render_calculation_pdf, CalculationReport};
use calc_core::{CalcError, CalculationRequest};

use super::{calculator_title, query_locale};
use crate::error::{ApiJson, AppError};
use crate::AppState;

#[derive(Debug, Deserialize)]
struct ExportRequest {
    /// Calculator slug
    calculator: String,
    input: Value,
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

/// Run a calculator and return its report as `application/pdf`.
pub async fn export_pdf(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> Result<Response, AppError> {
    let export: ExportRequest = serde_json::from_value(body).map_err(CalcError::from_body)?;
    let locale = query_locale(export.locale.as_deref());

    let request = CalculationRequest::from_json(&export.calculator, export.input)?;
    let result = request.evaluate()?;
    let id = request.id();
    let title = export
        .title
        .unwrap_or_else(|| calculator_title(&state.messages, locale, id));

    let report = CalculationReport::from_evaluation(&request, &result, title)?
        .with_locale(locale, &state.messages);

    let pdf = tokio::task::spawn_blocking(move || render_calculation_pdf(&report))
        .await
        .map_err(|e| CalcError::internal(format!("PDF task failed: {}", e)))??;

    info!(calculator = id.slug(), bytes = pdf.len(), "PDF exported");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}.pdf\"", id.slug()),
            ),
        ],
        pdf,
    )
        .into_response())
}
