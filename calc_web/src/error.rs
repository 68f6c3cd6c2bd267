//! JSON envelope and error mapping for every API route.
//!
//! Success: `{"success": true, "result": ...}`.
//! Failure: `{"success": false, "error": "...", "code": "...", "field": "..."}`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::error;

use calc_core::CalcError;

/// Generic message returned for every server-side failure
pub const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// Body was not valid JSON
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("{0} not found")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Calc(CalcError::CalculatorNotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Calc(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Calc(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Calc(e) => e.error_code(),
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            error!(code = self.code(), error = %self, "Request failed");
            INTERNAL_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        let mut body = json!({
            "success": false,
            "error": message,
            "code": self.code(),
        });
        if let AppError::Calc(e) = &self {
            if let (Some(field), Some(map)) = (e.field(), body.as_object_mut()) {
                map.insert("field".to_string(), Value::String(field.to_string()));
            }
        }

        (status, Json(body)).into_response()
    }
}

pub type ApiResult = Result<Json<Value>, AppError>;

/// Wrap a result in the success envelope.
pub fn success<T: Serialize>(result: T) -> ApiResult {
    let result = serde_json::to_value(result).map_err(CalcError::from)?;
    Ok(Json(json!({ "success": true, "result": result })))
}

/// `Json` extractor whose rejection is rendered in the error envelope.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::from(CalcError::missing_field("weight")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(CalcError::calculator_not_found("x")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(CalcError::internal("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::InvalidRequest("eof".into()).code(), "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_server_errors_hide_details() {
        let response = AppError::from(CalcError::internal("secret path")).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], INTERNAL_MESSAGE);
        assert_eq!(body["code"], "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn test_client_errors_carry_field() {
        let response = AppError::from(CalcError::out_of_range("age", 200.0, 1.0, 120.0)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["field"], "age");
    }
}
