use axum::extract::State;
use serde::Serialize;
use serde_json::Value;

use calc_core::contact::ContactForm;
use calc_core::CalcError;

use crate::error::{success, ApiJson, ApiResult};
use crate::AppState;

#[derive(Debug, Serialize)]
struct ContactReceipt {
    id: String,
    received_at: String,
    message: String,
}

pub async fn submit(State(state): State<AppState>, ApiJson(body): ApiJson<Value>) -> ApiResult {
    let form: ContactForm = serde_json::from_value(body).map_err(CalcError::from_body)?;
    let submission = form.into_submission()?;
    state.contact.deliver(&submission)?;

    success(ContactReceipt {
        id: submission.id.to_string(),
        received_at: submission.received_at.to_rfc3339(),
        message: state.messages.text(submission.locale, "contact.success"),
    })
}
