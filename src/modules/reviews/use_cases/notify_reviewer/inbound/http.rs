use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::reviews::adapters::inbound::error_mapping::unprocessable;
use crate::shared::core::primitives::SessionContext;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct NotifyBody {
    /// Sends to this address instead of the reviewer, e.g. for a test mail.
    pub override_recipient: Option<String>,
}

#[derive(Serialize)]
pub struct NotifyResponse {
    pub sent: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    session: SessionContext,
    Path(book_id): Path<String>,
    body: Result<Json<NotifyBody>, JsonRejection>,
) -> impl IntoResponse {
    let body = match body {
        Ok(Json(b)) => b,
        Err(JsonRejection::MissingJsonContentType(_)) => NotifyBody::default(),
        Err(rejection) => return unprocessable(rejection.body_text()),
    };

    match state
        .notifier
        .notify_book(&session, &book_id, body.override_recipient.as_deref())
        .await
    {
        Ok(()) => (StatusCode::OK, Json(NotifyResponse { sent: true })).into_response(),
        Err(err) => err.into_response(),
    }
}
