use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::reviews::adapters::inbound::error_mapping::unprocessable;
use crate::modules::reviews::core::book::BookView;
use crate::modules::reviews::use_cases::assign_slot::command::CandidateInput;
use crate::shared::core::primitives::SessionContext;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    session: SessionContext,
    Path(book_id): Path<String>,
    body: Result<Json<CandidateInput>, JsonRejection>,
) -> impl IntoResponse {
    let Json(candidate) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };

    match state
        .assign_handler
        .attempt_assign(&session, &book_id, candidate)
        .await
    {
        Ok(record) => (StatusCode::CREATED, Json(BookView::from(record))).into_response(),
        Err(err) => err.into_response(),
    }
}
