use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};

use crate::modules::reviews::adapters::inbound::error_mapping::unprocessable;
use crate::modules::reviews::core::book::BookView;
use crate::modules::reviews::use_cases::manage_books::command::BookChanges;
use crate::shared::core::primitives::SessionContext;
use crate::shell::state::AppState;

pub const FILE_NAME_HEADER: &str = "x-file-name";

pub async fn list(State(state): State<AppState>, session: SessionContext) -> impl IntoResponse {
    match state.ledger.list_visible(&session).await {
        Ok(records) => {
            let views: Vec<BookView> = records.into_iter().map(BookView::from).collect();
            Json(views).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn create(State(state): State<AppState>, session: SessionContext) -> impl IntoResponse {
    match state.ledger.create(&session).await {
        Ok(record) => (StatusCode::CREATED, Json(BookView::from(record))).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<String>,
    body: Result<Json<BookChanges>, JsonRejection>,
) -> impl IntoResponse {
    let Json(changes) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };
    match state.ledger.update(&session, &id, changes).await {
        Ok(record) => Json(BookView::from(record)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn remove(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.ledger.remove(&session, &id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn release(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.ledger.release_assignment(&session, &id).await {
        Ok(record) => Json(BookView::from(record)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn upload_cover(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<String>,
    headers: HeaderMap,
    bytes: Bytes,
) -> impl IntoResponse {
    if bytes.is_empty() {
        return unprocessable("cover image body is empty");
    }
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    let content_type = match header(CONTENT_TYPE.as_str()) {
        ct if ct.is_empty() => "application/octet-stream".to_string(),
        ct => ct,
    };
    let file_name = header(FILE_NAME_HEADER);

    match state
        .ledger
        .upload_cover(&session, &id, &file_name, &content_type, bytes.to_vec())
        .await
    {
        Ok(record) => Json(BookView::from(record)).into_response(),
        Err(err) => err.into_response(),
    }
}
