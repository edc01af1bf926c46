use axum::{
    extract::{Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::reviews::adapters::inbound::error_mapping::unprocessable;
use crate::modules::reviews::use_cases::export_books::handler::parse_delimiter;
use crate::shared::core::primitives::SessionContext;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ExportParams {
    pub delimiter: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    session: SessionContext,
    Query(params): Query<ExportParams>,
) -> impl IntoResponse {
    let Some(delimiter) = parse_delimiter(params.delimiter.as_deref()) else {
        return unprocessable("delimiter must be a single ASCII character");
    };

    match state.exporter.export_csv(&session, delimiter).await {
        Ok(csv) => (
            [
                (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    CONTENT_DISPOSITION,
                    format!("attachment; filename=\"libri_{}.csv\"", session.year),
                ),
            ],
            csv,
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}
