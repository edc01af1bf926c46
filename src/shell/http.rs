use axum::{
    Extension, Router,
    routing::{get, patch, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::reviews::use_cases::assign_slot::inbound::http as assign_http;
use crate::modules::reviews::use_cases::export_books::inbound::http as export_http;
use crate::modules::reviews::use_cases::manage_books::inbound::http as books_http;
use crate::modules::reviews::use_cases::notify_reviewer::inbound::http as notify_http;
use crate::modules::reviews::use_cases::preferences::inbound::http as preferences_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/books", get(books_http::list).post(books_http::create))
        .route(
            "/books/{id}",
            patch(books_http::update).delete(books_http::remove),
        )
        .route("/books/{id}/assign", post(assign_http::handle))
        .route("/books/{id}/release", post(books_http::release))
        .route("/books/{id}/cover", put(books_http::upload_cover))
        .route("/books/{id}/notify", post(notify_http::handle))
        .route("/export.csv", get(export_http::handle))
        .route(
            "/settings/email",
            get(preferences_http::get_email_config).put(preferences_http::put_email_config),
        )
        .route(
            "/settings/background",
            get(preferences_http::get_background).put(preferences_http::put_background),
        )
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
