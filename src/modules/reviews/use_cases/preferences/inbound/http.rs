use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::reviews::adapters::inbound::error_mapping::unprocessable;
use crate::modules::reviews::core::email_config::EmailTemplateConfig;
use crate::shared::core::primitives::SessionContext;
use crate::shell::state::AppState;

#[derive(Serialize, Deserialize, Default)]
pub struct BackgroundBody {
    #[serde(default)]
    pub url: Option<String>,
}

pub async fn get_email_config(State(state): State<AppState>) -> impl IntoResponse {
    match state.preferences.email_config().await {
        Ok(config) => Json(config).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn put_email_config(
    State(state): State<AppState>,
    session: SessionContext,
    body: Result<Json<EmailTemplateConfig>, JsonRejection>,
) -> impl IntoResponse {
    let Json(config) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };
    match state.preferences.save_email_config(&session, config).await {
        Ok(saved) => Json(saved).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_background(State(state): State<AppState>) -> impl IntoResponse {
    match state.preferences.background_image().await {
        Ok(url) => Json(BackgroundBody { url }).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn put_background(
    State(state): State<AppState>,
    session: SessionContext,
    body: Result<Json<BackgroundBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };
    let url = body.url.unwrap_or_default();
    match state.preferences.set_background_image(&session, &url).await {
        Ok(()) => match state.preferences.background_image().await {
            Ok(url) => Json(BackgroundBody { url }).into_response(),
            Err(err) => err.into_response(),
        },
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod preferences_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::{TEST_PASSWORD, make_test_state};

    use super::{get_background, get_email_config, put_background, put_email_config};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/settings/email", get(get_email_config).put(put_email_config))
            .route("/settings/background", get(get_background).put(put_background))
            .with_state(state)
    }

    async fn json_of(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn it_should_serve_defaults_and_accept_partial_updates() {
        let router = app(make_test_state());

        let (status, json) = json_of(
            router.clone(),
            Request::get("/settings/email").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["body_template"].as_str().unwrap().contains("{{Nome}}"));

        let update = Request::put("/settings/email")
            .header("x-admin-password", TEST_PASSWORD)
            .header("content-type", "application/json")
            .body(Body::from(r#"{"fixed_recipients":["redazione@example.com"]}"#))
            .unwrap();
        let (status, json) = json_of(router.clone(), update).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["fixed_recipients"][0], "redazione@example.com");
        assert!(json["subject_template"].as_str().unwrap().contains("{{Titolo}}"));
    }

    #[tokio::test]
    async fn it_should_refuse_reviewer_updates() {
        let update = Request::put("/settings/background")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"url":"https://img.example.com/bg.jpg"}"#))
            .unwrap();
        let (status, json) = json_of(app(make_test_state()), update).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["error"], "Forbidden");
    }

    #[tokio::test]
    async fn it_should_set_and_read_the_background() {
        let router = app(make_test_state());
        let update = Request::put("/settings/background")
            .header("x-admin-password", TEST_PASSWORD)
            .header("content-type", "application/json")
            .body(Body::from(r#"{"url":"https://img.example.com/bg.jpg"}"#))
            .unwrap();
        let (status, _) = json_of(router.clone(), update).await;
        assert_eq!(status, StatusCode::OK);

        let (_, json) = json_of(
            router,
            Request::get("/settings/background").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(json["url"], "https://img.example.com/bg.jpg");
    }
}
