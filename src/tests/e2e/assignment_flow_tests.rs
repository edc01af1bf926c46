use crate::modules::reviews::core::book::BookView;
use crate::modules::reviews::errors::ApplicationError;
use crate::modules::reviews::use_cases::assign_slot::decision::DecideError;
use crate::shared::core::primitives::SessionContext;
use crate::shell::http::router;
use crate::tests::fixtures::candidates::CandidateInputBuilder;
use crate::tests::fixtures::state::{TEST_PASSWORD, TEST_YEAR, make_test_state, seed_titles};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

#[tokio::test]
async fn month_and_reviewer_stay_unique_across_books() {
    let state = make_test_state();
    let ids = seed_titles(&state, &["Il Gattopardo", "La Storia"]).await;
    let reviewer = SessionContext::reviewer(TEST_YEAR);

    let claimed = state
        .assign_handler
        .attempt_assign(
            &reviewer,
            &ids[0],
            CandidateInputBuilder::new().month("Marzo").email("a@x.com").build(),
        )
        .await
        .unwrap();
    assert!(claimed.is_assigned());

    let same_month = state
        .assign_handler
        .attempt_assign(
            &reviewer,
            &ids[1],
            CandidateInputBuilder::new().month("Marzo").email("b@x.com").build(),
        )
        .await;
    assert_eq!(same_month, Err(ApplicationError::Rejected(DecideError::MonthTaken)));

    let same_reviewer = state
        .assign_handler
        .attempt_assign(
            &reviewer,
            &ids[1],
            CandidateInputBuilder::new().month("Aprile").email("A@X.com").build(),
        )
        .await;
    assert_eq!(
        same_reviewer,
        Err(ApplicationError::Rejected(DecideError::DuplicateReviewer))
    );
}

#[tokio::test]
async fn releasing_a_slot_frees_the_month_for_another_reviewer() {
    let state = make_test_state();
    let ids = seed_titles(&state, &["Il Gattopardo", "La Storia"]).await;
    let reviewer = SessionContext::reviewer(TEST_YEAR);
    let admin = SessionContext::admin(TEST_YEAR);

    state
        .assign_handler
        .attempt_assign(&reviewer, &ids[0], CandidateInputBuilder::new().month("Marzo").email("a@x.com").build())
        .await
        .unwrap();

    let released = state.ledger.release_assignment(&admin, &ids[0]).await.unwrap();
    assert!(released.assignment.is_none());
    let view = BookView::from(released);
    assert_eq!(view.reviewer_email, "");
    assert_eq!(view.assigned_month, "");
    assert_eq!(view.publication_date, "");

    let claimed = state
        .assign_handler
        .attempt_assign(&reviewer, &ids[1], CandidateInputBuilder::new().month("Marzo").email("b@x.com").build())
        .await
        .unwrap();
    assert!(claimed.is_assigned());
}

#[tokio::test]
async fn reviewers_never_see_assigned_books() {
    let state = make_test_state();
    let ids = seed_titles(&state, &["A", "B", "C"]).await;
    let reviewer = SessionContext::reviewer(TEST_YEAR);
    let admin = SessionContext::admin(TEST_YEAR);

    state
        .assign_handler
        .attempt_assign(&reviewer, &ids[1], CandidateInputBuilder::new().build())
        .await
        .unwrap();

    let for_reviewer = state.ledger.list_visible(&reviewer).await.unwrap();
    assert_eq!(for_reviewer.len(), 2);
    assert!(for_reviewer.iter().all(|r| r.assignment.is_none()));

    let for_admin = state.ledger.list_visible(&admin).await.unwrap();
    assert_eq!(for_admin.len(), 3);
    assert_eq!(for_admin[0].id, ids[1]);
}

#[tokio::test]
async fn a_reviewer_flow_runs_through_the_router() {
    let app = router(make_test_state());

    let create = Request::post("/books")
        .header("x-admin-password", TEST_PASSWORD)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let created: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let assign = Request::post(format!("/books/{id}/assign"))
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"month":"Maggio","given_name":"Giulia","family_name":"Bianchi","email":"giulia@example.com"}"#,
        ))
        .unwrap();
    let response = app.clone().oneshot(assign).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let listed = app
        .clone()
        .oneshot(Request::get("/books").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = listed.into_body().collect().await.unwrap().to_bytes();
    let books: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(books.as_array().map(Vec::len), Some(0));

    let export = Request::get("/export.csv")
        .header("x-admin-password", TEST_PASSWORD)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(export).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(csv.contains("Giulia,Bianchi,giulia@example.com"));
    assert!(csv.contains("Maggio"));
}
