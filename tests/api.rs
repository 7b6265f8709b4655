use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use mergington_api::registry::ActivityRegistry;
use mergington_api::web;

fn app() -> Router {
    web::router(Arc::new(ActivityRegistry::with_seed_data()))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_redirects_to_landing_page() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/static/index.html"
    );
}

#[tokio::test]
async fn list_activities_returns_seeded_registry() {
    let response = app()
        .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let activities = body.as_object().unwrap();
    assert_eq!(activities.len(), 15);

    let chess = &body["Chess Club"];
    assert_eq!(
        chess["description"],
        "Learn strategies and compete in chess tournaments"
    );
    assert_eq!(chess["max_participants"], 12);
    assert_eq!(
        chess["participants"],
        serde_json::json!(["michael@mergington.edu", "daniel@mergington.edu"])
    );
}

#[tokio::test]
async fn signup_succeeds_and_shows_up_in_listing() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::post("/activities/Chess%20Club/signup?email=newstudent@mergington.edu")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "Signed up newstudent@mergington.edu for Chess Club"
    );

    let response = app
        .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(
        body["Chess Club"]["participants"],
        serde_json::json!([
            "michael@mergington.edu",
            "daniel@mergington.edu",
            "newstudent@mergington.edu"
        ])
    );
}

#[tokio::test]
async fn signup_for_unknown_activity_is_404() {
    let response = app()
        .oneshot(
            Request::post("/activities/Nonexistent%20Club/signup?email=x@mergington.edu")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "Activity not found");
}

#[tokio::test]
async fn duplicate_signup_is_400() {
    let response = app()
        .oneshot(
            Request::post("/activities/Chess%20Club/signup?email=michael@mergington.edu")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "Student is already signed up");
}

#[tokio::test]
async fn signup_without_email_is_rejected() {
    let response = app()
        .oneshot(
            Request::post("/activities/Chess%20Club/signup")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Missing required query parameter fails extraction before the registry
    // is touched.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
