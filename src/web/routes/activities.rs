use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::registry::{SharedRegistry, SignupError};

pub async fn activities_handler(State(registry): State<SharedRegistry>) -> impl IntoResponse {
    Json(registry.list())
}

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(registry): State<SharedRegistry>,
) -> impl IntoResponse {
    match registry.sign_up(&activity_name, &query.email) {
        Ok(message) => (StatusCode::OK, Json(json!({ "message": message }))).into_response(),
        Err(e) => {
            warn!("Signup for {} rejected: {}", activity_name, e);
            let status = match e {
                SignupError::ActivityNotFound => StatusCode::NOT_FOUND,
                SignupError::AlreadySignedUp => StatusCode::BAD_REQUEST,
            };
            (status, Json(json!({ "detail": e.to_string() }))).into_response()
        }
    }
}
