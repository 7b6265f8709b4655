pub mod routes;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL, LOCATION};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::registry::SharedRegistry;

/// Assemble the application router around an explicitly constructed registry,
/// so tests can stand up the app with an isolated instance.
pub fn router(registry: SharedRegistry) -> Router {
    Router::new()
        // Root redirects to the static landing page
        .route("/", get(root_handler))
        .route("/activities", get(routes::activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_handler),
        )
        // Static files
        .nest_service(
            "/static",
            get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        // Layers
        .layer(CatchPanicLayer::new())
        // State
        .with_state(registry)
}

// Plain 302 Found; `Redirect::to` would answer 303.
async fn root_handler() -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [(LOCATION, HeaderValue::from_static("/static/index.html"))],
    )
}
