use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    response::Redirect,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::Config;
use crate::handlers;

const INDEX_PAGE: &str = "/static/index.html";

fn cors(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST])
}

fn activity_routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .route("/activities", get(handlers::activities::list))
        .route(
            "/activities/{name}/signup",
            post(handlers::activities::signup),
        )
        .route(
            "/activities/{name}/unregister",
            post(handlers::activities::unregister),
        )
}

/// Setup the routes for the server, the static frontend, CORS and request tracing
pub fn setup_routes(state: Arc<crate::AppState>, config: &Config) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PAGE) }))
        .route("/health", get(handlers::health::get))
        .merge(activity_routes())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors(config)),
        )
        .with_state(state)
}
