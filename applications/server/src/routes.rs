/// Router construction
use crate::{api, state::AppState};
use axum::{routing::get, Router};
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// Pages and JSON routes first, the player bundle under `/pkg`, and the
/// public directory (icons, styles, images) for everything else.
pub fn create_router(state: AppState) -> Router {
    let assets = &state.config.assets;
    let pkg = ServeDir::new(&assets.pkg_dir);
    let public = ServeDir::new(&assets.public_dir);

    Router::new()
        .route("/", get(api::pages::home))
        .route("/episodes/:slug", get(api::pages::episode))
        .route("/manifest.json", get(api::manifest::manifest))
        .route("/health", get(api::health::health))
        .nest_service("/pkg", pkg)
        .fallback_service(public)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(state)
}
