/// Page routes
use crate::{error::Result, pages, state::AppState};
use axum::{
    extract::{Path, State},
    response::Html,
};

/// GET / - Home page
pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let listing = state.catalog.home().await?;
    let page = pages::render_home(&listing);

    Ok(Html(pages::document(&page, &state.config.display)))
}

/// GET /episodes/:slug - Episode page
pub async fn episode(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>> {
    let detail = state.catalog.episode(&slug).await?;
    let page = pages::render_episode(&detail);

    Ok(Html(pages::document(&page, &state.config.display)))
}
