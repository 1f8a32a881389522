/// Web app manifest route
use crate::state::AppState;
use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Manifest {
    pub name: String,
    pub short_name: String,
    pub lang: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub icons: Vec<ManifestIcon>,
}

#[derive(Debug, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl Manifest {
    pub fn for_site(site_name: &str, theme_color: &str, lang: &str) -> Self {
        let icon = |size: u32| ManifestIcon {
            src: format!("/icons/icon-{size}x{size}.png"),
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".to_string(),
        };

        Self {
            name: site_name.to_string(),
            short_name: site_name.to_string(),
            lang: lang.to_string(),
            start_url: "/".to_string(),
            display: "standalone".to_string(),
            background_color: theme_color.to_string(),
            theme_color: theme_color.to_string(),
            icons: vec![icon(192), icon(512)],
        }
    }
}

/// GET /manifest.json - installable app manifest
pub async fn manifest(State(state): State<AppState>) -> impl IntoResponse {
    let display = &state.config.display;
    let manifest = Manifest::for_site(
        &display.site_name,
        &display.theme_color,
        display.locale.language_tag(),
    );

    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        Json(manifest),
    )
}
