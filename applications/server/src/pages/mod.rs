//! Server-rendered pages
//!
//! Every page shares the same document shell with the persistent player
//! section. The browser player bundle takes over the player once loaded.

pub mod episode;
pub mod home;
pub mod layout;
pub mod player;

use axum::http::StatusCode;

pub use episode::render_episode;
pub use home::render_home;
pub use layout::{document, Page};
pub use player::render_player;

/// Escape text for use in HTML content or attribute values
pub fn text(value: &str) -> String {
    ammonia::clean_text(value)
}

/// Minimal standalone page for error responses
pub fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <title>{code} | Podcastr</title>
    <link rel="stylesheet" href="/styles/global.css">
</head>
<body>
    <main class="error-page">
        <h1>{code}</h1>
        <p>{message}</p>
        <a href="/">Voltar para o início</a>
    </main>
</body>
</html>"#,
        code = status.as_u16(),
        message = text(message),
    )
}
