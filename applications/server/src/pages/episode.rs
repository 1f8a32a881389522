//! Episode detail page

use super::{text, Page};
use ammonia::Builder;
use podcastr_core::EpisodeDetail;
use std::collections::HashMap;

pub fn render_episode(detail: &EpisodeDetail) -> Page {
    let episode = &detail.episode;
    let payload = serde_json::to_string(episode).unwrap_or_else(|_| "null".to_string());

    let body = format!(
        r#"            <div class="episode">
                <div class="thumbnail-container">
                    <a href="/"><button type="button"><img src="/arrow-left.svg" alt="voltar"></button></a>
                    <img width="700" height="160" src="{thumbnail}" alt="{title}">
                    <button type="button" data-play-episode="{payload}"><img src="/play.svg" alt="Tocar episódio"></button>
                </div>
                <header>
                    <h1>{title}</h1>
                    <span>{members}</span>
                    <span>{published_at}</span>
                    <span>{duration}</span>
                </header>
                <div class="description">{description}</div>
            </div>"#,
        thumbnail = text(&episode.thumbnail),
        title = text(&episode.title),
        payload = text(&payload),
        members = text(&episode.members),
        published_at = text(episode.published_at.as_deref().unwrap_or_default()),
        duration = text(episode.duration_as_string.as_deref().unwrap_or_default()),
        description = sanitize_description(&detail.description),
    );

    Page {
        title: episode.title.clone(),
        body,
    }
}

/// Strip unsafe markup from API-provided show notes; links open in a new tab
pub fn sanitize_description(html: &str) -> String {
    let mut link_targets = HashMap::new();
    link_targets.insert("target", "_blank");

    let mut tag_attribute_values = HashMap::new();
    tag_attribute_values.insert("a", link_targets);

    let mut builder = Builder::default();
    builder.set_tag_attribute_values(tag_attribute_values);
    builder.clean(html).to_string()
}
