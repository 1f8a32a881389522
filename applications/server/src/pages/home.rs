//! Home page: latest releases and the full episode table

use super::{text, Page};
use podcastr_core::{Episode, HomeListing};

pub fn render_home(listing: &HomeListing) -> Page {
    // Both sections queue the same playlist
    let playlist = serde_json::to_string(&listing.playlist()).unwrap_or_else(|_| "[]".to_string());

    let cards: String = listing
        .latest
        .iter()
        .enumerate()
        .map(|(index, episode)| latest_card(episode, index))
        .collect();

    let rows: String = listing
        .all
        .iter()
        .enumerate()
        .map(|(row, episode)| table_row(episode, listing.playlist_index_of_all(row)))
        .collect();

    let body = format!(
        r#"            <div class="homepage" data-playlist="{playlist}">
                <section class="latest-episodes">
                    <h2>Últimos lançamentos</h2>
                    <ul>
{cards}                    </ul>
                </section>
                <section class="all-episodes">
                    <h2>Todos os episódios</h2>
                    <table cellspacing="0">
                        <thead>
                            <tr>
                                <th></th>
                                <th>Podcast</th>
                                <th>Integrantes</th>
                                <th>Data</th>
                                <th>Duração</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
{rows}                        </tbody>
                    </table>
                </section>
            </div>"#,
        playlist = text(&playlist),
    );

    Page {
        title: "Home".to_string(),
        body,
    }
}

fn latest_card(episode: &Episode, index: usize) -> String {
    format!(
        r#"                        <li>
                            <img width="192" height="192" src="{thumbnail}" alt="{title}">
                            <div class="episode-details">
                                <a href="{href}">{title}</a>
                                <p>{members}</p>
                                <span>{published_at}</span>
                                <span>{duration}</span>
                            </div>
                            <button type="button" data-play-index="{index}"><img src="/play-green.svg" alt="Tocar episódio"></button>
                        </li>
"#,
        thumbnail = text(&episode.thumbnail),
        title = text(&episode.title),
        href = episode_href(&episode.id),
        members = text(&episode.members),
        published_at = text(episode.published_at.as_deref().unwrap_or_default()),
        duration = text(episode.duration_as_string.as_deref().unwrap_or_default()),
    )
}

fn table_row(episode: &Episode, index: usize) -> String {
    format!(
        r#"                            <tr>
                                <td style="width: 72px"><img width="120" height="120" src="{thumbnail}" alt="{title}"></td>
                                <td><a href="{href}">{title}</a></td>
                                <td>{members}</td>
                                <td style="width: 100px">{published_at}</td>
                                <td>{duration}</td>
                                <td><button type="button" data-play-index="{index}"><img src="/play-green.svg" alt="Tocar episódio"></button></td>
                            </tr>
"#,
        thumbnail = text(&episode.thumbnail),
        title = text(&episode.title),
        href = episode_href(&episode.id),
        members = text(&episode.members),
        published_at = text(episode.published_at.as_deref().unwrap_or_default()),
        duration = text(episode.duration_as_string.as_deref().unwrap_or_default()),
    )
}

/// Link to an episode page; the id becomes a single path segment
pub fn episode_href(id: &str) -> String {
    format!("/episodes/{}", urlencoding::encode(id))
}
