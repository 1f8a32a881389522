//! Persistent player section

use super::text;
use podcastr_playback::{ButtonState, NowPlaying, PlayerView, TransportAction};

/// Render the player section for a view
///
/// The server always renders the idle view; the browser bundle re-renders it
/// from live state.
pub fn render_player(view: &PlayerView) -> String {
    let (now_playing, empty_hidden) = match &view.now_playing {
        NowPlaying::Episode {
            title,
            members,
            thumbnail,
        } => (
            format!(
                r#"<div class="current-episode" data-now-playing>
                <img src="{thumbnail}" alt="" aria-hidden="true">
                <strong>{title}</strong>
                <span>{members}</span>
            </div>"#,
                thumbnail = text(thumbnail),
                title = text(title),
                members = text(members),
            ),
            " hidden",
        ),
        NowPlaying::Idle => (
            r#"<div class="current-episode" data-now-playing hidden>
                <img src="" alt="" aria-hidden="true">
                <strong></strong>
                <span></span>
            </div>"#
                .to_string(),
            "",
        ),
    };

    let (seek_max, seek_value, seek_hidden) = match view.seek_bar {
        Some(bar) => (bar.max, bar.value, ""),
        None => (0, 0, " hidden"),
    };

    let buttons: String = TransportAction::ALL
        .iter()
        .map(|action| render_button(*action, view.controls.get(*action)))
        .collect();

    format!(
        r#"        <section class="player-container" data-player>
            <header>
                <img src="/icons/playing.svg" alt="" aria-hidden="true">
                <strong>Tocando agora</strong>
            </header>
            {now_playing}
            <div class="empty-player" data-empty-player{empty_hidden}>
                <strong>Selecione um podcast para ouvir</strong>
            </div>
            <footer class="{footer_class}">
                <div class="progress">
                    <span data-elapsed>{elapsed}</span>
                    <div class="slider">
                        <input type="range" min="0" max="{seek_max}" value="{seek_value}" data-seek{seek_hidden}>
                    </div>
                    <span data-total>{total}</span>
                </div>
                <audio preload="metadata"></audio>
                <div class="buttons">
                    {buttons}
                </div>
            </footer>
        </section>"#,
        footer_class = if view.is_idle() { "empty" } else { "" },
        elapsed = view.elapsed,
        total = view.total,
    )
}

fn render_button(action: TransportAction, state: ButtonState) -> String {
    let (icon, label) = match action {
        TransportAction::Shuffle => ("shuffle.svg", "ordem aleatória"),
        TransportAction::Previous => ("play-previous.svg", "tocar anterior"),
        TransportAction::PlayPause if state.active => ("pause.svg", "pausar episódio"),
        TransportAction::PlayPause => ("play.svg", "tocar"),
        TransportAction::Next => ("play-next.svg", "tocar próxima"),
        TransportAction::Loop => ("repeat.svg", "repetir"),
    };

    let mut classes = Vec::new();
    if action == TransportAction::PlayPause {
        classes.push("play-button");
    }
    if state.active && action != TransportAction::PlayPause {
        classes.push("is-active");
    }

    format!(
        r#"<button type="button" class="{class}" data-action="{name}"{disabled}><img src="/icons/{icon}" alt="{label}"></button>"#,
        class = classes.join(" "),
        name = action.as_str(),
        disabled = if state.enabled { "" } else { " disabled" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use podcastr_core::Episode;
    use podcastr_playback::PlayerSnapshot;

    #[test]
    fn idle_player_disables_all_but_loop() {
        let html = render_player(&PlayerView::idle());

        assert!(html.contains("Selecione um podcast para ouvir"));
        assert!(html.contains(r#"data-action="shuffle" disabled"#));
        assert!(html.contains(r#"data-action="previous" disabled"#));
        assert!(html.contains(r#"data-action="playPause" disabled"#));
        assert!(html.contains(r#"data-action="next" disabled"#));
        assert!(html.contains(r#"data-action="loop">"#));
        assert!(html.contains("data-seek hidden"));
        assert!(html.contains(r#"<footer class="empty">"#));
    }

    #[test]
    fn playing_view_shows_episode_and_pause_icon() {
        let snapshot = PlayerSnapshot {
            episodes: vec![Episode::new("a", "Faladev", "Diego", "a.jpg", "a.m4a", 3981)],
            is_playing: true,
            ..PlayerSnapshot::default()
        };
        let html = render_player(&PlayerView::from_snapshot(&snapshot, 30));

        assert!(html.contains("<strong>Faladev</strong>"));
        assert!(html.contains("pause.svg"));
        assert!(html.contains(r#"max="3981" value="30" data-seek>"#));
        assert!(html.contains(r#"data-empty-player hidden"#));
    }
}
