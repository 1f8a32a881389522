//! Document shell shared by every page

use super::{player::render_player, text};
use crate::config::DisplaySettings;
use podcastr_playback::PlayerView;

/// Page title and main content
#[derive(Debug, Clone)]
pub struct Page {
    /// Title prefix, rendered as "{title} | {site name}"
    pub title: String,
    pub body: String,
}

/// Wrap a page in the document shell
pub fn document(page: &Page, display: &DisplaySettings) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="minimum-scale=1, initial-scale=1, width=device-width, shrink-to-fit=no, user-scalable=no, viewport-fit=cover">
    <meta name="theme-color" content="{theme_color}">
    <title>{title} | {site_name}</title>
    <link rel="manifest" href="/manifest.json">
    <link rel="preconnect" href="https://fonts.gstatic.com">
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500&family=Lexend:wght@500;600&display=swap" rel="stylesheet">
    <link rel="shortcut icon" href="/icons/favicon.png" type="image/png">
    <link rel="stylesheet" href="/styles/global.css">
</head>
<body>
    <div class="wrapper">
        <main>
            <header class="header">
                <a href="/"><img src="/logo.svg" alt="{site_name}"></a>
                <p>O melhor para você ouvir, sempre</p>
            </header>
{body}
        </main>
{player}
    </div>
    <script type="module">{script}</script>
</body>
</html>"#,
        lang = display.locale.language_tag(),
        theme_color = text(&display.theme_color),
        title = text(&page.title),
        site_name = text(&display.site_name),
        body = page.body,
        player = render_player(&PlayerView::idle()),
        script = PLAYER_SCRIPT,
    )
}

/// Boots the browser player and wires the page's play buttons to it
const PLAYER_SCRIPT: &str = r#"
import init, { WasmPlayer } from '/pkg/podcastr_playback.js';

await init();

const root = document.querySelector('[data-player]');
const audio = root.querySelector('audio');
const player = new WasmPlayer(audio);
const controlKeys = { shuffle: 'shuffle', previous: 'previous', playPause: 'playPause', next: 'next', loop: 'looping' };

function render(view) {
    const loaded = view.nowPlaying.state === 'episode';
    root.querySelector('[data-now-playing]').hidden = !loaded;
    root.querySelector('[data-empty-player]').hidden = loaded;
    if (loaded) {
        root.querySelector('[data-now-playing] img').src = view.nowPlaying.thumbnail;
        root.querySelector('[data-now-playing] strong').textContent = view.nowPlaying.title;
        root.querySelector('[data-now-playing] span').textContent = view.nowPlaying.members;
    }
    root.querySelector('[data-elapsed]').textContent = view.elapsed;
    root.querySelector('[data-total]').textContent = view.total;

    const slider = root.querySelector('[data-seek]');
    slider.hidden = !view.seekBar;
    if (view.seekBar) {
        slider.max = view.seekBar.max;
        slider.value = view.seekBar.value;
    }

    for (const button of root.querySelectorAll('[data-action]')) {
        const state = view.controls[controlKeys[button.dataset.action]];
        button.disabled = !state.enabled;
        button.classList.toggle('is-active', state.active);
    }
    root.querySelector('footer').classList.toggle('empty', !loaded);
}

player.onChange(render);
render(player.view());

document.addEventListener('click', (event) => {
    const listButton = event.target.closest('[data-play-index]');
    if (listButton) {
        const playlist = JSON.parse(listButton.closest('[data-playlist]').dataset.playlist);
        player.playList(playlist, Number(listButton.dataset.playIndex));
        return;
    }
    const episodeButton = event.target.closest('[data-play-episode]');
    if (episodeButton) {
        player.play(JSON.parse(episodeButton.dataset.playEpisode));
        return;
    }
    const control = event.target.closest('[data-action]');
    if (control && root.contains(control)) {
        player.press(control.dataset.action);
    }
});

root.querySelector('[data-seek]').addEventListener('input', (event) => {
    player.seek(Number(event.target.value));
});
"#;
