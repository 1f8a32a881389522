//! End-to-end player scenarios
//!
//! Drives the context and the control surface together against a recording
//! media element, the way a frontend does.

use podcastr_core::Episode;
use podcastr_playback::{
    ControlsConfig, MediaElement, MediaEvent, NowPlaying, PlayerConfig, PlayerContext,
    PlayerControls, PlayerEvent, PlayerState, PlayerView, Result, TransportAction,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

/// Media element that records every command it receives
#[derive(Debug, Default)]
struct RecordingMedia {
    commands: Vec<String>,
    source: Option<String>,
    position: f64,
    looping: bool,
}

impl MediaElement for RecordingMedia {
    fn set_source(&mut self, url: &str) {
        self.commands.push(format!("source {}", url));
        self.source = Some(url.to_string());
        self.position = 0.0;
    }

    fn clear_source(&mut self) {
        self.commands.push("clear".to_string());
        self.source = None;
    }

    fn play(&mut self) -> Result<()> {
        self.commands.push("play".to_string());
        Ok(())
    }

    fn pause(&mut self) {
        self.commands.push("pause".to_string());
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.position = seconds;
    }

    fn is_looping(&self) -> bool {
        self.looping
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn set_autoplay(&mut self, _autoplay: bool) {}
}

fn episode(id: &str, duration: u64) -> Episode {
    Episode::new(
        id,
        format!("Episode {}", id),
        "Diego e Richard",
        format!("https://cdn.example.com/{}.jpg", id),
        format!("https://cdn.example.com/{}.m4a", id),
        duration,
    )
}

fn context(seed: u64) -> PlayerContext {
    PlayerContext::from_state(PlayerState::with_rng(
        PlayerConfig::default(),
        StdRng::seed_from_u64(seed),
    ))
}

fn controls(seed: u64) -> PlayerControls<RecordingMedia> {
    PlayerControls::new(context(seed), RecordingMedia::default(), ControlsConfig::default())
}

#[test]
fn end_of_track_advances_to_next_episode() {
    let mut controls = controls(1);
    controls
        .context()
        .play_list(vec![episode("a", 100), episode("b", 200)], 0)
        .unwrap();

    let snapshot = controls.context().snapshot();
    assert!(snapshot.is_playing);
    assert_eq!(snapshot.current_index, 0);
    assert!(snapshot.has_next);

    controls.handle_media_event(MediaEvent::Ended);

    assert_eq!(controls.context().snapshot().current_index, 1);
    assert_eq!(
        controls.media().source.as_deref(),
        Some("https://cdn.example.com/b.m4a")
    );
}

#[test]
fn browser_end_of_track_order_starts_next_episode() {
    let mut controls = controls(8);
    controls
        .context()
        .play_list(vec![episode("a", 100), episode("b", 200)], 0)
        .unwrap();
    controls.handle_media_event(MediaEvent::LoadedMetadata { duration: 100.0 });
    controls.handle_media_event(MediaEvent::TimeUpdate { position: 99.6 });
    assert_eq!(controls.progress(), 99);

    // A browser pauses the element before reporting the end
    controls.handle_media_event(MediaEvent::Pause);
    assert!(!controls.context().snapshot().is_playing);

    controls.handle_media_event(MediaEvent::Ended);
    assert_eq!(controls.context().snapshot().current_index, 1);
    assert_eq!(
        controls.media().source.as_deref(),
        Some("https://cdn.example.com/b.m4a")
    );
    assert_eq!(controls.progress(), 0);

    // Autoplay starts the new source and the element reports it
    controls.handle_media_event(MediaEvent::LoadedMetadata { duration: 200.0 });
    controls.handle_media_event(MediaEvent::Play);

    let view = controls.view();
    assert!(controls.context().snapshot().is_playing);
    assert_eq!(controls.progress(), 0);
    assert_eq!(view.elapsed, "00:00:00");
    assert!(view.controls.play_pause.active);
    assert_eq!(
        controls.media().commands,
        vec![
            "source https://cdn.example.com/a.m4a".to_string(),
            "source https://cdn.example.com/b.m4a".to_string(),
        ]
    );
}

#[test]
fn other_views_drive_the_same_media() {
    let context = context(10);
    let header = context.clone();
    let controls = PlayerControls::new(
        context,
        RecordingMedia::default(),
        ControlsConfig { autoplay: false },
    );

    header
        .play_list(vec![episode("a", 100), episode("b", 200)], 0)
        .unwrap();
    header.play_next();
    header.toggle_play();

    assert_eq!(
        controls.media().commands,
        vec![
            "source https://cdn.example.com/a.m4a".to_string(),
            "play".to_string(),
            "source https://cdn.example.com/b.m4a".to_string(),
            "play".to_string(),
            "pause".to_string(),
        ]
    );
}

#[test]
fn end_of_single_track_clears_player() {
    let mut controls = controls(2);
    controls.context().play_list(vec![episode("a", 100)], 0).unwrap();

    controls.handle_media_event(MediaEvent::Ended);

    let snapshot = controls.context().snapshot();
    assert!(snapshot.episodes.is_empty());
    assert_eq!(snapshot.current_index, 0);
    assert_eq!(controls.media().commands.last().map(String::as_str), Some("clear"));
    assert_eq!(controls.view().now_playing, NowPlaying::Idle);
}

#[test]
fn looping_does_not_change_end_of_track_handling() {
    let mut controls = controls(3);
    controls.press(TransportAction::Loop);
    controls.context().play(episode("a", 100));

    // The element restarts on its own while looping; an ended event means it did not
    controls.handle_media_event(MediaEvent::Ended);

    assert!(controls.context().snapshot().episodes.is_empty());
    assert!(controls.context().snapshot().is_looping);
}

#[test]
fn seek_updates_progress_immediately() {
    let mut controls = controls(4);
    controls.context().play(episode("a", 100));
    controls.handle_media_event(MediaEvent::LoadedMetadata { duration: 100.0 });

    controls.seek(45);

    assert_eq!(controls.progress(), 45);
    assert_eq!(controls.view().elapsed, "00:00:45");
    assert_eq!(controls.media().current_time(), 45.0);
}

/// Run an action on controls shared the way a browser binding holds them
fn act(
    shared: &RefCell<PlayerControls<RecordingMedia>>,
    action: impl FnOnce(&mut PlayerControls<RecordingMedia>),
) -> PlayerView {
    let mut controls = shared.borrow_mut();
    action(&mut *controls);
    controls.view()
}

#[test]
fn shared_controls_seek_and_press() {
    let shared = Rc::new(RefCell::new(controls(11)));
    shared.borrow().context().play(episode("a", 100));

    let view = act(&shared, |controls| controls.seek(30));
    assert_eq!(view.elapsed, "00:00:30");

    let view = act(&shared, |controls| {
        controls.press(TransportAction::PlayPause);
    });
    assert!(!view.controls.play_pause.active);
    assert_eq!(shared.borrow().media().position, 30.0);
    assert_eq!(shared.borrow().media().commands.last().map(String::as_str), Some("pause"));
}

#[test]
fn shuffled_next_is_roughly_uniform() {
    let context = context(2021);
    context.toggle_shuffling();
    context
        .play_list((0..5).map(|i| episode(&i.to_string(), 60)).collect(), 0)
        .unwrap();

    let mut counts = [0usize; 5];
    for _ in 0..1000 {
        context.play_next();
        counts[context.snapshot().current_index] += 1;
    }

    // Expected 200 each; allow a generous margin
    for (index, count) in counts.iter().enumerate() {
        assert!(
            (120..=280).contains(count),
            "index {} drawn {} times: {:?}",
            index,
            count,
            counts
        );
    }
}

#[test]
fn shuffle_can_reselect_current_episode() {
    let context = context(9);
    context.toggle_shuffling();
    context
        .play_list(vec![episode("a", 10), episode("b", 10)], 0)
        .unwrap();

    let mut repeated = false;
    for _ in 0..100 {
        let before = context.snapshot().current_index;
        context.play_next();
        if context.snapshot().current_index == before {
            repeated = true;
            break;
        }
    }

    assert!(repeated, "shuffle never reselected the current episode");
}

#[test]
fn home_page_flow_drives_media() {
    let mut controls = controls(5);
    let playlist = vec![episode("a", 100), episode("b", 200), episode("c", 300)];

    // "all" table row 0 sits after two featured episodes
    controls.context().play_list(playlist, 2).unwrap();
    assert!(controls.press(TransportAction::Previous));
    assert!(controls.press(TransportAction::PlayPause));
    assert!(controls.press(TransportAction::PlayPause));

    assert_eq!(
        controls.media().commands,
        vec![
            "source https://cdn.example.com/c.m4a".to_string(),
            "source https://cdn.example.com/b.m4a".to_string(),
            "pause".to_string(),
            "play".to_string(),
        ]
    );
}

#[test]
fn native_pause_flows_into_every_view() {
    let mut controls = controls(6);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    controls
        .context()
        .subscribe(move |event| sink.borrow_mut().push(event.clone()));

    controls.context().play(episode("a", 100));
    controls.handle_media_event(MediaEvent::Pause);

    assert_eq!(
        seen.borrow().last(),
        Some(&PlayerEvent::PlayingChanged { is_playing: false })
    );
    // The media paused itself, so nothing is sent back to it
    assert!(!controls.media().commands.contains(&"pause".to_string()));
    assert!(!controls.view().controls.play_pause.active);
}

#[test]
fn view_tracks_time_updates() {
    let mut controls = controls(7);
    controls.context().play(episode("a", 3981));

    controls.handle_media_event(MediaEvent::LoadedMetadata { duration: 3981.0 });
    controls.handle_media_event(MediaEvent::TimeUpdate { position: 3600.4 });

    let view = controls.view();
    assert_eq!(view.elapsed, "01:00:00");
    assert_eq!(view.total, "01:06:21");
    assert_eq!(view.seek_bar.map(|bar| bar.value), Some(3600));
}
