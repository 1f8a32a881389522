//! Renderable description of the player
//!
//! [`PlayerView`] is what a frontend draws: now-playing block, progress,
//! seek bar and the five transport buttons. It is computed from a
//! [`PlayerSnapshot`] plus the local progress, so every frontend applies the
//! same enablement rules.

use crate::types::PlayerSnapshot;
use podcastr_core::format::duration_to_time_string;
use serde::{Deserialize, Serialize};

/// Transport buttons, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransportAction {
    Shuffle,
    Previous,
    PlayPause,
    Next,
    Loop,
}

impl TransportAction {
    pub const ALL: [TransportAction; 5] = [
        TransportAction::Shuffle,
        TransportAction::Previous,
        TransportAction::PlayPause,
        TransportAction::Next,
        TransportAction::Loop,
    ];

    /// Stable identifier used in markup and from JavaScript
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportAction::Shuffle => "shuffle",
            TransportAction::Previous => "previous",
            TransportAction::PlayPause => "playPause",
            TransportAction::Next => "next",
            TransportAction::Loop => "loop",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    pub enabled: bool,
    /// Highlighted (shuffle/loop on, or currently playing)
    pub active: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportControls {
    pub shuffle: ButtonState,
    pub previous: ButtonState,
    pub play_pause: ButtonState,
    pub next: ButtonState,
    pub looping: ButtonState,
}

impl TransportControls {
    /// Apply the enablement rules to a snapshot
    ///
    /// Everything except loop is disabled when no episode is loaded. Shuffle
    /// also needs more than one episode.
    pub fn from_snapshot(snapshot: &PlayerSnapshot) -> Self {
        let loaded = snapshot.current_episode().is_some();

        Self {
            shuffle: ButtonState {
                enabled: loaded && snapshot.episodes.len() > 1,
                active: snapshot.is_shuffling,
            },
            previous: ButtonState {
                enabled: loaded && snapshot.has_previous,
                active: false,
            },
            play_pause: ButtonState {
                enabled: loaded,
                active: snapshot.is_playing,
            },
            next: ButtonState {
                enabled: loaded && snapshot.has_next,
                active: false,
            },
            looping: ButtonState {
                enabled: true,
                active: snapshot.is_looping,
            },
        }
    }

    pub fn get(&self, action: TransportAction) -> ButtonState {
        match action {
            TransportAction::Shuffle => self.shuffle,
            TransportAction::Previous => self.previous,
            TransportAction::PlayPause => self.play_pause,
            TransportAction::Next => self.next,
            TransportAction::Loop => self.looping,
        }
    }

    pub fn is_enabled(&self, action: TransportAction) -> bool {
        self.get(action).enabled
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum NowPlaying {
    /// Nothing loaded: "Selecione um podcast para ouvir"
    Idle,
    Episode {
        title: String,
        members: String,
        thumbnail: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekBar {
    pub max: u64,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub now_playing: NowPlaying,
    pub progress: u64,
    /// Elapsed time as `HH:MM:SS`
    pub elapsed: String,
    /// Episode length as `HH:MM:SS`
    pub total: String,
    /// Present only while an episode is loaded
    pub seek_bar: Option<SeekBar>,
    pub controls: TransportControls,
}

impl PlayerView {
    pub fn from_snapshot(snapshot: &PlayerSnapshot, progress: u64) -> Self {
        match snapshot.current_episode() {
            Some(episode) => Self {
                now_playing: NowPlaying::Episode {
                    title: episode.title.clone(),
                    members: episode.members.clone(),
                    thumbnail: episode.thumbnail.clone(),
                },
                progress,
                elapsed: duration_to_time_string(progress),
                total: duration_to_time_string(episode.duration),
                seek_bar: Some(SeekBar {
                    max: episode.duration,
                    value: progress,
                }),
                controls: TransportControls::from_snapshot(snapshot),
            },
            None => Self {
                now_playing: NowPlaying::Idle,
                progress: 0,
                elapsed: duration_to_time_string(0),
                total: duration_to_time_string(0),
                seek_bar: None,
                controls: TransportControls::from_snapshot(snapshot),
            },
        }
    }

    /// The player as rendered before anything is loaded
    pub fn idle() -> Self {
        Self::from_snapshot(&PlayerSnapshot::default(), 0)
    }

    pub fn is_idle(&self) -> bool {
        self.now_playing == NowPlaying::Idle
    }
}
