//! Core types for playback management

use podcastr_core::Episode;
use serde::{Deserialize, Serialize};

/// Initial flags for a new [`PlayerState`](crate::PlayerState)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Start with looping enabled (default: false)
    pub looping: bool,

    /// Start with shuffling enabled (default: false)
    pub shuffling: bool,
}

/// Configuration for [`PlayerControls`](crate::PlayerControls)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlsConfig {
    /// Ask the media element to start as soon as a new source is loaded
    /// (default: true)
    pub autoplay: bool,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self { autoplay: true }
    }
}

/// Read-only copy of the shared player state
///
/// Carries the derived navigation flags so readers never recompute them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub episodes: Vec<Episode>,
    pub current_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PlayerSnapshot {
    /// Episode at the current index, if any
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episodes.get(self.current_index)
    }
}
