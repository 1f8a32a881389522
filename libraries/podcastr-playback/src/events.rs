//! Player Events
//!
//! Event-based communication for views that read the shared player state.
//! Events are recorded by every action that actually changes something:
//! - Playlist replaced or cleared
//! - Current episode moved
//! - Playing / looping / shuffling flags flipped

use serde::{Deserialize, Serialize};

/// Events emitted by [`PlayerState`](crate::PlayerState) actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlayerEvent {
    /// A new playlist replaced the previous one
    PlaylistChanged {
        /// Number of episodes in the new playlist
        length: usize,
    },

    /// The current index moved (or was set by a new playlist)
    EpisodeChanged {
        /// New current index
        index: usize,
        /// ID of the episode now current
        episode_id: String,
    },

    /// `is_playing` changed
    PlayingChanged {
        is_playing: bool,
    },

    /// `is_looping` changed
    LoopingChanged {
        is_looping: bool,
    },

    /// `is_shuffling` changed
    ShufflingChanged {
        is_shuffling: bool,
    },

    /// The playlist was emptied; flags are untouched
    Cleared,
}
