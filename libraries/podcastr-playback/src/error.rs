//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Playlist given to `play_list` has no episodes
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// Start index outside the playlist
    #[error("Index {index} out of bounds for playlist of {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The media element refused a command
    #[error("Media error: {0}")]
    Media(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayerError>;
