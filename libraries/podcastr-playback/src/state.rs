//! Player state - the single owner of playlist and transport flags
//!
//! All mutation goes through the action methods below. Each action records
//! [`PlayerEvent`]s for whatever it actually changed; callers drain them with
//! [`PlayerState::drain_events`].

use crate::{
    error::{PlayerError, Result},
    events::PlayerEvent,
    shuffle::random_index,
    types::{PlayerConfig, PlayerSnapshot},
};
use podcastr_core::Episode;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Shared playback state
///
/// Holds the active playlist, the current index and the playing / looping /
/// shuffling flags. `has_next` and `has_previous` are derived on every read.
///
/// Invariant: `current_index < episodes.len()` whenever the playlist is
/// non-empty; `current_index == 0` when it is empty.
#[derive(Debug)]
pub struct PlayerState {
    episodes: Vec<Episode>,
    current_index: usize,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,

    rng: StdRng,

    // Event queue for view synchronization
    pending_events: Vec<PlayerEvent>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl PlayerState {
    /// Create an empty player state
    pub fn new(config: PlayerConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an empty player state with a specific random source
    pub fn with_rng(config: PlayerConfig, rng: StdRng) -> Self {
        Self {
            episodes: Vec::new(),
            current_index: 0,
            is_playing: false,
            is_looping: config.looping,
            is_shuffling: config.shuffling,
            rng,
            pending_events: Vec::new(),
        }
    }

    // ===== Actions =====

    /// Play a single episode
    ///
    /// Replaces the playlist with `[episode]`, discarding any previous
    /// playlist context.
    pub fn play(&mut self, episode: Episode) {
        self.load_playlist(vec![episode], 0);
    }

    /// Play `list`, starting at `index`
    ///
    /// An empty list or an index past the end is rejected and leaves the
    /// state untouched.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) -> Result<()> {
        if list.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }
        if index >= list.len() {
            return Err(PlayerError::IndexOutOfBounds {
                index,
                len: list.len(),
            });
        }

        self.load_playlist(list, index);
        Ok(())
    }

    /// Flip `is_playing`
    pub fn toggle_play(&mut self) {
        self.set_playing(!self.is_playing);
    }

    /// Set `is_playing` directly
    ///
    /// Used to reconcile with the media element when playback was started or
    /// paused from outside the player (OS media keys, native controls).
    pub fn set_playing_state(&mut self, state: bool) {
        self.set_playing(state);
    }

    /// Move to the next episode
    ///
    /// Shuffling: jump to a uniformly random index (possibly the current one).
    /// Otherwise advance by one if there is a next episode; at the end of the
    /// playlist this is a no-op.
    pub fn play_next(&mut self) {
        if self.is_shuffling {
            self.jump_to_random();
        } else if self.has_next() {
            self.move_to(self.current_index + 1);
        }
    }

    /// Move to the previous episode
    ///
    /// Mirror of [`play_next`](Self::play_next).
    pub fn play_previous(&mut self) {
        if self.is_shuffling {
            self.jump_to_random();
        } else if self.has_previous() {
            self.move_to(self.current_index - 1);
        }
    }

    /// Flip `is_looping`
    pub fn toggle_looping(&mut self) {
        self.is_looping = !self.is_looping;
        self.pending_events.push(PlayerEvent::LoopingChanged {
            is_looping: self.is_looping,
        });
    }

    /// Flip `is_shuffling`
    pub fn toggle_shuffling(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        self.pending_events.push(PlayerEvent::ShufflingChanged {
            is_shuffling: self.is_shuffling,
        });
    }

    /// Empty the playlist and reset the index; flags are kept
    pub fn clear_player_state(&mut self) {
        self.episodes.clear();
        self.current_index = 0;
        debug!("Player state cleared");
        self.pending_events.push(PlayerEvent::Cleared);
    }

    // ===== State Queries =====

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Episode at the current index, `None` when nothing is loaded
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episodes.get(self.current_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// True while shuffling, or when an episode follows the current one
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_index + 1 < self.episodes.len()
    }

    /// True while shuffling, or when an episode precedes the current one
    pub fn has_previous(&self) -> bool {
        self.is_shuffling || self.current_index > 0
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Copy of the state including derived flags
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            episodes: self.episodes.clone(),
            current_index: self.current_index,
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }

    // ===== Events =====

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    fn load_playlist(&mut self, list: Vec<Episode>, index: usize) {
        self.episodes = list;
        self.current_index = index;

        debug!(
            length = self.episodes.len(),
            index, "Playlist loaded"
        );

        self.pending_events.push(PlayerEvent::PlaylistChanged {
            length: self.episodes.len(),
        });
        self.emit_episode_changed();
        self.set_playing(true);
    }

    fn jump_to_random(&mut self) {
        if let Some(index) = random_index(self.episodes.len(), &mut self.rng) {
            self.move_to(index);
        }
    }

    fn move_to(&mut self, index: usize) {
        self.current_index = index;
        self.emit_episode_changed();
    }

    fn set_playing(&mut self, is_playing: bool) {
        if self.is_playing != is_playing {
            self.is_playing = is_playing;
            self.pending_events
                .push(PlayerEvent::PlayingChanged { is_playing });
        }
    }

    fn emit_episode_changed(&mut self) {
        if let Some(episode) = self.episodes.get(self.current_index) {
            self.pending_events.push(PlayerEvent::EpisodeChanged {
                index: self.current_index,
                episode_id: episode.id.clone(),
            });
        }
    }
}
