//! Podcastr - Playback Management
//!
//! Platform-agnostic player state and controls for Podcastr.
//!
//! This crate provides:
//! - Shared player state (playlist, current index, playing/looping/shuffling)
//! - Derived navigation availability (`has_next`, `has_previous`)
//! - Shuffled navigation (uniform random pick over the playlist)
//! - A cloneable context handle with change subscriptions
//! - A control surface binding the state to a media element
//! - A renderable player view with transport button enablement
//!
//! # Architecture
//!
//! `podcastr-playback` has no platform dependencies by default. Audio output
//! is provided through the [`MediaElement`] trait; the `wasm` feature adds an
//! implementation over the browser's `<audio>` element.
//!
//! # Example: Playlist Navigation
//!
//! ```rust
//! use podcastr_core::Episode;
//! use podcastr_playback::PlayerContext;
//!
//! let player = PlayerContext::default();
//!
//! let episodes: Vec<Episode> = ["a", "b", "c"]
//!     .iter()
//!     .map(|id| Episode::new(*id, *id, "Hosts", "thumb.jpg", format!("{}.m4a", id), 60))
//!     .collect();
//!
//! player.play_list(episodes, 0).unwrap();
//! player.play_next();
//!
//! let snapshot = player.snapshot();
//! assert_eq!(snapshot.current_index, 1);
//! assert!(snapshot.is_playing);
//! assert!(snapshot.has_next && snapshot.has_previous);
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use podcastr_playback::{
//!     ControlsConfig, MediaElement, MediaEvent, PlayerContext, PlayerControls, Result,
//!     TransportAction,
//! };
//!
//! struct MyAudioOutput {
//!     // ... platform-specific handle
//! }
//!
//! impl MediaElement for MyAudioOutput {
//!     fn set_source(&mut self, url: &str) {}
//!     fn clear_source(&mut self) {}
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) {}
//!     fn current_time(&self) -> f64 { 0.0 }
//!     fn set_current_time(&mut self, seconds: f64) {}
//!     fn is_looping(&self) -> bool { false }
//!     fn set_looping(&mut self, looping: bool) {}
//!     fn set_autoplay(&mut self, autoplay: bool) {}
//! }
//!
//! let context = PlayerContext::default();
//! let header = context.clone();
//! let mut controls = PlayerControls::new(context, MyAudioOutput {}, ControlsConfig::default());
//!
//! // Actions through any handle reach the media element
//! header.toggle_play();
//!
//! // Forward platform notifications
//! controls.handle_media_event(MediaEvent::TimeUpdate { position: 12.5 });
//!
//! // Wire the buttons
//! controls.press(TransportAction::Next);
//! let view = controls.view();
//! ```

mod context;
mod controls;
mod error;
pub mod events;
mod media;
mod shuffle;
mod state;
pub mod types;
pub mod view;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use context::{PlayerContext, SubscriptionId, WeakPlayerContext};
pub use controls::PlayerControls;
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use media::{MediaElement, MediaEvent};
pub use shuffle::random_index;
pub use state::PlayerState;
pub use types::{ControlsConfig, PlayerConfig, PlayerSnapshot};
pub use view::{ButtonState, NowPlaying, PlayerView, SeekBar, TransportAction, TransportControls};
