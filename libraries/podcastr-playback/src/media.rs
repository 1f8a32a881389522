//! Media element abstraction
//!
//! Platform-specific playback (a browser `<audio>` element, a test double)
//! is provided by implementing [`MediaElement`]. The element reports back
//! through [`MediaEvent`]s fed to
//! [`PlayerControls::handle_media_event`](crate::PlayerControls::handle_media_event).

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A single audio output that can load one source at a time
pub trait MediaElement {
    /// Load a new source URL, replacing the current one
    fn set_source(&mut self, url: &str);

    /// Unload the current source
    fn clear_source(&mut self);

    /// Start or resume playback
    ///
    /// Can fail, e.g. when the platform blocks playback without a user
    /// gesture.
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the position
    fn pause(&mut self);

    /// Playback position in seconds
    fn current_time(&self) -> f64;

    /// Jump to a position in seconds
    fn set_current_time(&mut self, seconds: f64);

    /// Whether the element restarts the source on its own when it ends
    fn is_looping(&self) -> bool;

    fn set_looping(&mut self, looping: bool);

    /// Start playing as soon as a newly loaded source is ready
    fn set_autoplay(&mut self, autoplay: bool);
}

/// Notifications raised by a [`MediaElement`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MediaEvent {
    /// Source metadata is available
    LoadedMetadata { duration: f64 },

    /// Playback position moved
    TimeUpdate { position: f64 },

    /// Playback started, from any origin
    Play,

    /// Playback paused, from any origin
    Pause,

    /// The source played to its end (never raised while looping)
    Ended,
}
