//! WASM bindings for podcastr-playback
//!
//! Drives a page's `<audio>` element with the shared player state so the
//! browser frontend uses the same transport rules as everything else.

pub mod media;
pub mod player;

pub use media::HtmlAudioMedia;
pub use player::WasmPlayer;
