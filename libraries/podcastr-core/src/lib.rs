//! Podcastr Core
//!
//! Platform-agnostic episode types and display formatting for Podcastr.
//!
//! This crate is shared by the playback library (which consumes [`Episode`]
//! values), the API client (which produces [`EpisodeRecord`] values) and the
//! page server (which turns records into display-ready episodes).
//!
//! # Example
//!
//! ```rust
//! use podcastr_core::{format::duration_to_time_string, Episode};
//!
//! let episode = Episode::new(
//!     "a-importancia-da-contribuicao-em-open-source",
//!     "A importância da contribuição em Open Source",
//!     "Diego e Richard",
//!     "https://storage.googleapis.com/golden-wind/nextlevelweek/05-podcastr/opensource.jpg",
//!     "https://storage.googleapis.com/golden-wind/nextlevelweek/05-podcastr/opensource.m4a",
//!     3981,
//! );
//!
//! assert_eq!(duration_to_time_string(episode.duration), "01:06:21");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod types;

pub use error::{CoreError, Result};
pub use format::Locale;
pub use types::{Episode, EpisodeDetail, EpisodeFile, EpisodeRecord, HomeListing};
