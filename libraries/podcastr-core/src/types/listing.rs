/// Homepage listing split
use crate::types::Episode;
use serde::{Deserialize, Serialize};

/// Episodes shown on the homepage
///
/// The newest episodes are featured as cards ("latest"), the remainder go in
/// the table ("all"). Both sections share one playlist, latest first, so
/// starting playback from either section queues everything on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeListing {
    pub latest: Vec<Episode>,
    pub all: Vec<Episode>,
}

impl HomeListing {
    /// Split episodes (newest first) into the two homepage sections
    pub fn split(mut episodes: Vec<Episode>, latest_count: usize) -> Self {
        let at = latest_count.min(episodes.len());
        let all = episodes.split_off(at);

        Self {
            latest: episodes,
            all,
        }
    }

    /// The shared playlist: latest followed by all
    pub fn playlist(&self) -> Vec<Episode> {
        self.latest.iter().chain(self.all.iter()).cloned().collect()
    }

    /// Playlist index of the `index`-th row of the "all" table
    pub fn playlist_index_of_all(&self, index: usize) -> usize {
        index + self.latest.len()
    }

    /// Total number of episodes on the page
    pub fn len(&self) -> usize {
        self.latest.len() + self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_empty() && self.all.is_empty()
    }
}
