mod episode;
mod listing;
mod record;

pub use episode::{Episode, EpisodeDetail};
pub use listing::HomeListing;
pub use record::{EpisodeFile, EpisodeRecord};
