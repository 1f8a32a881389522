/// Episode domain type
use serde::{Deserialize, Serialize};

/// One playable podcast episode
///
/// Immutable once constructed. The display strings are produced by the data
/// layer and carried along untouched; playback only reads `url` and
/// `duration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Unique episode identifier (also the page slug)
    pub id: String,

    /// Episode title
    pub title: String,

    /// Hosts and guests, as a single display string
    pub members: String,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Playable media URL
    pub url: String,

    /// Total length in seconds
    pub duration: u64,

    /// `HH:MM:SS` rendering of `duration`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_as_string: Option<String>,

    /// Localized publication date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

impl Episode {
    /// Create an episode without display strings
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        members: impl Into<String>,
        thumbnail: impl Into<String>,
        url: impl Into<String>,
        duration: u64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            members: members.into(),
            thumbnail: thumbnail.into(),
            url: url.into(),
            duration,
            duration_as_string: None,
            published_at: None,
        }
    }

    /// Attach the display strings computed by the data layer
    pub fn with_display(
        mut self,
        duration_as_string: impl Into<String>,
        published_at: impl Into<String>,
    ) -> Self {
        self.duration_as_string = Some(duration_as_string.into());
        self.published_at = Some(published_at.into());
        self
    }
}

/// Episode plus the long-form description shown on its own page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeDetail {
    #[serde(flatten)]
    pub episode: Episode,

    /// Show notes, as HTML from the API
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_display_fields() {
        let episode = Episode::new("ep1", "Title", "Host", "thumb.jpg", "ep1.m4a", 100)
            .with_display("00:01:40", "8 jan 21");

        let json = serde_json::to_value(&episode).unwrap();
        assert_eq!(json["durationAsString"], "00:01:40");
        assert_eq!(json["publishedAt"], "8 jan 21");
        assert_eq!(json["duration"], 100);
    }

    #[test]
    fn display_fields_are_optional_on_the_wire() {
        let episode: Episode = serde_json::from_str(
            r#"{"id":"ep1","title":"T","members":"M","thumbnail":"t.jpg","url":"a.mp3","duration":5}"#,
        )
        .unwrap();

        assert!(episode.duration_as_string.is_none());
        assert!(episode.published_at.is_none());
        assert_eq!(episode.duration, 5);
    }

    #[test]
    fn detail_flattens_the_episode() {
        let detail = EpisodeDetail {
            episode: Episode::new("ep1", "T", "M", "t.jpg", "a.mp3", 5),
            description: "<p>notes</p>".to_string(),
        };

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["id"], "ep1");
        assert_eq!(json["description"], "<p>notes</p>");
    }
}
