/// Episode records as served by the episode API
use crate::error::{CoreError, Result};
use crate::format::{duration_to_time_string, format_published_at, Locale};
use crate::types::{Episode, EpisodeDetail};
use serde::{Deserialize, Deserializer, Serialize};

/// Raw episode record from `GET /episodes` and `GET /episodes/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub id: String,
    pub title: String,
    pub members: String,
    /// ISO timestamp, e.g. `2021-01-08 16:23:39`
    pub published_at: String,
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    pub file: EpisodeFile,
}

/// Media file attached to an episode record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeFile {
    pub url: String,

    /// MIME type, e.g. `audio/x-m4a`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Length in seconds; some feeds send it as a string
    #[serde(deserialize_with = "deserialize_duration")]
    pub duration: u64,
}

impl EpisodeRecord {
    /// Convert into a display-ready [`Episode`]
    pub fn to_episode(&self, locale: Locale) -> Result<Episode> {
        if self.file.url.trim().is_empty() {
            return Err(CoreError::invalid_record(&self.id, "missing media url"));
        }

        let published_at = format_published_at(&self.published_at, locale)?;

        Ok(Episode {
            id: self.id.clone(),
            title: self.title.clone(),
            members: self.members.clone(),
            thumbnail: self.thumbnail.clone(),
            url: self.file.url.clone(),
            duration: self.file.duration,
            duration_as_string: Some(duration_to_time_string(self.file.duration)),
            published_at: Some(published_at),
        })
    }

    /// Convert into an [`EpisodeDetail`] for the episode page
    pub fn to_detail(&self, locale: Locale) -> Result<EpisodeDetail> {
        Ok(EpisodeDetail {
            episode: self.to_episode(locale)?,
            description: self.description.clone(),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DurationValue {
    Integer(u64),
    Float(f64),
    Text(String),
}

fn deserialize_duration<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let seconds = match DurationValue::deserialize(deserializer)? {
        DurationValue::Integer(value) => return Ok(value),
        DurationValue::Float(value) => value,
        DurationValue::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid duration: {:?}", text)))?,
    };

    if seconds.is_finite() && seconds >= 0.0 {
        Ok(seconds.floor() as u64)
    } else {
        Err(D::Error::custom(format!("invalid duration: {}", seconds)))
    }
}
