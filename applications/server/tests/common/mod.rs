/// Common test utilities and fixtures
use async_trait::async_trait;
use podcastr_client::{ClientError, EpisodeSource, Result};
use podcastr_core::{EpisodeFile, EpisodeRecord};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory episode source that can be switched offline
#[derive(Default)]
pub struct FakeSource {
    records: Mutex<Vec<EpisodeRecord>>,
    offline: AtomicBool,
    garbled: AtomicBool,
    pub list_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
}

impl FakeSource {
    pub fn with_records(records: Vec<EpisodeRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Answer with a body that cannot be parsed
    pub fn set_garbled(&self, garbled: bool) {
        self.garbled.store(garbled, Ordering::SeqCst);
    }

    pub fn set_records(&self, records: Vec<EpisodeRecord>) {
        *self.records.lock().unwrap() = records;
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(ClientError::ServerUnreachable("connection refused".to_string()))
        } else if self.garbled.load(Ordering::SeqCst) {
            Err(ClientError::ParseError("expected value at line 1".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl EpisodeSource for FakeSource {
    async fn latest_episodes(&self, limit: usize) -> Result<Vec<EpisodeRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(self.records.lock().unwrap().iter().take(limit).cloned().collect())
    }

    async fn episode(&self, id: &str) -> Result<EpisodeRecord> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(id.to_string()))
    }
}

/// Episode record fixture, newest first when `day` is descending
pub fn record(id: &str, title: &str, day: u32) -> EpisodeRecord {
    EpisodeRecord {
        id: id.to_string(),
        title: title.to_string(),
        members: "Diego Fernandes e Richard Eduardo".to_string(),
        published_at: format!("2021-01-{:02} 16:23:39", day),
        thumbnail: format!("https://storage.example.com/{}.jpg", id),
        description: "<p>Notes</p><script>alert(1)</script>".to_string(),
        file: EpisodeFile {
            url: format!("https://storage.example.com/{}.m4a", id),
            mime_type: Some("audio/x-m4a".to_string()),
            duration: 3981,
        },
    }
}

pub fn records(count: u32) -> Vec<EpisodeRecord> {
    (0..count)
        .map(|i| record(&format!("episode-{}", i), &format!("Faladev{}", i), 28 - i))
        .collect()
}
