//! Catalog seam between the session and the streaming services
//!
//! No service is ever contacted. [`MockCatalog`] answers every search with the
//! same five tracks, tagged with whichever service was asked.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Service, Track};

const MOCK_TRACKS: [(&str, &str, &str, &str); 5] = [
    ("1", "Последний танец", "Макс Корж", "3:45"),
    ("2", "Малиновый закат", "Cream Soda", "4:12"),
    ("3", "Мокрые кроссы", "Лауд", "3:28"),
    ("4", "Холодное сердце", "Miyagi & Andy Panda", "4:01"),
    ("5", "Лети", "Zivert", "3:15"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{0} is unavailable right now")]
    ServiceUnavailable(String),
    #[error("track {0} was not found")]
    NotFound(String),
    #[error("sign in to {0} first")]
    AuthRequired(String),
    #[error("request timed out")]
    NetworkTimeout,
}

/// Where a track's audio would be read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamHandle {
    pub track_id: String,
    pub uri: String,
}

#[async_trait]
pub trait MusicCatalog: Send + Sync {
    async fn search(&self, service: Option<Service>, query: &str) -> Result<Vec<Track>, CatalogError>;

    async fn fetch_stream(&self, track_id: &str) -> Result<StreamHandle, CatalogError>;
}

/// The static track list, tagged with `service`
pub fn mock_tracks(service: Option<Service>) -> Vec<Track> {
    MOCK_TRACKS
        .iter()
        .map(|(id, title, artist, duration)| Track::new(*id, *title, *artist, *duration, service))
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MockCatalog;

#[async_trait]
impl MusicCatalog for MockCatalog {
    async fn search(&self, service: Option<Service>, query: &str) -> Result<Vec<Track>, CatalogError> {
        // Same results for every service and query.
        tracing::debug!(?service, query, "Mock catalog search");
        Ok(mock_tracks(service))
    }

    async fn fetch_stream(&self, track_id: &str) -> Result<StreamHandle, CatalogError> {
        if !MOCK_TRACKS.iter().any(|(id, ..)| *id == track_id) {
            return Err(CatalogError::NotFound(track_id.to_string()));
        }
        Ok(StreamHandle {
            track_id: track_id.to_string(),
            uri: format!("mock://catalog/{}", track_id),
        })
    }
}
