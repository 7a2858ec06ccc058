//! Tracks and the id-keyed collections that hold them

use super::types::Service;

/// A single playable item from a catalog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Display string such as `3:45`
    pub duration: String,
    pub service: Option<Service>,
    pub offline: bool,
}

impl Track {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: impl Into<String>,
        service: Option<Service>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            duration: duration.into(),
            service,
            offline: false,
        }
    }

    /// Copy of this track flagged as available offline
    pub fn offline_copy(&self) -> Self {
        Self {
            offline: true,
            ..self.clone()
        }
    }
}

/// Insertion-ordered set of tracks with at most one entry per id
#[derive(Clone, Debug, Default)]
pub struct TrackCollection {
    tracks: Vec<Track>,
}

impl TrackCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, track_id: &str) -> bool {
        self.tracks.iter().any(|t| t.id == track_id)
    }

    /// Appends `track` unless its id is already present. Returns whether it was inserted.
    pub fn insert(&mut self, track: Track) -> bool {
        if self.contains(&track.id) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Removes the entry with `track_id`. Returns whether one was removed.
    pub fn remove(&mut self, track_id: &str) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.id != track_id);
        self.tracks.len() != before
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn as_slice(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Track {
        Track::new(id, "Title", "Artist", "3:00", Some(Service::Vk))
    }

    #[test]
    fn insert_is_keyed_by_id() {
        let mut collection = TrackCollection::new();
        assert!(collection.insert(track("1")));

        let mut renamed = track("1");
        renamed.title = "Other".to_string();
        assert!(!collection.insert(renamed));

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.as_slice()[0].title, "Title");
    }

    #[test]
    fn remove_reports_membership() {
        let mut collection = TrackCollection::new();
        collection.insert(track("1"));
        collection.insert(track("2"));

        assert!(collection.remove("1"));
        assert!(!collection.remove("1"));
        assert_eq!(collection.get(0).map(|t| t.id.as_str()), Some("2"));
    }

    #[test]
    fn offline_copy_leaves_source_untouched() {
        let source = track("3");
        let copy = source.offline_copy();
        assert!(copy.offline);
        assert!(!source.offline);
        assert_eq!(copy.id, source.id);
    }
}
