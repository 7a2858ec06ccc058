//! Session state: screen navigation, track collections and playback view-state
//!
//! Every operation here is a total, synchronous mutation. The controller is the
//! only caller in the running app; tests drive it directly.

use super::content::{Track, TrackCollection};
use super::playback::PlaybackState;
use super::types::{Screen, Service};

/// Queries offered as chips on the search screen once the user starts typing
pub const POPULAR_QUERIES: [&str; 4] = ["Макс Корж", "Cream Soda", "Zivert", "Miyagi"];

/// Number of plays kept in the listening history
pub const HISTORY_LIMIT: usize = 20;

/// Trimmed query, or `None` when there is nothing to search for
pub fn normalized_query(query: &str) -> Option<&str> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    screen: Screen,
    service: Option<Service>,
    query: String,
    results: Vec<Track>,
    favorites: TrackCollection,
    downloads: TrackCollection,
    history: Vec<Track>,
    playback: PlaybackState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_playback(volume: u8, progress: u8) -> Self {
        Self {
            playback: PlaybackState::new(volume, progress),
            ..Self::default()
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn service(&self) -> Option<Service> {
        self.service
    }

    pub fn select_service(&mut self, service: Service) {
        tracing::info!(%service, "Service selected");
        self.service = Some(service);
        self.screen = Screen::Search;
    }

    /// Replaces the result list and moves to Results, unless the query is blank.
    /// Returns whether the screen changed.
    pub fn search(&mut self, query: &str, results: Vec<Track>) -> bool {
        let Some(trimmed) = normalized_query(query) else {
            tracing::debug!("Ignoring blank search query");
            return false;
        };

        tracing::info!(query = trimmed, results = results.len(), "Showing search results");
        self.query = query.to_string();
        self.results = results;
        self.screen = Screen::Results;
        true
    }

    pub fn play_track(&mut self, track: Track) {
        tracing::info!(track_id = %track.id, title = %track.title, "Playing track");
        self.record_play(&track);
        self.playback.track = Some(track);
        self.playback.is_playing = true;
        self.screen = Screen::Player;
    }

    /// Follows the current screen's fixed back-link. Returns whether the screen changed.
    pub fn go_back(&mut self) -> bool {
        match self.screen.back_link() {
            Some(previous) => {
                tracing::debug!(from = ?self.screen, to = ?previous, "Navigating back");
                self.screen = previous;
                true
            }
            None => false,
        }
    }

    /// Bottom-navigation jump. Only Home, Search, Favorites and Downloads are targets.
    pub fn jump_to(&mut self, screen: Screen) -> bool {
        if !screen.is_bottom_nav_target() {
            tracing::warn!(?screen, "Refusing bottom-nav jump to non-nav screen");
            return false;
        }
        tracing::debug!(from = ?self.screen, to = ?screen, "Bottom-nav jump");
        self.screen = screen;
        true
    }

    // ========================================================================
    // Search query
    // ========================================================================

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    // ========================================================================
    // Track collections
    // ========================================================================

    pub fn results(&self) -> &[Track] {
        &self.results
    }

    pub fn favorites(&self) -> &[Track] {
        self.favorites.as_slice()
    }

    pub fn downloads(&self) -> &[Track] {
        self.downloads.as_slice()
    }

    /// Adds the track to favorites, or removes it if its id is already there.
    /// Returns the new membership.
    pub fn toggle_favorite(&mut self, track: &Track) -> bool {
        if self.favorites.remove(&track.id) {
            tracing::info!(track_id = %track.id, "Removed from favorites");
            false
        } else {
            self.favorites.insert(track.clone());
            tracing::info!(track_id = %track.id, "Added to favorites");
            true
        }
    }

    /// Stores an offline copy of the track unless one with the same id exists.
    /// Returns whether a copy was stored.
    pub fn download(&mut self, track: &Track) -> bool {
        let inserted = self.downloads.insert(track.offline_copy());
        if inserted {
            tracing::info!(track_id = %track.id, "Track downloaded");
        } else {
            tracing::debug!(track_id = %track.id, "Track already downloaded");
        }
        inserted
    }

    /// Listening history, most recent play first. Repeated plays appear repeatedly.
    pub fn history(&self) -> &[Track] {
        &self.history
    }

    fn record_play(&mut self, track: &Track) {
        self.history.insert(0, track.clone());
        self.history.truncate(HISTORY_LIMIT);
    }

    pub fn is_favorite(&self, track_id: &str) -> bool {
        self.favorites.contains(track_id)
    }

    pub fn is_downloaded(&self, track_id: &str) -> bool {
        self.downloads.contains(track_id)
    }

    // ========================================================================
    // Playback view-state
    // ========================================================================

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.playback.track.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playback.is_playing = playing;
    }

    pub fn toggle_playing(&mut self) -> bool {
        self.playback.is_playing = !self.playback.is_playing;
        self.playback.is_playing
    }

    pub fn set_progress(&mut self, progress: u8) {
        self.playback.set_progress(progress);
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.playback.set_volume(volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_tracks;

    fn zivert() -> Track {
        Track::new("5", "Лети", "Zivert", "3:15", Some(Service::Yandex))
    }

    #[test]
    fn starts_on_home_with_empty_state() {
        let session = Session::new();
        assert_eq!(session.screen(), Screen::Home);
        assert_eq!(session.service(), None);
        assert!(session.current_track().is_none());
        assert!(!session.is_playing());
        assert!(session.results().is_empty());
        assert!(session.favorites().is_empty());
        assert!(session.downloads().is_empty());
        assert!(session.history().is_empty());
        assert_eq!(session.playback().volume(), 75);
        assert_eq!(session.playback().progress(), 30);
    }

    #[test]
    fn selecting_a_service_opens_search() {
        let mut session = Session::new();
        session.select_service(Service::Mts);
        assert_eq!(session.screen(), Screen::Search);
        assert_eq!(session.service(), Some(Service::Mts));
    }

    #[test]
    fn blank_queries_never_leave_search() {
        let mut session = Session::new();
        session.select_service(Service::Vk);

        for query in ["", "   ", "\t\n"] {
            assert!(!session.search(query, mock_tracks(Some(Service::Vk))));
            assert_eq!(session.screen(), Screen::Search);
        }
        assert!(session.results().is_empty());
    }

    #[test]
    fn search_replaces_previous_results() {
        let mut session = Session::new();
        session.select_service(Service::Yandex);
        assert!(session.search("Zivert", mock_tracks(Some(Service::Yandex))));
        assert_eq!(session.screen(), Screen::Results);
        assert_eq!(session.results().len(), 5);

        session.go_back();
        assert!(session.search("Miyagi", mock_tracks(Some(Service::Yandex))));
        assert_eq!(session.results().len(), 5);
        assert_eq!(session.query(), "Miyagi");
    }

    #[test]
    fn play_track_sets_player_state() {
        let mut session = Session::new();
        session.play_track(zivert());
        assert_eq!(session.screen(), Screen::Player);
        assert_eq!(session.current_track().map(|t| t.id.as_str()), Some("5"));
        assert!(session.is_playing());
    }

    #[test]
    fn toggle_favorite_twice_restores_membership() {
        let mut session = Session::new();
        let track = zivert();

        assert!(session.toggle_favorite(&track));
        assert!(session.is_favorite("5"));
        assert!(!session.toggle_favorite(&track));
        assert!(!session.is_favorite("5"));
        assert!(session.favorites().is_empty());
    }

    #[test]
    fn download_is_idempotent_and_flags_offline() {
        let mut session = Session::new();
        session.select_service(Service::Yandex);
        session.search("Zivert", mock_tracks(Some(Service::Yandex)));
        let track = session.results()[4].clone();

        assert!(session.download(&track));
        assert!(!session.download(&track));

        assert_eq!(session.downloads().len(), 1);
        assert!(session.downloads()[0].offline);
        assert!(!session.results()[4].offline);
        assert!(session.is_downloaded("5"));
    }

    #[test]
    fn downloading_an_offline_copy_keeps_one_offline_entry() {
        let mut session = Session::new();
        let already_offline = zivert().offline_copy();
        session.download(&already_offline);
        session.download(&zivert());
        assert_eq!(session.downloads().len(), 1);
        assert!(session.downloads()[0].offline);
    }

    #[test]
    fn history_lists_plays_newest_first() {
        let mut session = Session::new();
        let tracks = mock_tracks(Some(Service::Vk));
        session.play_track(tracks[0].clone());
        session.play_track(tracks[2].clone());
        session.play_track(tracks[0].clone());

        let ids: Vec<&str> = session.history().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "3", "1"]);
    }

    #[test]
    fn history_keeps_only_the_latest_plays() {
        let mut session = Session::new();
        for i in 0..HISTORY_LIMIT + 5 {
            session.play_track(Track::new(i.to_string(), "Title", "Artist", "3:00", None));
        }

        assert_eq!(session.history().len(), HISTORY_LIMIT);
        assert_eq!(session.history()[0].id, (HISTORY_LIMIT + 4).to_string());
        assert_eq!(session.history()[HISTORY_LIMIT - 1].id, "5");
    }

    #[test]
    fn history_screen_links_back_home() {
        let mut session = Session::new();
        assert!(session.jump_to(Screen::History));
        assert!(session.go_back());
        assert_eq!(session.screen(), Screen::Home);
    }

    #[test]
    fn back_from_home_is_a_no_op() {
        let mut session = Session::new();
        assert!(!session.go_back());
        assert_eq!(session.screen(), Screen::Home);
    }

    #[test]
    fn player_back_link_is_results_even_without_a_search() {
        let mut session = Session::new();
        session.jump_to(Screen::Favorites);
        session.play_track(zivert());
        session.go_back();
        assert_eq!(session.screen(), Screen::Results);
    }

    #[test]
    fn bottom_nav_rejects_results_and_player() {
        let mut session = Session::new();
        assert!(!session.jump_to(Screen::Player));
        assert!(!session.jump_to(Screen::Results));
        assert_eq!(session.screen(), Screen::Home);

        session.play_track(zivert());
        assert!(session.jump_to(Screen::Downloads));
        assert_eq!(session.screen(), Screen::Downloads);
    }

    #[test]
    fn query_editing() {
        let mut session = Session::new();
        session.push_query_char('Z');
        session.push_query_char('i');
        session.pop_query_char();
        assert_eq!(session.query(), "Z");
        session.clear_query();
        assert_eq!(session.query(), "");
        session.set_query("Cream Soda");
        assert_eq!(normalized_query(session.query()), Some("Cream Soda"));
    }

    #[test]
    fn playback_setters_only_touch_view_state() {
        let mut session = Session::new();
        session.play_track(zivert());
        assert!(!session.toggle_playing());
        session.set_playing(true);
        session.set_volume(120);
        session.set_progress(10);
        assert!(session.is_playing());
        assert_eq!(session.playback().volume(), 100);
        assert_eq!(session.playback().progress(), 10);
        assert_eq!(session.screen(), Screen::Player);
    }
}
