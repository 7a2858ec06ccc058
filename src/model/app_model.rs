//! Main application model: the session plus cursor and overlay state

use std::time::{Duration, Instant};

use super::content::Track;
use super::session::{POPULAR_QUERIES, Session};
use super::types::{Screen, SearchFocus, Service, UiState};

const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Main application model containing all state
pub struct AppModel {
    pub session: Session,
    pub ui_state: UiState,
    should_quit: bool,
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(Session::new())
    }
}

impl AppModel {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            ui_state: UiState::default(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }

    // ========================================================================
    // Overlays
    // ========================================================================

    pub fn set_error(&mut self, message: String) {
        self.ui_state.error_message = Some(message);
        self.ui_state.error_timestamp = Some(Instant::now());
    }

    pub fn clear_error(&mut self) {
        self.ui_state.error_message = None;
        self.ui_state.error_timestamp = None;
    }

    pub fn has_error(&self) -> bool {
        self.ui_state.error_message.is_some()
    }

    pub fn auto_clear_old_errors(&mut self) {
        if let Some(timestamp) = self.ui_state.error_timestamp {
            if timestamp.elapsed() > ERROR_DISPLAY_DURATION {
                self.clear_error();
            }
        }
    }

    pub fn show_help_popup(&mut self) {
        self.ui_state.show_help_popup = true;
    }

    pub fn hide_help_popup(&mut self) {
        self.ui_state.show_help_popup = false;
    }

    pub fn is_help_popup_open(&self) -> bool {
        self.ui_state.show_help_popup
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.ui_state.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.ui_state.status_message = None;
    }

    // ========================================================================
    // Cursors
    // ========================================================================

    fn list_len(&self, screen: Screen) -> usize {
        match screen {
            Screen::Home => Service::ALL.len(),
            Screen::Results => self.session.results().len(),
            Screen::Favorites => self.session.favorites().len(),
            Screen::Downloads => self.session.downloads().len(),
            Screen::History => self.session.history().len(),
            Screen::Search | Screen::Player => 0,
        }
    }

    fn cursor_mut(&mut self, screen: Screen) -> Option<&mut usize> {
        match screen {
            Screen::Home => Some(&mut self.ui_state.service_selected),
            Screen::Results => Some(&mut self.ui_state.results_selected),
            Screen::Favorites => Some(&mut self.ui_state.favorites_selected),
            Screen::Downloads => Some(&mut self.ui_state.downloads_selected),
            Screen::History => Some(&mut self.ui_state.history_selected),
            Screen::Search | Screen::Player => None,
        }
    }

    pub fn move_selection_up(&mut self) {
        let screen = self.session.screen();
        if let Some(cursor) = self.cursor_mut(screen) {
            *cursor = cursor.saturating_sub(1);
        }
    }

    pub fn move_selection_down(&mut self) {
        let screen = self.session.screen();
        let last = self.list_len(screen).saturating_sub(1);
        if let Some(cursor) = self.cursor_mut(screen) {
            if *cursor < last {
                *cursor += 1;
            }
        }
    }

    /// Pulls every cursor back inside its list after a list shrinks or is replaced
    pub fn clamp_selections(&mut self) {
        for screen in [Screen::Results, Screen::Favorites, Screen::Downloads, Screen::History] {
            let last = self.list_len(screen).saturating_sub(1);
            if let Some(cursor) = self.cursor_mut(screen) {
                *cursor = (*cursor).min(last);
            }
        }
    }

    pub fn reset_results_selection(&mut self) {
        self.ui_state.results_selected = 0;
    }

    pub fn selected_service(&self) -> Service {
        Service::ALL[self.ui_state.service_selected.min(Service::ALL.len() - 1)]
    }

    /// Track under the cursor on the current list screen; on the player, the loaded track
    pub fn selected_track(&self) -> Option<Track> {
        let session = &self.session;
        match session.screen() {
            Screen::Results => session.results().get(self.ui_state.results_selected),
            Screen::Favorites => session.favorites().get(self.ui_state.favorites_selected),
            Screen::Downloads => session.downloads().get(self.ui_state.downloads_selected),
            Screen::History => session.history().get(self.ui_state.history_selected),
            Screen::Player => session.current_track(),
            Screen::Home | Screen::Search => None,
        }
        .cloned()
    }

    // ========================================================================
    // Search suggestions
    // ========================================================================

    /// Suggestion chips are only offered while the query is non-empty
    pub fn suggestions_visible(&self) -> bool {
        !self.session.query().is_empty()
    }

    pub fn focus_suggestions(&mut self) {
        if self.suggestions_visible() {
            self.ui_state.search_focus = SearchFocus::Suggestions;
        }
    }

    pub fn focus_search_input(&mut self) {
        self.ui_state.search_focus = SearchFocus::Input;
    }

    pub fn search_focus(&self) -> SearchFocus {
        if self.suggestions_visible() {
            self.ui_state.search_focus
        } else {
            SearchFocus::Input
        }
    }

    pub fn move_suggestion(&mut self, forward: bool) {
        let count = POPULAR_QUERIES.len();
        let current = self.ui_state.suggestion_selected % count;
        self.ui_state.suggestion_selected = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
    }

    pub fn selected_suggestion(&self) -> &'static str {
        POPULAR_QUERIES[self.ui_state.suggestion_selected % POPULAR_QUERIES.len()]
    }
}
