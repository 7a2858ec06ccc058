//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared helpers (track rows, scrollable lists, truncation)
//! - `layout`: Header, status line and bottom navigation
//! - `content`: Home, search, result and collection screens
//! - `player`: Player screen
//! - `overlays`: Modal overlays (error, help)

mod utils;
mod layout;
mod content;
mod player;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{AppModel, Screen};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, model: &AppModel) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Screen title + back-link hint
                Constraint::Min(0),    // Screen body
                Constraint::Length(1), // Status line
                Constraint::Length(2), // Bottom navigation
            ])
            .split(frame.area());

        layout::render_header(frame, chunks[0], model);

        match model.session.screen() {
            Screen::Home => content::render_home(frame, chunks[1], model),
            Screen::Search => content::render_search(frame, chunks[1], model),
            Screen::Results => content::render_results(frame, chunks[1], model),
            Screen::Player => player::render_player(frame, chunks[1], &model.session),
            Screen::Favorites => content::render_favorites(frame, chunks[1], model),
            Screen::Downloads => content::render_downloads(frame, chunks[1], model),
            Screen::History => content::render_history(frame, chunks[1], model),
        }

        layout::render_status_line(frame, chunks[2], model);
        layout::render_bottom_nav(frame, chunks[3], model.session.screen());

        if model.ui_state.error_message.is_some() {
            overlays::render_error_notification(frame, &model.ui_state);
        }

        if model.ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
