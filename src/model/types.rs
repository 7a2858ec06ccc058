//! Core type definitions for the application

use std::fmt;
use std::time::Instant;

/// One of the upstream music catalogs the user can pick on the home screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Service {
    Yandex,
    Vk,
    Mts,
}

impl Service {
    pub const ALL: [Service; 3] = [Service::Yandex, Service::Vk, Service::Mts];

    pub fn display_name(self) -> &'static str {
        match self {
            Service::Yandex => "Yandex Music",
            Service::Vk => "VK",
            Service::Mts => "MTS Music",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Service::Yandex => "80+ million tracks",
            Service::Vk => "VK Music",
            Service::Mts => "Track collection",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Service::Yandex => "yandex",
            Service::Vk => "vk",
            Service::Mts => "mts",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The mutually exclusive screens a session can be on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Search,
    Results,
    Player,
    Favorites,
    Downloads,
    History,
}

impl Screen {
    /// Screens reachable from the bottom navigation bar, in display order
    pub const BOTTOM_NAV: [Screen; 5] = [
        Screen::Home,
        Screen::Search,
        Screen::Favorites,
        Screen::Downloads,
        Screen::History,
    ];

    /// Fixed back-link of each screen. Home has none.
    pub fn back_link(self) -> Option<Screen> {
        match self {
            Screen::Home => None,
            Screen::Search => Some(Screen::Home),
            Screen::Results => Some(Screen::Search),
            Screen::Player => Some(Screen::Results),
            Screen::Favorites => Some(Screen::Home),
            Screen::Downloads => Some(Screen::Home),
            Screen::History => Some(Screen::Home),
        }
    }

    pub fn is_bottom_nav_target(self) -> bool {
        Self::BOTTOM_NAV.contains(&self)
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Music Bot",
            Screen::Search => "Search",
            Screen::Results => "Results",
            Screen::Player => "Now Playing",
            Screen::Favorites => "Favorites",
            Screen::Downloads => "Downloads",
            Screen::History => "History",
        }
    }
}

/// Which widget on the search screen receives keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SearchFocus {
    #[default]
    Input,
    Suggestions,
}

/// Cursor positions and overlays; never part of the session contract
#[derive(Clone, Debug)]
pub struct UiState {
    pub service_selected: usize,
    pub results_selected: usize,
    pub favorites_selected: usize,
    pub downloads_selected: usize,
    pub history_selected: usize,
    pub search_focus: SearchFocus,
    pub suggestion_selected: usize,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            service_selected: 0,
            results_selected: 0,
            favorites_selected: 0,
            downloads_selected: 0,
            history_selected: 0,
            search_focus: SearchFocus::Input,
            suggestion_selected: 0,
            status_message: None,
            error_message: None,
            error_timestamp: None,
            show_help_popup: false,
        }
    }
}
