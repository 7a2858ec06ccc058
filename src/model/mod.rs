//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (services, screens, UI state)
//! - `content`: Tracks and id-keyed track collections
//! - `playback`: Playback view-state (loaded track, progress, volume)
//! - `session`: Navigation state machine and collection operations
//! - `app_model`: Main application model wrapping the session with cursors and overlays

mod types;
mod content;
mod playback;
mod session;
mod app_model;

// Re-export all public types for convenient access
pub use types::{Screen, SearchFocus, Service, UiState};

pub use content::{Track, TrackCollection};

pub use playback::{DEFAULT_PROGRESS_PERCENT, DEFAULT_VOLUME_PERCENT, PlaybackState};

pub use session::{HISTORY_LIMIT, POPULAR_QUERIES, Session, normalized_query};

pub use app_model::AppModel;
