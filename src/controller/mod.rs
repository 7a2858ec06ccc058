//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input and
//! drives the session through its operations.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `navigation`: Service selection, search and screen navigation
//! - `playback`: Player controls, favorites and downloads

mod input;
mod navigation;
mod playback;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::catalog::{CatalogError, MusicCatalog};
use crate::model::AppModel;

pub const PROGRESS_STEP: u8 = 5;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) catalog: Arc<dyn MusicCatalog>,
    volume_step: u8,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>, catalog: Arc<dyn MusicCatalog>, volume_step: u8) -> Self {
        Self {
            model,
            catalog,
            volume_step,
        }
    }

    pub(crate) fn format_error(error: &CatalogError) -> String {
        match error {
            CatalogError::ServiceUnavailable(_) => format!("{}. Try another service.", error),
            CatalogError::NotFound(_) => format!("{}. It may have been removed.", error),
            CatalogError::AuthRequired(_) => format!("{}.", error),
            CatalogError::NetworkTimeout => "Request timed out. Check your connection.".to_string(),
        }
    }
}
