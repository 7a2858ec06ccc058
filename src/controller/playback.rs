//! Playback control methods, favorites and downloads

use crate::model::Track;

use super::{AppController, PROGRESS_STEP};

impl AppController {
    /// Loads `track` into the player and opens the player screen
    pub async fn play_track(&self, track: Track) {
        let track_id = track.id.clone();
        {
            let mut model = self.model.lock().await;
            model.session.play_track(track);
            model.ui_state.history_selected = 0;
        }

        let result = self.catalog.fetch_stream(&track_id).await;
        crate::log_catalog_result!("fetch_stream", result);
        match result {
            Ok(handle) => tracing::debug!(track_id, uri = %handle.uri, "Stream resolved"),
            Err(e) => {
                let mut model = self.model.lock().await;
                model.set_error(Self::format_error(&e));
            }
        }
    }

    pub async fn play_selected(&self) {
        let selected = self.model.lock().await.selected_track();
        if let Some(track) = selected {
            self.play_track(track).await;
        }
    }

    pub async fn toggle_playback(&self) {
        let mut model = self.model.lock().await;
        if model.session.current_track().is_none() {
            return;
        }
        let playing = model.session.toggle_playing();
        tracing::info!(action = if playing { "resumed" } else { "paused" }, "Playback toggled");
    }

    pub async fn seek_forward(&self) {
        let mut model = self.model.lock().await;
        let progress = model.session.playback().progress().saturating_add(PROGRESS_STEP);
        model.session.set_progress(progress);
    }

    pub async fn seek_backward(&self) {
        let mut model = self.model.lock().await;
        let progress = model.session.playback().progress().saturating_sub(PROGRESS_STEP);
        model.session.set_progress(progress);
    }

    pub async fn volume_up(&self) {
        let mut model = self.model.lock().await;
        let volume = model.session.playback().volume().saturating_add(self.volume_step);
        model.session.set_volume(volume);
        tracing::debug!(volume = model.session.playback().volume(), "Volume changed");
    }

    pub async fn volume_down(&self) {
        let mut model = self.model.lock().await;
        let volume = model.session.playback().volume().saturating_sub(self.volume_step);
        model.session.set_volume(volume);
        tracing::debug!(volume = model.session.playback().volume(), "Volume changed");
    }

    pub async fn toggle_favorite_selected(&self) {
        let mut model = self.model.lock().await;
        let Some(track) = model.selected_track() else {
            return;
        };
        let liked = model.session.toggle_favorite(&track);
        model.clamp_selections();
        let status = if liked { "Added to favorites" } else { "Removed from favorites" };
        model.set_status(format!("{}: {}", status, track.title));
    }

    pub async fn download_selected(&self) {
        let mut model = self.model.lock().await;
        let Some(track) = model.selected_track() else {
            return;
        };
        if model.session.download(&track) {
            model.set_status(format!("Saved offline: {}", track.title));
        } else {
            model.set_status(format!("Already offline: {}", track.title));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::catalog::CatalogError;
    use crate::controller::test_support::{FailingCatalog, controller, controller_with};
    use crate::model::{Screen, Service, Track};

    async fn controller_on_results() -> crate::controller::AppController {
        let controller = controller();
        controller.select_service(Service::Yandex).await;
        controller.perform_search("Zivert").await;
        controller
    }

    #[tokio::test]
    async fn play_selected_opens_player() {
        let controller = controller_on_results().await;
        controller.model.lock().await.move_selection_down();
        controller.play_selected().await;

        let model = controller.model.lock().await;
        assert_eq!(model.session.screen(), Screen::Player);
        assert_eq!(model.session.current_track().map(|t| t.id.as_str()), Some("2"));
        assert!(model.session.is_playing());
        assert!(!model.has_error());
    }

    #[tokio::test]
    async fn unresolvable_stream_still_opens_player() {
        let controller = controller_with(Arc::new(FailingCatalog(CatalogError::NetworkTimeout)));
        controller
            .play_track(Track::new("9", "Title", "Artist", "2:00", None))
            .await;

        let model = controller.model.lock().await;
        assert_eq!(model.session.screen(), Screen::Player);
        assert!(model.has_error());
    }

    #[tokio::test]
    async fn volume_and_progress_saturate() {
        let controller = controller_on_results().await;
        controller.play_selected().await;

        for _ in 0..30 {
            controller.volume_up().await;
            controller.seek_backward().await;
        }
        let model = controller.model.lock().await;
        assert_eq!(model.session.playback().volume(), 100);
        assert_eq!(model.session.playback().progress(), 0);
    }

    #[tokio::test]
    async fn toggle_playback_needs_a_track() {
        let controller = controller();
        controller.toggle_playback().await;
        assert!(!controller.model.lock().await.session.is_playing());

        let controller = controller_on_results().await;
        controller.play_selected().await;
        controller.toggle_playback().await;
        assert!(!controller.model.lock().await.session.is_playing());
    }

    #[tokio::test]
    async fn favorite_and_download_from_results() {
        let controller = controller_on_results().await;
        controller.toggle_favorite_selected().await;
        controller.download_selected().await;
        controller.download_selected().await;

        let model = controller.model.lock().await;
        assert!(model.session.is_favorite("1"));
        assert_eq!(model.session.downloads().len(), 1);
        assert_eq!(model.ui_state.status_message.as_deref(), Some("Already offline: Последний танец"));
    }
}
