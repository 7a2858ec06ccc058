//! Navigation-related controller methods (service selection, search, screen changes)

use crate::model::{Screen, Service, normalized_query};
use super::AppController;

impl AppController {
    pub async fn select_service(&self, service: Service) {
        let mut model = self.model.lock().await;
        model.session.select_service(service);
        model.focus_search_input();
    }

    /// Runs a search for `query` against the selected service.
    ///
    /// A blank query neither calls the catalog nor changes the screen.
    pub async fn perform_search(&self, query: &str) {
        if normalized_query(query).is_none() {
            tracing::debug!("Search skipped: blank query");
            return;
        }

        let service = {
            let mut model = self.model.lock().await;
            model.session.set_query(query);
            model.session.service()
        };

        tracing::debug!(query, ?service, "Performing search");
        let result = self.catalog.search(service, query).await;
        crate::log_catalog_result!("search", result);

        let mut model = self.model.lock().await;
        match result {
            Ok(results) => {
                model.session.search(query, results);
                model.reset_results_selection();
                model.focus_search_input();
                model.clear_status();
            }
            Err(e) => {
                tracing::error!(query, error = %e, "Search failed");
                model.set_error(Self::format_error(&e));
            }
        }
    }

    pub async fn search_current_query(&self) {
        let query = self.model.lock().await.session.query().to_string();
        self.perform_search(&query).await;
    }

    /// Replaces the query with a popular-query chip and searches for it
    pub async fn apply_suggestion(&self, suggestion: &str) {
        tracing::debug!(suggestion, "Applying search suggestion");
        self.perform_search(suggestion).await;
    }

    pub async fn go_back(&self) {
        let mut model = self.model.lock().await;
        if model.session.go_back() {
            model.clear_status();
        }
    }

    pub async fn jump_to(&self, screen: Screen) {
        let mut model = self.model.lock().await;
        if model.session.jump_to(screen) {
            model.focus_search_input();
            model.clear_status();
        }
    }
}
