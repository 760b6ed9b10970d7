pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod page;
pub mod prompt;
pub mod session;
pub mod theme;
pub mod view;

use std::sync::Arc;
use axum::http::HeaderMap;

use client::{CompletionService, HttpCompletionClient};
use config::Config;
use page::PageLinks;
use session::Session;
use view::ResultView;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub completion: Arc<dyn CompletionService>,
}

impl AppState {
    /// State backed by the HTTP completion client the config points at.
    pub fn from_config(config: Config) -> Self {
        let completion = HttpCompletionClient::new(config.generate_url.clone(), config.request_timeout);
        Self::with_completion(config, Arc::new(completion))
    }

    pub fn with_completion(config: Config, completion: Arc<dyn CompletionService>) -> Self {
        Self {
            config: Arc::new(config),
            completion,
        }
    }

    pub fn session(&self, headers: &HeaderMap) -> Session {
        Session::from_headers(headers, &self.config.session_header)
    }

    /// Fresh per-request view carrying the configured ordering policy.
    pub fn new_view(&self, session: Session) -> ResultView {
        ResultView::new(session).with_ordering(self.config.response_ordering)
    }

    pub fn links(&self) -> PageLinks {
        PageLinks {
            sign_in_url: self.config.sign_in_url.clone(),
            sign_out_url: self.config.sign_out_url.clone(),
        }
    }
}
