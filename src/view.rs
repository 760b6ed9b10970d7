//! Prompt dispatch and the view state it renders from.

use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::client::CompletionService;
use crate::error::AppError;
use crate::prompt::Action;
use crate::session::Session;
use crate::theme::Theme;

pub type RequestId = u64;

#[derive(Debug, Clone)]
pub enum DispatchOutcome {
    Success(String),
    Failure(AppError),
}

/// A finished dispatch: the request that was sent and what came back.
#[derive(Debug, Clone)]
pub struct Dispatched {
    pub request: PendingRequest,
    pub outcome: DispatchOutcome,
}

/// How completions of overlapping requests are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Every completion is applied in arrival order, stale ones included.
    #[default]
    LastWriteWins,
    /// Completions older than the latest issued request are dropped.
    LatestOnly,
}

impl FromStr for ResponseOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-write-wins" => Ok(ResponseOrdering::LastWriteWins),
            "latest-only" => Ok(ResponseOrdering::LatestOnly),
            other => Err(format!(
                "unknown response ordering {:?}, expected last-write-wins or latest-only",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub action: Action,
    pub prompt: String,
}

#[derive(Debug, Clone)]
pub struct ResultView {
    topic: String,
    result: String,
    error: Option<String>,
    in_flight: bool,
    theme: Theme,
    session: Session,
    ordering: ResponseOrdering,
    last_issued: RequestId,
}

impl ResultView {
    pub fn new(session: Session) -> Self {
        Self {
            topic: String::new(),
            result: String::new(),
            error: None,
            in_flight: false,
            theme: Theme::default(),
            session,
            ordering: ResponseOrdering::default(),
            last_issued: 0,
        }
    }

    pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Restores a result shown before a page reload.
    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = result.into();
        self
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Starts a request for `action` against the current topic.
    pub fn begin(&mut self, action: &str) -> PendingRequest {
        let action = Action::from_name(action);
        self.last_issued += 1;
        self.in_flight = true;
        self.result.clear();
        self.error = None;

        let prompt = action.prompt(&self.topic);
        debug!(request_id = self.last_issued, prompt = %prompt, "composed prompt");

        PendingRequest {
            id: self.last_issued,
            action,
            prompt,
        }
    }

    /// Applies the outcome of request `id`. Returns false when the ordering
    /// policy discarded it as stale.
    pub fn complete(&mut self, id: RequestId, outcome: DispatchOutcome) -> bool {
        if self.ordering == ResponseOrdering::LatestOnly && id < self.last_issued {
            return false;
        }

        match outcome {
            DispatchOutcome::Success(text) => {
                self.result = text;
                self.error = None;
            }
            DispatchOutcome::Failure(err) => {
                self.result.clear();
                self.error = Some(err.to_string());
            }
        }
        self.in_flight = false;
        true
    }
}

/// Shared, lockable [`ResultView`].
#[derive(Debug, Clone)]
pub struct ViewHandle {
    inner: Arc<Mutex<ResultView>>,
}

impl ViewHandle {
    pub fn new(view: ResultView) -> Self {
        Self {
            inner: Arc::new(Mutex::new(view)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ResultView> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> ResultView {
        self.lock().clone()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut ResultView) -> R) -> R {
        f(&mut self.lock())
    }

    pub async fn dispatch(
        &self,
        service: &dyn CompletionService,
        action: &str,
    ) -> Dispatched {
        let pending = self.lock().begin(action);
        info!(
            request_id = pending.id,
            action = pending.action.name(),
            "dispatching prompt"
        );

        let outcome = match service.complete(&pending.prompt).await {
            Ok(text) => DispatchOutcome::Success(text),
            Err(err) => {
                warn!(request_id = pending.id, error = %err, "dispatch failed");
                DispatchOutcome::Failure(err)
            }
        };

        let applied = self.lock().complete(pending.id, outcome.clone());
        if !applied {
            warn!(request_id = pending.id, "discarded stale completion");
        }

        Dispatched {
            request: pending,
            outcome,
        }
    }
}
