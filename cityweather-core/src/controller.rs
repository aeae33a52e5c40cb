//! Search state owner.
//!
//! One [`SearchController`] holds the [`AppState`] for a session. Every
//! submission gets a sequence number; a finished fetch only touches the state
//! if no newer submission has been made since, so the latest search always
//! wins regardless of the order responses arrive in.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use serde::Serialize;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{
    Config,
    error::FetchError,
    model::WeatherReport,
    presentation::{DEFAULT_BACKGROUND, ERROR_BACKGROUND, IconVariant, map_to_presentation},
    provider::{self, WeatherProvider, provider_from_config},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Searching,
    Displaying,
    Failed,
}

/// What the view renders.
///
/// `report` and `error_message` are never both set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppState {
    pub phase: Phase,
    pub report: Option<WeatherReport>,
    pub icon: Option<IconVariant>,
    pub error_message: Option<String>,
    pub background_key: &'static str,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            phase: Phase::Idle,
            report: None,
            icon: None,
            error_message: None,
            background_key: DEFAULT_BACKGROUND,
        }
    }
}

impl AppState {
    fn begin_search(&mut self) {
        self.error_message = None;
        self.phase = Phase::Searching;
    }

    fn apply(&mut self, outcome: Result<WeatherReport, FetchError>) {
        match outcome {
            Ok(report) => {
                let presentation = map_to_presentation(&report);
                self.phase = Phase::Displaying;
                self.report = Some(report);
                self.icon = Some(presentation.icon);
                self.error_message = None;
                self.background_key = presentation.background_key;
            }
            Err(err) => {
                self.phase = Phase::Failed;
                self.report = None;
                self.icon = None;
                self.error_message = Some(err.user_message());
                self.background_key = ERROR_BACKGROUND;
            }
        }
    }
}

#[derive(Debug)]
struct Inner {
    provider: Arc<dyn WeatherProvider>,
    credential: Option<String>,
    latest: AtomicU64,
    state: watch::Sender<AppState>,
}

/// Cheap to clone; clones share the same state.
#[derive(Debug, Clone)]
pub struct SearchController {
    inner: Arc<Inner>,
}

impl SearchController {
    pub fn new(provider: Arc<dyn WeatherProvider>, credential: Option<String>) -> Self {
        let (state, _) = watch::channel(AppState::default());

        SearchController {
            inner: Arc::new(Inner {
                provider,
                credential,
                latest: AtomicU64::new(0),
                state,
            }),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(provider_from_config(config), config.credential())
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified on every applied change.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.inner.state.subscribe()
    }

    /// Start a search for `city` on the current tokio runtime.
    ///
    /// Returns immediately; the handle may be dropped.
    pub fn submit(&self, city: impl Into<String>) -> JoinHandle<()> {
        let city = city.into();
        let seq = self.inner.latest.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(seq, city = %city, "search submitted");

        self.inner.state.send_modify(AppState::begin_search);

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let outcome =
                provider::fetch(inner.provider.as_ref(), &city, inner.credential.as_deref()).await;

            match &outcome {
                Ok(report) => info!(seq, location = report.location_name(), "weather received"),
                Err(err) => warn!(seq, city = %city, error = %err, "search failed"),
            }

            inner.state.send_if_modified(|state| {
                let latest = inner.latest.load(Ordering::SeqCst);
                if latest != seq {
                    debug!(seq, latest, "discarding superseded search result");
                    return false;
                }

                state.apply(outcome);
                true
            });
        })
    }

    /// Submit and wait for this search to settle, then return the state.
    pub async fn search(&self, city: impl Into<String>) -> AppState {
        if let Err(err) = self.submit(city).await {
            warn!(error = %err, "search task did not complete");
        }

        self.state()
    }
}
