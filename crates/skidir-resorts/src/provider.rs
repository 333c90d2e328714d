//! Session-scoped owner of the working resort list.
//!
//! A [`ResortProvider`] moves through `Idle -> Loading -> {Ready, Degraded}`.
//! Each `load`/`refetch` makes exactly one attempt against the remote API;
//! any failure installs the fallback list so there is always data to show.
//!
//! Several fetches may be in flight at once. Each one is stamped with a
//! request token when it starts and only the most recent token is allowed to
//! install its result; older results are dropped on arrival.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use skidir_core::{filter_resorts, ApiConfig, ResortRecord, SearchFilters};

use crate::client::ResortApiClient;
use crate::error::ResortsError;
use crate::fallback::{fallback_resorts, merge_datasets};

/// User-facing message recorded whenever the fallback list replaces live data.
pub const FALLBACK_ERROR_MESSAGE: &str =
    "Failed to load ski resort data from API. Using cached data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderStatus {
    /// No fetch has been started.
    Idle,
    Loading,
    /// The last attempt succeeded, or the API is disabled by configuration.
    Ready,
    /// The last attempt failed and the fallback list is installed.
    Degraded,
}

impl std::fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderStatus::Idle => write!(f, "idle"),
            ProviderStatus::Loading => write!(f, "loading"),
            ProviderStatus::Ready => write!(f, "ready"),
            ProviderStatus::Degraded => write!(f, "degraded"),
        }
    }
}

/// Point-in-time view of the provider for the presentation layer.
///
/// `resorts` is shared with the provider; a later refetch installs a new list
/// without invalidating this one.
#[derive(Debug, Clone)]
pub struct ProviderSnapshot {
    pub status: ProviderStatus,
    pub resorts: Arc<[ResortRecord]>,
    pub error: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl ProviderSnapshot {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == ProviderStatus::Loading
    }
}

/// What a fetch attempt produced before it is installed.
#[derive(Debug)]
enum FetchOutcome {
    Remote(Vec<ResortRecord>),
    /// The API is switched off; serve the fallback list as live data.
    Disabled,
}

struct State {
    status: ProviderStatus,
    resorts: Arc<[ResortRecord]>,
    error: Option<String>,
    loaded_at: Option<DateTime<Utc>>,
    latest_token: u64,
}

fn start_fetch(state: &mut State) -> u64 {
    state.latest_token += 1;
    state.status = ProviderStatus::Loading;
    state.error = None;
    state.latest_token
}

pub struct ResortProvider {
    client: Option<ResortApiClient>,
    fallback: Arc<[ResortRecord]>,
    state: RwLock<State>,
}

impl ResortProvider {
    /// Builds a provider for one session.
    ///
    /// No HTTP client is created when `config.use_fallback` is set, so no
    /// network access can happen.
    ///
    /// # Errors
    ///
    /// Returns [`ResortsError`] if the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, ResortsError> {
        let client = if config.use_fallback {
            None
        } else {
            Some(ResortApiClient::new(config)?)
        };

        Ok(Self {
            client,
            fallback: fallback_resorts().into(),
            state: RwLock::new(State {
                status: ProviderStatus::Idle,
                resorts: Arc::from(Vec::new()),
                error: None,
                loaded_at: None,
                latest_token: 0,
            }),
        })
    }

    /// Appends extra records (e.g. a local dataset file) to the fallback
    /// list. Duplicated ids are kept.
    #[must_use]
    pub fn with_additional_fallback(mut self, extra: Vec<ResortRecord>) -> Self {
        self.fallback = merge_datasets([self.fallback.to_vec(), extra]).into();
        self
    }

    /// The list installed whenever live data is unavailable.
    #[must_use]
    pub fn fallback(&self) -> Arc<[ResortRecord]> {
        Arc::clone(&self.fallback)
    }

    /// Returns the HTTP client, or `None` when the API is disabled.
    #[must_use]
    pub fn client(&self) -> Option<&ResortApiClient> {
        self.client.as_ref()
    }

    /// Performs the initial fetch. Once any fetch has started this is a
    /// no-op that reports the current status; use [`ResortProvider::refetch`]
    /// to fetch again.
    pub async fn load(&self) -> ProviderStatus {
        let token = match self.begin_initial_fetch() {
            Ok(token) => token,
            Err(status) => return status,
        };
        let outcome = self.fetch().await;
        self.finish_fetch(token, outcome)
    }

    /// Fetches the resort list once and installs the result, unless a newer
    /// fetch was started in the meantime.
    pub async fn refetch(&self) -> ProviderStatus {
        let token = self.begin_fetch();
        let outcome = self.fetch().await;
        self.finish_fetch(token, outcome)
    }

    async fn fetch(&self) -> Result<FetchOutcome, ResortsError> {
        match &self.client {
            Some(client) => client.get_all_resorts().await.map(FetchOutcome::Remote),
            None => Ok(FetchOutcome::Disabled),
        }
    }

    /// Enters `Loading` and mints the token for a new fetch.
    fn begin_fetch(&self) -> u64 {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        start_fetch(&mut state)
    }

    /// Like [`ResortProvider::begin_fetch`], but only from `Idle`. The check
    /// and the transition happen under one write lock, so concurrent `load`
    /// calls start a single fetch. Otherwise returns the current status.
    fn begin_initial_fetch(&self) -> Result<u64, ProviderStatus> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.status != ProviderStatus::Idle {
            return Err(state.status);
        }
        Ok(start_fetch(&mut state))
    }

    /// Installs a fetch outcome if `token` is still the latest one.
    fn finish_fetch(&self, token: u64, outcome: Result<FetchOutcome, ResortsError>) -> ProviderStatus {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if token != state.latest_token {
            tracing::debug!(
                token,
                latest = state.latest_token,
                "discarding result of superseded resort fetch"
            );
            return state.status;
        }

        match outcome {
            Ok(FetchOutcome::Remote(resorts)) => {
                tracing::info!(count = resorts.len(), "loaded resorts from API");
                state.status = ProviderStatus::Ready;
                state.resorts = resorts.into();
                state.error = None;
            }
            Ok(FetchOutcome::Disabled) => {
                tracing::info!(
                    count = self.fallback.len(),
                    "API disabled by configuration; serving embedded resorts"
                );
                state.status = ProviderStatus::Ready;
                state.resorts = Arc::clone(&self.fallback);
                state.error = None;
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    kind = ?e.kind(),
                    "failed to fetch resorts from API, using fallback data"
                );
                state.status = ProviderStatus::Degraded;
                state.resorts = Arc::clone(&self.fallback);
                state.error = Some(FALLBACK_ERROR_MESSAGE.to_string());
            }
        }
        state.loaded_at = Some(Utc::now());
        state.status
    }

    #[must_use]
    pub fn snapshot(&self) -> ProviderSnapshot {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        ProviderSnapshot {
            status: state.status,
            resorts: Arc::clone(&state.resorts),
            error: state.error.clone(),
            loaded_at: state.loaded_at,
        }
    }

    #[must_use]
    pub fn status(&self) -> ProviderStatus {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .status
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status() == ProviderStatus::Loading
    }

    #[must_use]
    pub fn resorts(&self) -> Arc<[ResortRecord]> {
        self.snapshot().resorts
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.snapshot().error
    }

    /// Looks up a resort in the working list by id.
    #[must_use]
    pub fn find(&self, resort_id: &str) -> Option<ResortRecord> {
        self.resorts().iter().find(|r| r.id == resort_id).cloned()
    }

    /// Applies the search term and filters to the working list.
    #[must_use]
    pub fn search(&self, search_term: &str, filters: &SearchFilters) -> Vec<ResortRecord> {
        filter_resorts(&self.resorts(), search_term, filters)
    }
}
