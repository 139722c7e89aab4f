use crate::config::Config;
use crate::connectivity::Connectivity;
use crate::domain::Earthquake;
use crate::feed::{parse_feed, FetchError, Fetcher, HttpFetcher};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Fetch then parse, degrading every failure to an empty list
#[derive(Clone)]
pub struct QuakeLoader {
    url: String,
    fetcher: Arc<dyn Fetcher>,
}

impl std::fmt::Debug for QuakeLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuakeLoader").field("url", &self.url).finish_non_exhaustive()
    }
}

impl QuakeLoader {
    pub fn new(url: impl Into<String>, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            url: url.into(),
            fetcher,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(config.timeout)?;
        Ok(Self::new(config.feed_url.clone(), Arc::new(fetcher)))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn load(&self) -> Vec<Earthquake> {
        match self.fetcher.fetch(&self.url).await {
            Ok(document) => {
                let quakes = parse_feed(&document);
                info!(count = quakes.len(), "loaded earthquakes");
                quakes
            }
            Err(e) => {
                warn!(url = %self.url, error = %e, "earthquake feed unavailable");
                Vec::new()
            }
        }
    }
}

/// Result of one load cycle
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Connectivity was down; nothing was fetched
    NoConnection,
    Loaded(Vec<Earthquake>),
}

/// Checks connectivity and only then runs the loader.
pub async fn run_load(connectivity: &dyn Connectivity, loader: &QuakeLoader) -> LoadOutcome {
    if !connectivity.is_connected().await {
        info!("no network connection, skipping load");
        return LoadOutcome::NoConnection;
    }

    LoadOutcome::Loaded(loader.load().await)
}

#[derive(Debug)]
pub enum LoadPoll {
    Waiting,
    Ready(LoadOutcome),
    /// The background task ended without delivering
    Lost,
}

/// A load running in the background whose outcome is delivered once.
///
/// Dropping it discards the outcome when it arrives.
#[derive(Debug)]
pub struct PendingLoad {
    receiver: oneshot::Receiver<LoadOutcome>,
    task: JoinHandle<bool>,
}

impl PendingLoad {
    pub fn spawn(connectivity: Arc<dyn Connectivity>, loader: QuakeLoader) -> Self {
        let (sender, receiver) = oneshot::channel();

        let task = tokio::spawn(async move {
            let outcome = run_load(connectivity.as_ref(), &loader).await;
            if sender.send(outcome).is_err() {
                debug!("load finished after its consumer went away, discarding result");
                return false;
            }
            true
        });

        Self { receiver, task }
    }

    /// Non-blocking check for the outcome.
    pub fn try_take(&mut self) -> LoadPoll {
        match self.receiver.try_recv() {
            Ok(outcome) => LoadPoll::Ready(outcome),
            Err(TryRecvError::Empty) => LoadPoll::Waiting,
            Err(TryRecvError::Closed) => LoadPoll::Lost,
        }
    }

    pub async fn wait(self) -> Option<LoadOutcome> {
        self.receiver.await.ok()
    }

    /// Gives up on the outcome. The returned handle resolves to whether the
    /// task still managed to deliver (always `false` once discarded).
    pub fn discard(self) -> JoinHandle<bool> {
        drop(self.receiver);
        self.task
    }
}
