use crate::app::browser::{open_detail_url, UrlOpener};
use quake_report::connectivity::Connectivity;
use quake_report::{Earthquake, LoadOutcome, LoadPoll, PendingLoad, QuakeLoader};
use std::sync::Arc;
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, info};

pub const NO_CONNECTION_TEXT: &str = "No internet connection.";
pub const EMPTY_STATE_TEXT: &str = "No earthquakes found.";

/// Rows moved by PgUp/PgDn
pub const PAGE_STEP: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    NoConnection,
    Loaded,
}

pub struct App {
    pub running: bool,
    pub load_state: LoadState,
    pub quakes: Vec<Earthquake>,
    pub selected_index: usize,
    pub status_message: String,
    pub show_help: bool,
    pub throbber: ThrobberState,
    pending: Option<PendingLoad>,
    loader: QuakeLoader,
    connectivity: Arc<dyn Connectivity>,
}

impl App {
    pub fn new(loader: QuakeLoader, connectivity: Arc<dyn Connectivity>) -> Self {
        Self {
            running: true,
            load_state: LoadState::Loading,
            quakes: Vec::new(),
            selected_index: 0,
            status_message: String::new(),
            show_help: false,
            throbber: ThrobberState::default(),
            pending: None,
            loader,
            connectivity,
        }
    }

    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a background load unless one is already running.
    ///
    /// The current list is cleared right away; the new one is installed
    /// when the load reports back.
    pub fn start_load(&mut self) {
        if self.is_loading() {
            self.status_message = "Already loading...".to_string();
            return;
        }

        info!(url = self.loader.url(), "starting earthquake load");
        self.quakes.clear();
        self.selected_index = 0;
        self.status_message.clear();
        self.load_state = LoadState::Loading;
        self.pending = Some(PendingLoad::spawn(
            Arc::clone(&self.connectivity),
            self.loader.clone(),
        ));
    }

    /// Installs the load outcome if it has arrived.
    pub fn poll_load(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };

        match pending.try_take() {
            LoadPoll::Waiting => {}
            LoadPoll::Ready(outcome) => {
                self.pending = None;
                self.apply_outcome(outcome);
            }
            LoadPoll::Lost => {
                debug!("load task ended without a result");
                self.pending = None;
                self.apply_outcome(LoadOutcome::Loaded(Vec::new()));
            }
        }
    }

    pub fn apply_outcome(&mut self, outcome: LoadOutcome) {
        self.quakes.clear();
        self.selected_index = 0;
        self.status_message.clear();

        match outcome {
            LoadOutcome::NoConnection => {
                self.load_state = LoadState::NoConnection;
            }
            LoadOutcome::Loaded(quakes) => {
                self.quakes = quakes;
                self.load_state = LoadState::Loaded;
            }
        }
    }

    /// Drops any in-flight load and the current list.
    pub fn reset(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!("discarding in-flight load");
            drop(pending.discard());
        }
        self.quakes.clear();
        self.selected_index = 0;
    }

    pub fn update(&mut self) {
        if self.is_loading() {
            self.throbber.calc_next();
        }
    }

    /// Text shown in place of the list, if any
    pub const fn empty_message(&self) -> Option<&'static str> {
        match self.load_state {
            LoadState::Loading => None,
            LoadState::NoConnection => Some(NO_CONNECTION_TEXT),
            LoadState::Loaded if self.quakes.is_empty() => Some(EMPTY_STATE_TEXT),
            LoadState::Loaded => None,
        }
    }

    pub fn selected_quake(&self) -> Option<&Earthquake> {
        self.quakes.get(self.selected_index)
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.quakes.len() {
            self.selected_index += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(PAGE_STEP);
    }

    pub fn page_down(&mut self) {
        if let Some(last) = self.quakes.len().checked_sub(1) {
            self.selected_index = (self.selected_index + PAGE_STEP).min(last);
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.quakes.len().saturating_sub(1);
    }

    /// Opens the selected earthquake's detail page.
    pub fn open_selected(&mut self, opener: &dyn UrlOpener) {
        let Some(quake) = self.selected_quake() else {
            return;
        };

        self.status_message = match open_detail_url(opener, quake.url()) {
            Ok(url) => format!("Opened {url}"),
            Err(e) => {
                debug!(error = %e, "could not open detail page");
                format!("Error: {e}")
            }
        };
    }
}
