//! Immutable browser state and its transitions.
//!
//! Each `apply_*` consumes the current value and returns the next one. The
//! load lifecycle is `Loading -> Ready` or `Loading -> Failed`; once
//! terminal, later load transitions are ignored.

use std::sync::Arc;

use reelview_model::Movie;

use crate::catalog::CatalogView;

/// Lifecycle of the one catalog load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Failed {
        message: String,
    },
    Ready,
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    /// `Ready` and `Failed` are final for the lifetime of the browser.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// What the presentation layer should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserView<'a> {
    Loading,
    Failed(&'a str),
    Ready(CatalogView<'a>),
}

/// Top-level browser state: load status, the loaded catalog, and the
/// current query.
#[derive(Debug, Clone)]
pub struct BrowserState {
    status: LoadStatus,
    movies: Arc<[Movie]>,
    query: String,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserState {
    pub fn new() -> Self {
        Self {
            status: LoadStatus::Loading,
            movies: Arc::from(Vec::new()),
            query: String::new(),
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// The full catalog in backend order. Empty until the load succeeds.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// The raw query as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn apply_load_started(self) -> Self {
        if self.status.is_terminal() {
            log::debug!(
                "[Browser] Ignoring load start; status already {:?}",
                self.status
            );
            return self;
        }

        Self {
            status: LoadStatus::Loading,
            ..self
        }
    }

    pub fn apply_load_succeeded(self, movies: Vec<Movie>) -> Self {
        if self.status.is_terminal() {
            log::warn!(
                "[Browser] Dropping late catalog of {} movies; status already {:?}",
                movies.len(),
                self.status
            );
            return self;
        }

        log::info!("[Browser] Catalog ready: movies={}", movies.len());
        Self {
            status: LoadStatus::Ready,
            movies: Arc::from(movies),
            ..self
        }
    }

    pub fn apply_load_failed(self, message: impl Into<String>) -> Self {
        let message = message.into();
        if self.status.is_terminal() {
            log::warn!(
                "[Browser] Dropping late load failure '{}'; status already {:?}",
                message,
                self.status
            );
            return self;
        }

        log::warn!("[Browser] Catalog load failed: {}", message);
        Self {
            status: LoadStatus::Failed { message },
            ..self
        }
    }

    pub fn apply_query_changed(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self
        }
    }

    /// Derive the current view. Filtering only runs once the catalog is
    /// ready.
    pub fn view(&self) -> BrowserView<'_> {
        match &self.status {
            LoadStatus::Loading => BrowserView::Loading,
            LoadStatus::Failed { message } => BrowserView::Failed(message),
            LoadStatus::Ready => BrowserView::Ready(CatalogView::derive(
                &self.movies,
                &self.query,
            )),
        }
    }

    /// Shorthand for the ready branch of [`BrowserState::view`].
    pub fn catalog(&self) -> Option<CatalogView<'_>> {
        match self.view() {
            BrowserView::Ready(view) => Some(view),
            _ => None,
        }
    }
}
