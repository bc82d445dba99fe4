//! Performs the fetch effect, at most once.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::source::MovieSource;
use crate::update::{Effect, Message};

/// One-shot catalog loader.
///
/// The first [`DataLoader::load`] issues the request; any later call is a
/// no-op that returns `None`. There is no retry and no cancellation.
#[derive(Debug)]
pub struct DataLoader {
    source: Arc<dyn MovieSource>,
    started: AtomicBool,
}

impl DataLoader {
    pub fn new(source: Arc<dyn MovieSource>) -> Self {
        Self {
            source,
            started: AtomicBool::new(false),
        }
    }

    pub fn has_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Fetch the catalog and fold the outcome into a message.
    ///
    /// Every failure kind collapses to its display text here.
    pub async fn load(&self) -> Option<Message> {
        if self.started.swap(true, Ordering::SeqCst) {
            log::debug!("[Loader] Catalog load already issued; skipping");
            return None;
        }

        log::info!("[Loader] Requesting movie catalog");
        let now = Instant::now();
        let outcome = match self.source.fetch_movies().await {
            Ok(movies) => {
                log::info!(
                    "[Loader] Catalog loaded: movies={} elapsed={:?}",
                    movies.len(),
                    now.elapsed()
                );
                Ok(movies)
            }
            Err(err) => {
                log::warn!("[Loader] Catalog load failed: {:?}", err);
                Err(err.to_string())
            }
        };

        Some(Message::MoviesLoaded(outcome))
    }

    /// Run `effect` on `runtime`, delivering the resulting message to
    /// `sender`.
    ///
    /// If the receiver is gone by the time the fetch completes the message
    /// is dropped.
    pub fn perform(
        self: &Arc<Self>,
        effect: Effect,
        runtime: &Handle,
        sender: UnboundedSender<Message>,
    ) -> Option<JoinHandle<()>> {
        match effect {
            Effect::None => None,
            Effect::FetchMovies => {
                let loader = Arc::clone(self);
                Some(runtime.spawn(async move {
                    if let Some(message) = loader.load().await
                        && sender.send(message).is_err()
                    {
                        log::debug!(
                            "[Loader] Browser closed before catalog arrived; discarding"
                        );
                    }
                }))
            }
        }
    }
}
