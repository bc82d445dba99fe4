//! Load lifecycle driven through an in-memory movie source.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reelview_core::update::{self, Effect, Message};
use reelview_core::{
    BrowserView, DataLoader, LoadError, LoadStatus, MovieSource, Section,
};
use reelview_model::{DEFAULT_POSTER_URL, Movie};
use reqwest::StatusCode;

#[derive(Debug)]
enum Canned {
    Movies(Vec<Movie>),
    Status(StatusCode),
}

#[derive(Debug)]
struct FakeSource {
    canned: Canned,
    calls: AtomicUsize,
}

impl FakeSource {
    fn movies(movies: Vec<Movie>) -> Arc<Self> {
        Arc::new(Self {
            canned: Canned::Movies(movies),
            calls: AtomicUsize::new(0),
        })
    }

    fn status(status: StatusCode) -> Arc<Self> {
        Arc::new(Self {
            canned: Canned::Status(status),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MovieSource for FakeSource {
    async fn fetch_movies(&self) -> Result<Vec<Movie>, LoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.canned {
            Canned::Movies(movies) => Ok(movies.clone()),
            Canned::Status(status) => Err(LoadError::Status { status: *status }),
        }
    }
}

fn parasite_and_jaws() -> Vec<Movie> {
    vec![
        Movie::new("Parasite").with_year("2019"),
        Movie::new("Jaws").with_year("1975"),
    ]
}

#[tokio::test]
async fn successful_load_fills_trending_now_in_order() {
    let source = FakeSource::movies(parasite_and_jaws());
    let loader = DataLoader::new(source.clone());

    let (state, effect) = update::boot();
    assert_eq!(effect, Effect::FetchMovies);
    assert_eq!(state.view(), BrowserView::Loading);

    let message = loader.load().await.expect("first load yields a message");
    let (state, effect) = update::update(state, message);
    assert_eq!(effect, Effect::None);
    assert_eq!(state.status(), &LoadStatus::Ready);

    let view = state.catalog().expect("ready");
    let sections = view.sections();
    let trending: Vec<_> = sections
        .get(Section::TrendingNow)
        .iter()
        .map(|movie| movie.title())
        .collect();
    assert_eq!(trending, ["Parasite", "Jaws"]);
    assert!(sections.get(Section::CriticsPicks).is_empty());
    assert!(sections.get(Section::Classics).is_empty());
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn http_500_surfaces_an_error_and_no_sections() {
    let loader = DataLoader::new(FakeSource::status(
        StatusCode::INTERNAL_SERVER_ERROR,
    ));

    let (state, _) = update::boot();
    let message = loader.load().await.expect("message");
    let (state, _) = update::update(state, message);

    match state.view() {
        BrowserView::Failed(message) => {
            assert_eq!(
                message,
                "Failed to load movies (HTTP 500 Internal Server Error)"
            );
        }
        other => panic!("expected Failed, got {:?}", other),
    }
    assert!(state.catalog().is_none());
}

#[tokio::test]
async fn second_load_issues_no_request() {
    let source = FakeSource::movies(parasite_and_jaws());
    let loader = DataLoader::new(source.clone());

    assert!(!loader.has_started());
    assert!(loader.load().await.is_some());
    assert!(loader.has_started());
    assert!(loader.load().await.is_none());
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn perform_delivers_the_outcome_over_the_channel() {
    let loader = Arc::new(DataLoader::new(FakeSource::movies(parasite_and_jaws())));
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let handle = loader
        .perform(Effect::FetchMovies, &tokio::runtime::Handle::current(), tx)
        .expect("fetch effect spawns a task");
    handle.await.expect("loader task");

    match rx.recv().await {
        Some(Message::MoviesLoaded(Ok(movies))) => {
            assert_eq!(movies, parasite_and_jaws())
        }
        other => panic!("unexpected message: {:?}", other),
    }
}

#[tokio::test]
async fn perform_ignores_the_none_effect() {
    let source = FakeSource::movies(Vec::new());
    let loader = Arc::new(DataLoader::new(source.clone()));
    let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();

    let handle =
        loader.perform(Effect::None, &tokio::runtime::Handle::current(), tx);
    assert!(handle.is_none());
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn closed_receiver_discards_the_result() {
    let source = FakeSource::movies(parasite_and_jaws());
    let loader = Arc::new(DataLoader::new(source.clone()));
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    drop(rx);

    let handle = loader
        .perform(Effect::FetchMovies, &tokio::runtime::Handle::current(), tx)
        .expect("spawned");
    handle.await.expect("task completes without panicking");
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn query_filters_after_load_and_missing_fields_default() {
    let movies = vec![
        Movie::new("Parasite").with_year("2019"),
        Movie::new("Jaws").with_year("1975"),
        Movie::new("Metropolis"),
    ];
    let loader = DataLoader::new(FakeSource::movies(movies));

    let (state, _) = update::boot();
    let (state, _) = update::update(state, loader.load().await.expect("message"));
    let (state, _) = update::update(state, Message::QueryChanged("201".into()));

    let view = state.catalog().expect("ready");
    let titles: Vec<_> = view.matches().iter().map(|m| m.title()).collect();
    assert_eq!(titles, ["Parasite"]);

    let (state, _) = update::update(state, Message::QueryChanged("19".into()));
    let view = state.catalog().expect("ready");
    let titles: Vec<_> = view.matches().iter().map(|m| m.title()).collect();
    assert_eq!(titles, ["Parasite", "Jaws"]);

    let (state, _) = update::update(state, Message::QueryChanged(String::new()));
    let view = state.catalog().expect("ready");
    let metropolis = view.matches()[2];
    assert_eq!(metropolis.year(), None);
    assert_eq!(metropolis.poster_url(), DEFAULT_POSTER_URL);
}
