//! # Reelview Core
//!
//! Catalog loading and query filtering for the Reelview movie browser.
//!
//! ## Overview
//!
//! The browser fetches one movie list from a backend, then lets the user
//! narrow it with a free-text query. Everything with a behavioral contract
//! lives here; the terminal front-end only renders what this crate derives.
//!
//! - [`config`]: backend address resolution (`BACKEND_URL`)
//! - [`source`]: the [`MovieSource`] transport seam and its HTTP implementation
//! - [`loader`]: the one-shot [`DataLoader`] that performs the fetch effect
//! - [`state`]: the immutable [`BrowserState`] and its pure transitions
//! - [`update`]: message/effect protocol driving the state machine
//! - [`catalog`]: query normalization, filtering, and section partitioning
//!
//! ## Examples
//!
//! ```
//! use reelview_core::{Message, Section, update};
//! use reelview_core::update::Effect;
//! use reelview_model::Movie;
//!
//! let (state, effect) = update::boot();
//! assert_eq!(effect, Effect::FetchMovies);
//!
//! let movies = vec![
//!     Movie::new("Parasite").with_year("2019"),
//!     Movie::new("Jaws").with_year("1975"),
//! ];
//! let (state, _) = update::update(state, Message::MoviesLoaded(Ok(movies)));
//! let (state, _) =
//!     update::update(state, Message::QueryChanged("19".to_string()));
//!
//! // "19" is a substring of both "2019" and "1975".
//! let view = state.catalog().expect("catalog is ready");
//! let trending = view.sections().get(Section::TrendingNow);
//! assert_eq!(trending.len(), 2);
//!
//! let (state, _) =
//!     update::update(state, Message::QueryChanged("201".to_string()));
//! let view = state.catalog().expect("catalog is ready");
//! let trending = view.sections().get(Section::TrendingNow);
//! assert_eq!(trending.len(), 1);
//! assert_eq!(trending[0].title(), "Parasite");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod source;
pub mod state;
pub mod update;

pub use catalog::{CatalogView, Searchable, Section, Sections};
pub use config::BrowserConfig;
pub use error::{ConfigError, LoadError};
pub use loader::DataLoader;
pub use source::{HttpMovieSource, MovieSource};
pub use state::{BrowserState, BrowserView, LoadStatus};
pub use update::{Effect, Message};

pub use reelview_model::{DEFAULT_POSTER_URL, Movie};
