//! Core data model definitions shared across Reelview crates.
#![allow(missing_docs)]

pub mod movie;
#[cfg(feature = "serde")]
pub mod response;
#[cfg(feature = "serde")]
mod wire;

pub use movie::{DEFAULT_POSTER_URL, Movie};
#[cfg(feature = "serde")]
pub use response::MovieListResponse;
