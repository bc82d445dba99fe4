//! Terminal front-end for the Reelview movie browser.
//!
//! Renders the state owned by `reelview-core` and pushes query edits back
//! as messages. No behavior lives here beyond key handling and layout.

pub mod app;
pub mod input;
pub mod logging;
pub mod view;
