//! Message/effect protocol for the browser state machine.
//!
//! The fetch is split in two: [`boot`] returns an [`Effect::FetchMovies`]
//! request, something outside the state machine performs it (see
//! [`crate::loader::DataLoader`]), and the outcome comes back as
//! [`Message::MoviesLoaded`]. [`update`] itself never does I/O.

use reelview_model::Movie;

use crate::state::BrowserState;

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Outcome of the catalog fetch; the error side carries the message
    /// shown to the user.
    MoviesLoaded(Result<Vec<Movie>, String>),
    /// The search box changed. Carries the full new query, not a delta.
    QueryChanged(String),
}

/// Side effects requested by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchMovies,
}

/// Initial state plus the one fetch request of the session.
pub fn boot() -> (BrowserState, Effect) {
    (BrowserState::new().apply_load_started(), Effect::FetchMovies)
}

pub fn update(state: BrowserState, message: Message) -> (BrowserState, Effect) {
    let next = match message {
        Message::MoviesLoaded(Ok(movies)) => state.apply_load_succeeded(movies),
        Message::MoviesLoaded(Err(message)) => state.apply_load_failed(message),
        Message::QueryChanged(query) => state.apply_query_changed(query),
    };

    (next, Effect::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LoadStatus;

    #[test]
    fn boot_requests_exactly_one_fetch() {
        let (state, effect) = boot();
        assert_eq!(effect, Effect::FetchMovies);
        assert!(state.status().is_loading());
    }

    #[test]
    fn messages_never_request_another_fetch() {
        let (state, _) = boot();
        let (state, effect) = update(
            state,
            Message::MoviesLoaded(Err("Failed to load movies".into())),
        );
        assert_eq!(effect, Effect::None);

        let (state, effect) =
            update(state, Message::QueryChanged("jaws".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(
            state.status(),
            &LoadStatus::Failed {
                message: "Failed to load movies".to_string()
            }
        );
    }
}
