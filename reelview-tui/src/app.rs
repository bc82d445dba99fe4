//! Event loop wiring the browser state machine to the terminal.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::Event;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use reelview_core::update::{self, Effect, Message};
use reelview_core::{
    BrowserConfig, BrowserState, ConfigError, DataLoader, HttpMovieSource,
};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::input::{self, EventSource, KeyAction};
use crate::view;

const TICK: Duration = Duration::from_millis(100);

/// Owns the browser state on the UI thread.
#[derive(Debug, Default)]
pub struct App {
    state: BrowserState,
    quit: bool,
}

impl App {
    pub fn new(state: BrowserState) -> Self {
        Self { state, quit: false }
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Feed one message through [`update::update`], keeping the new state.
    pub fn dispatch(&mut self, message: Message) -> Effect {
        let state = std::mem::take(&mut self.state);
        let (next, effect) = update::update(state, message);
        self.state = next;
        effect
    }

    /// Translate a terminal event into a query change, if it is one.
    pub fn handle_event(&mut self, event: Event) -> Option<Message> {
        let Event::Key(key) = event else {
            return None;
        };

        match input::interpret_key(self.state.query(), key) {
            KeyAction::Quit => {
                self.quit = true;
                None
            }
            KeyAction::Query(query) => Some(Message::QueryChanged(query)),
            KeyAction::Ignore => None,
        }
    }
}

/// Drive `app` until it asks to quit.
///
/// Messages from `inbox` (load outcomes) are applied before every frame;
/// effects produced along the way are handed to `perform`.
pub fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut dyn EventSource,
    inbox: &mut UnboundedReceiver<Message>,
    perform: &mut dyn FnMut(Effect),
) -> Result<()> {
    loop {
        while let Ok(message) = inbox.try_recv() {
            perform(app.dispatch(message));
        }

        terminal.draw(|frame| view::render(frame, app.state()))?;

        if app.should_quit() {
            return Ok(());
        }

        if let Some(event) = events.next(TICK)?
            && let Some(message) = app.handle_event(event)
        {
            perform(app.dispatch(message));
        }
    }
}

/// Build the loader for `config`.
///
/// Setup failures come back as the message the browser shows in place of
/// the catalog.
pub fn connect(
    config: Result<BrowserConfig, ConfigError>,
) -> Result<Arc<DataLoader>, String> {
    let config = config
        .map_err(|err| format!("Failed to reach movie service: {err}"))?;
    let source = HttpMovieSource::new(&config).map_err(|err| err.to_string())?;
    Ok(Arc::new(DataLoader::new(Arc::new(source))))
}

/// Boot the browser state for a connection attempt.
///
/// Returns the app, the loader when there is one, and the effect still to
/// perform. A failed setup lands the app directly in the failed state.
pub fn start(
    setup: Result<Arc<DataLoader>, String>,
) -> (App, Option<Arc<DataLoader>>, Effect) {
    let (state, effect) = update::boot();
    let mut app = App::new(state);

    match setup {
        Ok(loader) => (app, Some(loader), effect),
        Err(message) => {
            log::error!("[App] Browser setup failed: {}", message);
            let effect = app.dispatch(Message::MoviesLoaded(Err(message)));
            (app, None, effect)
        }
    }
}

/// Runs its restore hook when dropped.
struct TerminalGuard {
    restore: Option<Box<dyn FnOnce()>>,
}

impl TerminalGuard {
    fn new(restore: impl FnOnce() + 'static) -> Self {
        Self {
            restore: Some(Box::new(restore)),
        }
    }

    fn disarmed() -> Self {
        Self { restore: None }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        log::warn!("[App] Failed to disable raw mode: {}", err);
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
        log::warn!("[App] Failed to leave alternate screen: {}", err);
    }
}

fn enter_terminal() -> Result<TerminalGuard> {
    enable_raw_mode().context("enable raw mode")?;
    let guard = TerminalGuard::new(restore_terminal);
    execute!(io::stdout(), EnterAlternateScreen)
        .context("enter alternate screen")?;
    Ok(guard)
}

/// Run the browser against the configured backend.
pub fn run(config: Result<BrowserConfig, ConfigError>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("build tokio runtime")?;

    let (sender, mut inbox) = mpsc::unbounded_channel();
    let (mut app, loader, boot_effect) = start(connect(config));
    let mut perform = |effect: Effect| {
        if let Some(loader) = &loader {
            let _ = loader.perform(effect, runtime.handle(), sender.clone());
        }
    };
    perform(boot_effect);

    let mut events = input::event_source_from_env()?;
    let guard = if events.is_scripted() {
        TerminalGuard::disarmed()
    } else {
        enter_terminal()?
    };

    let result = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("create terminal")
        .and_then(|mut terminal| {
            run_loop(
                &mut terminal,
                &mut app,
                &mut *events,
                &mut inbox,
                &mut perform,
            )
        });
    drop(guard);

    // An in-flight load has nowhere to go now.
    drop(inbox);
    runtime.shutdown_background();
    log::info!("[App] Browser closed");

    result
}
