//! Key handling and event sources.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};

/// Path to a scripted input file; replaces the real terminal when set.
pub const SCRIPT_ENV: &str = "REELVIEW_TUI_SCRIPT";
/// Optional file receiving every scripted event as it is replayed.
pub const TRACE_ENV: &str = "REELVIEW_TUI_TRACE";

/// What a key press means to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// The query should become this value.
    Query(String),
    Ignore,
}

/// Interpret `key` against the current query.
///
/// Printable characters append, Backspace removes the last character,
/// Ctrl-U clears. Esc and Ctrl-C quit.
pub fn interpret_key(query: &str, key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('u') if ctrl => {
            if query.is_empty() {
                KeyAction::Ignore
            } else {
                KeyAction::Query(String::new())
            }
        }
        KeyCode::Char(_)
            if ctrl || key.modifiers.contains(KeyModifiers::ALT) =>
        {
            KeyAction::Ignore
        }
        KeyCode::Char(ch) => {
            let mut next = query.to_string();
            next.push(ch);
            KeyAction::Query(next)
        }
        KeyCode::Backspace => {
            let mut next = query.to_string();
            if next.pop().is_some() {
                KeyAction::Query(next)
            } else {
                KeyAction::Ignore
            }
        }
        _ => KeyAction::Ignore,
    }
}

/// Source of terminal events so tests can drive the browser without a tty.
pub trait EventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>>;
    fn is_scripted(&self) -> bool {
        false
    }
}

#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Scripted events from a line-oriented DSL:
///   type:<text>|backspace|ctrl-u|ctrl-c|esc|tick
/// `tick` yields one empty poll so pending messages can arrive. Lines
/// beginning with # and blank lines are skipped. Once the script runs out
/// the source fails instead of hanging.
#[derive(Debug)]
pub struct ScriptEventSource {
    events: Vec<Option<Event>>,
    cursor: usize,
    exhausted_at: Option<Instant>,
    trace: Option<File>,
}

impl ScriptEventSource {
    pub fn parse(script: &str) -> Result<Self> {
        let mut events = Vec::new();
        for (idx, raw) in script.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let key = |code: KeyCode, modifiers: KeyModifiers| {
                Some(Event::Key(KeyEvent::new(code, modifiers)))
            };

            match line {
                "backspace" => {
                    events.push(key(KeyCode::Backspace, KeyModifiers::NONE))
                }
                "ctrl-u" => {
                    events.push(key(KeyCode::Char('u'), KeyModifiers::CONTROL))
                }
                "ctrl-c" => {
                    events.push(key(KeyCode::Char('c'), KeyModifiers::CONTROL))
                }
                "esc" | "quit" => {
                    events.push(key(KeyCode::Esc, KeyModifiers::NONE))
                }
                "tick" => events.push(None),
                _ => {
                    let Some(text) = raw.trim_start().strip_prefix("type:")
                    else {
                        return Err(anyhow!(
                            "unrecognized TUI script token at line {}: {}",
                            idx + 1,
                            line
                        ));
                    };
                    events.extend(
                        text.chars()
                            .map(|ch| key(KeyCode::Char(ch), KeyModifiers::NONE)),
                    );
                }
            }
        }

        Ok(Self {
            events,
            cursor: 0,
            exhausted_at: None,
            trace: None,
        })
    }

    pub fn from_path(path: PathBuf, trace_path: Option<PathBuf>) -> Result<Self> {
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("read scripted TUI input {}", path.display()))?;
        let mut source = Self::parse(&contents)?;
        source.trace = trace_path
            .map(|p| File::create(p).context("create tui trace file"))
            .transpose()?;
        Ok(source)
    }

    pub fn remaining(&self) -> usize {
        self.events.len().saturating_sub(self.cursor)
    }
}

impl EventSource for ScriptEventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if self.cursor >= self.events.len() {
            match self.exhausted_at {
                Some(at) if at.elapsed() > Duration::from_secs(1) => {
                    return Err(anyhow!(
                        "scripted TUI input exhausted before the browser quit"
                    ));
                }
                Some(_) => {}
                None => self.exhausted_at = Some(Instant::now()),
            }
            std::thread::sleep(Duration::from_millis(25));
            return Ok(None);
        }

        let ev = self.events[self.cursor].clone();
        self.cursor += 1;

        if let Some(trace) = self.trace.as_mut() {
            let _ = writeln!(trace, "{:?}", ev);
        }

        if ev.is_none() {
            std::thread::sleep(timeout.min(Duration::from_millis(25)));
        }
        Ok(ev)
    }

    fn is_scripted(&self) -> bool {
        true
    }
}

pub fn event_source_from_env() -> Result<Box<dyn EventSource>> {
    if let Some(path) = std::env::var_os(SCRIPT_ENV) {
        let trace = std::env::var_os(TRACE_ENV).map(PathBuf::from);
        let source = ScriptEventSource::from_path(PathBuf::from(path), trace)?;
        Ok(Box::new(source))
    } else {
        Ok(Box::new(CrosstermEventSource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn characters_append_to_query() {
        assert_eq!(
            interpret_key("ja", key(KeyCode::Char('w'))),
            KeyAction::Query("jaw".into())
        );
        assert_eq!(
            interpret_key("", key(KeyCode::Char(' '))),
            KeyAction::Query(" ".into())
        );
    }

    #[test]
    fn backspace_removes_last_character() {
        assert_eq!(
            interpret_key("jaws", key(KeyCode::Backspace)),
            KeyAction::Query("jaw".into())
        );
        assert_eq!(
            interpret_key("amélie", key(KeyCode::Backspace)),
            KeyAction::Query("améli".into())
        );
        assert_eq!(interpret_key("", key(KeyCode::Backspace)), KeyAction::Ignore);
    }

    #[test]
    fn ctrl_u_clears_query() {
        assert_eq!(interpret_key("heat", ctrl('u')), KeyAction::Query(String::new()));
        assert_eq!(interpret_key("", ctrl('u')), KeyAction::Ignore);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(interpret_key("x", key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(interpret_key("x", ctrl('c')), KeyAction::Quit);
    }

    #[test]
    fn other_chords_and_releases_are_ignored() {
        assert_eq!(interpret_key("x", ctrl('a')), KeyAction::Ignore);
        assert_eq!(
            interpret_key("x", KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT)),
            KeyAction::Ignore
        );

        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(interpret_key("x", release), KeyAction::Ignore);
        assert_eq!(interpret_key("x", key(KeyCode::Up)), KeyAction::Ignore);
    }

    #[test]
    fn script_expands_typed_text_and_ticks() {
        let source = ScriptEventSource::parse(
            "# search for jaws\ntick\ntype:ja ws\nbackspace\n\nesc\n",
        )
        .unwrap();
        assert_eq!(source.remaining(), 1 + 5 + 1 + 1);
    }

    #[test]
    fn script_rejects_unknown_tokens() {
        let err = ScriptEventSource::parse("type:a\nscroll-down").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn scripted_source_replays_in_order() {
        let mut source = ScriptEventSource::parse("type:ab\ntick\nesc").unwrap();
        let timeout = Duration::from_millis(1);

        let codes: Vec<Option<KeyCode>> = (0..4)
            .map(|_| match source.next(timeout).unwrap() {
                Some(Event::Key(key)) => Some(key.code),
                _ => None,
            })
            .collect();
        assert_eq!(
            codes,
            [
                Some(KeyCode::Char('a')),
                Some(KeyCode::Char('b')),
                None,
                Some(KeyCode::Esc)
            ]
        );
        assert_eq!(source.remaining(), 0);
    }
}
