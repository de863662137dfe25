use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Unified event type consumed by the app runner.
#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
}

/// Source of terminal events (keyboard, resize). The production source
/// blocks on the terminal; test sources replay a script, which keeps
/// the interactive loop drivable without a TTY.
pub trait EventSource {
    /// Block until the next event is available.
    fn next(&mut self) -> io::Result<AppEvent>;
}

/// Production event source reading crossterm events on the calling
/// thread. No background reader: the whole program is sequential and
/// the key-read is its only suspension point besides the fetch.
#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next(&mut self) -> io::Result<AppEvent> {
        loop {
            match event::read()? {
                CtEvent::Key(key) => return Ok(AppEvent::Key(key)),
                CtEvent::Resize(_, _) => return Ok(AppEvent::Resize),
                _ => {}
            }
        }
    }
}

/// Scripted event source for unit and headless integration tests.
#[derive(Debug, Default)]
pub struct TestEventSource {
    events: VecDeque<AppEvent>,
}

impl TestEventSource {
    pub fn new(events: impl IntoIterator<Item = AppEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: AppEvent) {
        self.events.push_back(event);
    }
}

impl EventSource for TestEventSource {
    fn next(&mut self) -> io::Result<AppEvent> {
        self.events.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "test event script exhausted")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_scripted_events_replay_in_order() {
        let mut source = TestEventSource::new([
            AppEvent::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)),
            AppEvent::Resize,
        ]);

        match source.next().unwrap() {
            AppEvent::Key(key) => assert_eq!(key.code, KeyCode::Char('a')),
            other => panic!("expected key event, got {:?}", other),
        }
        assert!(matches!(source.next().unwrap(), AppEvent::Resize));
    }

    #[test]
    fn test_exhausted_script_is_an_error() {
        let mut source = TestEventSource::default();
        let err = source.next().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_push_extends_the_script() {
        let mut source = TestEventSource::default();
        source.push(AppEvent::Resize);
        assert!(matches!(source.next().unwrap(), AppEvent::Resize));
    }
}
