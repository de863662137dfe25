use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::sample::Sample;
use crate::session::{Session, Status};

/// Which screen the app is on. Welcome and Typing are interactive;
/// Complete and Aborted end the event loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Typing,
    Complete,
    Aborted,
}

impl Screen {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Screen::Complete | Screen::Aborted)
    }
}

#[derive(Debug)]
pub struct App {
    pub sample: Sample,
    pub session: Session,
    pub screen: Screen,
}

impl App {
    pub fn new(sample: Sample) -> Self {
        let session = Session::new(&sample.body);
        Self {
            sample,
            session,
            screen: Screen::Welcome,
        }
    }

    /// Advance the state machine on one key event.
    ///
    /// Esc and ctrl-c abort from any interactive screen. On the welcome
    /// screen every other key starts the test; while typing, printable
    /// characters and backspace mutate the session, and a fully matched
    /// target completes it.
    pub fn on_key(&mut self, key: KeyEvent) {
        // Complete and Aborted are absorbing.
        if self.screen.is_terminal() {
            return;
        }

        if key.code == KeyCode::Esc
            || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
        {
            self.screen = Screen::Aborted;
            return;
        }

        match self.screen {
            Screen::Welcome => {
                self.screen = Screen::Typing;
            }
            Screen::Typing => match key.code {
                KeyCode::Backspace => {
                    self.session.backspace();
                }
                KeyCode::Char(c) => {
                    self.session.write(c);
                }
                _ => {}
            },
            Screen::Complete | Screen::Aborted => {}
        }

        // Completion is a condition on the session, not on the key that
        // got us here: an already-matched target completes on entering
        // Typing, and backspacing back to equality completes too.
        if self.screen == Screen::Typing && self.session.status() == Status::Correct {
            self.screen = Screen::Complete;
        }
    }

    /// Final message printed on plain stdout after the terminal guard
    /// has restored the screen.
    pub fn final_message(&self) -> String {
        match self.screen {
            Screen::Complete => format!("Well done! You typed: {}", self.session.target()),
            Screen::Aborted => "Typing test aborted.".to_string(),
            Screen::Welcome | Screen::Typing => String::new(),
        }
    }
}
