use crate::normalize::fold_diacritics;

/// Validation state of the typed buffer against the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Correct,
    Mismatched,
}

/// A single typing test against one target sentence.
///
/// The target is diacritic-folded once at construction; keystrokes are
/// compared as typed (case-sensitive, no further folding). `status` is
/// derived from the buffers, so it is consistent after every mutation
/// by construction.
#[derive(Debug)]
pub struct Session {
    target: String,
    typed: Vec<char>,
}

impl Session {
    pub fn new(body: &str) -> Self {
        Self {
            target: fold_diacritics(body),
            typed: Vec::new(),
        }
    }

    /// The folded target sentence shown to the user.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn typed(&self) -> &[char] {
        &self.typed
    }

    pub fn cursor_pos(&self) -> usize {
        self.typed.len()
    }

    pub fn expected_char(&self, idx: usize) -> Option<char> {
        self.target.chars().nth(idx)
    }

    /// Append a keystroke. Input past a completed target is ignored by
    /// the caller; writes after a mismatch are kept so the user can see
    /// the error and backspace over it.
    pub fn write(&mut self, c: char) {
        self.typed.push(c);
    }

    /// Remove the last keystroke; no-op on an empty buffer.
    pub fn backspace(&mut self) {
        self.typed.pop();
    }

    pub fn status(&self) -> Status {
        let mut target = self.target.chars();
        for &typed in &self.typed {
            match target.next() {
                Some(expected) if expected == typed => {}
                // Wrong char, or typed past the end of the target.
                _ => return Status::Mismatched,
            }
        }
        if target.next().is_none() {
            Status::Correct
        } else {
            Status::InProgress
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status() == Status::Correct
    }
}
