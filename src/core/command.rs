//! # Command Line Capture
//!
//! While command mode is active every key token is appended verbatim to a
//! buffer. Nothing parses or executes the buffer yet; it is only shown in the
//! footer. A cancel token ends capture and discards everything.

/// Key tokens that leave command mode.
pub const CANCEL_KEYS: [&str; 2] = ["esc", "ctrl+c"];

/// The key that opens command mode from browsing.
pub const COMMAND_KEY: &str = ":";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Token was appended; still capturing.
    Continue,
    /// Cancel token seen; the buffer has been cleared.
    Cancelled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    buffer: String,
}

impl CommandLine {
    /// Start a capture, seeded with the key that opened it.
    pub fn open() -> Self {
        Self {
            buffer: COMMAND_KEY.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn capture(&mut self, token: &str) -> Capture {
        self.buffer.push_str(token);
        if CANCEL_KEYS.contains(&token) {
            self.buffer.clear();
            return Capture::Cancelled;
        }
        Capture::Continue
    }
}
