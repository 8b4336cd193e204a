//! Keyboard protocol.
//!
//! | Chord | Command |
//! |---|---|
//! | Primary+Enter | advance, or create a panel on the last one |
//! | Primary+Shift+Enter | always create a panel |
//! | Primary+Z | undo |
//! | Primary+Shift+Z, Primary+Y | redo |
//!
//! Primary is Ctrl on standard platforms and Cmd (meta) on mac.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Char(char),
}

/// A key plus the modifiers held with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyChord {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Standard,
    Mac,
}

/// What a chord asks the editor to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    /// Next panel if there is one, otherwise (by policy) a new panel
    AdvanceOrCreate,
    /// New panel regardless of position
    ForceNewPanel,
    Undo,
    Redo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Keymap {
    platform: Platform,
}

impl Keymap {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn resolve(&self, chord: &KeyChord) -> Option<EditorCommand> {
        let primary = match self.platform {
            Platform::Standard => chord.ctrl,
            Platform::Mac => chord.meta,
        };
        if !primary {
            return None;
        }

        match chord.key {
            Key::Enter if chord.shift => Some(EditorCommand::ForceNewPanel),
            Key::Enter => Some(EditorCommand::AdvanceOrCreate),
            Key::Char(c) => match c.to_ascii_lowercase() {
                'z' if chord.shift => Some(EditorCommand::Redo),
                'z' => Some(EditorCommand::Undo),
                'y' => Some(EditorCommand::Redo),
                _ => None,
            },
        }
    }
}
