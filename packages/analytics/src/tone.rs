//! Emotional tone from fixed word lists.
//!
//! A list matches when any of its words occurs anywhere in the lower-cased
//! text, including inside longer words ("die" matches "diet"). Lists are
//! checked in priority order: aggression, negative, positive.

use serde::Serialize;
use std::fmt;

pub const AGGRESSION_WORDS: &[&str] = &[
    "kill", "destroy", "hate", "attack", "fight", "murder", "rage", "smash", "crush", "revenge",
    "punch", "strike",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "sad", "dark", "die", "dead", "death", "cry", "tears", "fear", "alone", "pain", "lost", "grief",
    "blood",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "love", "happy", "joy", "smile", "hope", "laugh", "bright", "warm", "peace", "friend",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tone {
    Neutral,
    Positive,
    Dark,
    Aggressive,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Neutral => "Neutral",
            Tone::Positive => "Positive",
            Tone::Dark => "Dark",
            Tone::Aggressive => "Aggressive",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn tone(text: &str) -> Tone {
    let lowered = text.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|word| lowered.contains(word));

    if mentions(AGGRESSION_WORDS) {
        Tone::Aggressive
    } else if mentions(NEGATIVE_WORDS) {
        Tone::Dark
    } else if mentions(POSITIVE_WORDS) {
        Tone::Positive
    } else {
        Tone::Neutral
    }
}
