//! Punctuation-derived intensity and length-derived density.
//!
//! `word_count` is the single definition of a word used by `density`, so the
//! two can never disagree when shown side by side.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Low => "Low",
            Intensity::Medium => "Medium",
            Intensity::High => "High",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Density {
    Empty,
    Light,
    Dense,
    Heavy,
}

impl Density {
    pub fn as_str(self) -> &'static str {
        match self {
            Density::Empty => "Empty",
            Density::Light => "Light",
            Density::Dense => "Dense",
            Density::Heavy => "Heavy",
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `!` and `?` each add one; above 3 is High, above 1 is Medium
pub fn intensity(text: &str) -> Intensity {
    let score = text.chars().filter(|c| matches!(c, '!' | '?')).count();

    if score > 3 {
        Intensity::High
    } else if score > 1 {
        Intensity::Medium
    } else {
        Intensity::Low
    }
}

/// Above 80 words is Heavy, above 40 is Dense
pub fn density(text: &str) -> Density {
    match word_count(text) {
        0 => Density::Empty,
        words if words > 80 => Density::Heavy,
        words if words > 40 => Density::Dense,
        _ => Density::Light,
    }
}

/// Whitespace-separated tokens; zero for blank text
pub fn word_count(text: &str) -> usize {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.split_whitespace().count()
}

/// Unicode scalar values, whitespace included
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
