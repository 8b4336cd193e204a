//! How far a panel moves away from the one before it.
//!
//! Score = 2 for a tone change, plus 1 each for intensity and density
//! changes. 0 is Stable, 1..=2 is a gradual shift, 3 and up is sharp.

use crate::report::Signals;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Drift {
    Start,
    Stable,
    #[serde(rename = "Gradual Shift")]
    GradualShift,
    #[serde(rename = "Sharp Shift")]
    SharpShift,
}

impl Drift {
    pub fn as_str(self) -> &'static str {
        match self {
            Drift::Start => "Start",
            Drift::Stable => "Stable",
            Drift::GradualShift => "Gradual Shift",
            Drift::SharpShift => "Sharp Shift",
        }
    }

    fn from_score(score: u8) -> Drift {
        match score {
            0 => Drift::Stable,
            1..=2 => Drift::GradualShift,
            _ => Drift::SharpShift,
        }
    }
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted difference between two panels' signals
pub fn drift_score(previous: &str, current: &str) -> u8 {
    let before = Signals::of(previous);
    let after = Signals::of(current);

    let mut score = 0;
    if before.tone != after.tone {
        score += 2;
    }
    if before.intensity != after.intensity {
        score += 1;
    }
    if before.density != after.density {
        score += 1;
    }
    score
}

/// Drift of `current` relative to the panel before it
///
/// The first panel of a page, or one with no predecessor, is always `Start`.
pub fn drift(previous: Option<&str>, current: &str, is_first_panel: bool) -> Drift {
    match previous {
        Some(previous) if !is_first_panel => Drift::from_score(drift_score(previous, current)),
        _ => Drift::Start,
    }
}
