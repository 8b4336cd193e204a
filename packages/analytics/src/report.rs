//! Combined per-panel analytics.

use crate::drift::{drift, Drift};
use crate::signals::{char_count, density, intensity, word_count, Density, Intensity};
use crate::tone::{tone, Tone};
use serde::Serialize;

/// The three classifications drift compares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Signals {
    pub tone: Tone,
    pub intensity: Intensity,
    pub density: Density,
}

impl Signals {
    pub fn of(text: &str) -> Self {
        Self {
            tone: tone(text),
            intensity: intensity(text),
            density: density(text),
        }
    }
}

/// Everything the analytics surface shows for one panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelReport {
    pub tone: Tone,
    pub intensity: Intensity,
    pub density: Density,
    pub drift: Drift,
    pub word_count: usize,
    pub char_count: usize,
}

impl PanelReport {
    /// Analyze `current`, comparing against `previous` for drift
    pub fn analyze(previous: Option<&str>, current: &str, is_first_panel: bool) -> Self {
        let signals = Signals::of(current);
        Self {
            tone: signals.tone,
            intensity: signals.intensity,
            density: signals.density,
            drift: drift(previous, current, is_first_panel),
            word_count: word_count(current),
            char_count: char_count(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_first_panel() {
        let report = PanelReport::analyze(None, "I love you", true);
        assert_eq!(report.tone, Tone::Positive);
        assert_eq!(report.intensity, Intensity::Low);
        assert_eq!(report.density, Density::Light);
        assert_eq!(report.drift, Drift::Start);
        assert_eq!(report.word_count, 3);
        assert_eq!(report.char_count, 10);
    }

    #[test]
    fn test_report_serializes_labels() {
        let report = PanelReport::analyze(Some("I love you"), "I will kill you!!!", false);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["tone"], "Aggressive");
        assert_eq!(json["drift"], "Sharp Shift");
        assert_eq!(json["wordCount"], 4);
    }
}
