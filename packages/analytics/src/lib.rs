//! # Storyline Analytics
//!
//! Narrative signals derived from panel text alone.
//!
//! Every function here is pure and deterministic: the same text always
//! yields the same labels, and nothing is cached or stored. Matching is
//! case-insensitive substring search against fixed word lists; there is no
//! tokenizer and no model.
//!
//! ```rust
//! use storyline_analytics::{drift, tone, Drift, Tone};
//!
//! assert_eq!(tone("I will destroy you, I love you"), Tone::Aggressive);
//! assert_eq!(drift(Some("I love you"), "I will kill you!!!", false), Drift::SharpShift);
//! ```

mod drift;
mod report;
mod signals;
mod tone;

pub use drift::{drift, drift_score, Drift};
pub use report::{PanelReport, Signals};
pub use signals::{char_count, density, intensity, word_count, Density, Intensity};
pub use tone::{tone, Tone, AGGRESSION_WORDS, NEGATIVE_WORDS, POSITIVE_WORDS};
