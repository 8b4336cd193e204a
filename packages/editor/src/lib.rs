//! # Storyline Editor
//!
//! Editing engine for Storyline story documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ presentation: keys, clicks, text fields     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditorController                    │
//! │  - Edits → document transforms              │
//! │  - Snapshot history (undo/redo)             │
//! │  - Cursor kept valid across edits           │
//! │  - Keyboard protocol                        │
//! └─────────────────────────────────────────────┘
//!           ↓                        ↓
//! ┌──────────────────────┐ ┌────────────────────┐
//! │ document: tree+cursor│ │ analytics: signals │
//! └──────────────────────┘ └────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **History `present` is the source of truth**: nothing else is rendered
//! 2. **Analytics are derived**: always recomputed from text, never undone
//! 3. **Selection follows structure, not time**: additions move the cursor,
//!    undo/redo only clamp it
//! 4. **No failure states**: stale indices and empty history are no-ops
//!
//! ## Usage
//!
//! ```rust
//! use storyline_editor::{EditMode, EditorConfig, EditorController};
//!
//! let mut editor = EditorController::new(EditorConfig::default());
//! editor.set_panel_text("It was a dark night.", EditMode::Normal);
//! editor.add_panel();
//! editor.set_panel_text("Then the sun rose!", EditMode::Normal);
//!
//! editor.undo();
//! assert_eq!(editor.current_panel().unwrap().text, "");
//! ```

mod config;
mod controller;
mod edits;
mod errors;
mod history;
mod keymap;
mod outline;

pub use config::EditorConfig;
pub use controller::EditorController;
pub use edits::Edit;
pub use errors::EditorError;
pub use history::{ActionType, EditMode, History, Snapshot, Transition};
pub use keymap::{EditorCommand, Key, KeyChord, Keymap, Platform};
pub use outline::{ChapterEntry, Outline, PanelEntry};

// Re-export document and analytics types for convenience
pub use storyline_analytics::PanelReport;
pub use storyline_document::{Chapter, Cursor, Document, Page, Panel};

