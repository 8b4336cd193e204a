//! # Editor Controller
//!
//! One user's editing session over a story document.
//!
//! The controller owns the history (whose `present` is the document being
//! shown) and the cursor. Every edit goes document transform → history record
//! → cursor update, in that order. Additions move the cursor onto the new
//! node; undo and redo leave it at the same indices, clamped if the restored
//! document is smaller.

use crate::config::EditorConfig;
use crate::edits::Edit;
use crate::history::{ActionType, EditMode, History};
use crate::keymap::{EditorCommand, KeyChord, Keymap};
use crate::outline::Outline;
use storyline_analytics::PanelReport;
use storyline_document::{Chapter, Cursor, Document, Page, Panel};

pub struct EditorController {
    history: History<Document>,
    cursor: Cursor,
    keymap: Keymap,
    config: EditorConfig,
}

impl EditorController {
    /// Session over a fresh one-panel document
    pub fn new(config: EditorConfig) -> Self {
        Self::with_document(Document::new(), config)
    }

    /// Session over an existing document, cursor on its first panel
    pub fn with_document(document: Document, config: EditorConfig) -> Self {
        Self {
            history: History::with_limit(document, config.history_limit),
            cursor: Cursor::default(),
            keymap: Keymap::new(config.platform),
            config,
        }
    }

    pub fn document(&self) -> &Document {
        self.history.present()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn history(&self) -> &History<Document> {
        &self.history
    }

    pub fn current_chapter(&self) -> Option<&Chapter> {
        self.document().chapter(self.cursor.chapter_index)
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.document()
            .page(self.cursor.chapter_index, self.cursor.page_index)
    }

    pub fn current_panel(&self) -> Option<&Panel> {
        self.document().panel(
            self.cursor.chapter_index,
            self.cursor.page_index,
            self.cursor.panel_index,
        )
    }

    /// Text of the panel just before the current one on the same page
    pub fn previous_panel_text(&self) -> Option<&str> {
        let previous = self.cursor.panel_index.checked_sub(1)?;
        self.document()
            .panel(self.cursor.chapter_index, self.cursor.page_index, previous)
            .map(|panel| panel.text.as_str())
    }

    /// Analytics for the current panel, with drift against its predecessor
    pub fn report(&self) -> PanelReport {
        let current = self.current_panel().map_or("", |panel| panel.text.as_str());
        PanelReport::analyze(
            self.previous_panel_text(),
            current,
            self.cursor.is_first_panel(),
        )
    }

    /// Titles, page counts and current-page panels for navigation rendering
    pub fn outline(&self) -> Outline {
        Outline::of(self.document(), self.cursor)
    }

    /// Apply an edit and record it
    ///
    /// Returns false when the edit was dropped: stale indices, or a replay
    /// echo. A dropped edit changes neither the document nor the cursor.
    pub fn apply(&mut self, edit: Edit, mode: EditMode) -> bool {
        if !edit.targets_existing(self.document()) {
            tracing::debug!(?edit, "edit targets a missing node, ignored");
            return false;
        }

        let next = edit.apply(self.document(), &self.config.default_chapter_title);
        if !self.history.record(next, edit.action_type(), mode) {
            return false;
        }

        self.cursor = edit.cursor_after(self.document(), self.cursor);
        tracing::debug!(action = %edit.action_type(), cursor = ?self.cursor, "edit applied");
        true
    }

    pub fn rename_chapter(&mut self, chapter_index: usize, title: impl Into<String>) -> bool {
        self.apply(
            Edit::RenameChapter {
                chapter_index,
                title: title.into(),
            },
            EditMode::Normal,
        )
    }

    pub fn add_chapter(&mut self) -> bool {
        self.apply(Edit::AddChapter, EditMode::Normal)
    }

    /// New page at the end of the current chapter
    pub fn add_page(&mut self) -> bool {
        self.apply(
            Edit::AddPage {
                chapter_index: self.cursor.chapter_index,
            },
            EditMode::Normal,
        )
    }

    /// New panel at the end of the current page
    pub fn add_panel(&mut self) -> bool {
        self.apply(
            Edit::AddPanel {
                chapter_index: self.cursor.chapter_index,
                page_index: self.cursor.page_index,
            },
            EditMode::Normal,
        )
    }

    /// Replace the current panel's text
    ///
    /// Pass `EditMode::Replaying` for the change notification an editable
    /// field fires while re-rendering after undo/redo; it is dropped.
    pub fn set_panel_text(&mut self, text: impl Into<String>, mode: EditMode) -> bool {
        self.apply(
            Edit::SetPanelText {
                chapter_index: self.cursor.chapter_index,
                page_index: self.cursor.page_index,
                panel_index: self.cursor.panel_index,
                text: text.into(),
            },
            mode,
        )
    }

    pub fn next(&mut self) -> bool {
        self.navigate(|cursor, doc| cursor.next(doc))
    }

    pub fn prev(&mut self) -> bool {
        self.navigate(|cursor, doc| cursor.prev(doc))
    }

    pub fn select_chapter(&mut self, chapter_index: usize) -> bool {
        self.navigate(|cursor, doc| cursor.select_chapter(chapter_index, doc))
    }

    pub fn select_page(&mut self, page_index: usize) -> bool {
        self.navigate(|cursor, doc| cursor.select_page(page_index, doc))
    }

    pub fn select_panel(&mut self, panel_index: usize) -> bool {
        self.navigate(|cursor, doc| cursor.select_panel(panel_index, doc))
    }

    pub fn has_next(&self) -> bool {
        self.cursor.has_next(self.document())
    }

    pub fn has_prev(&self) -> bool {
        self.cursor.has_prev()
    }

    /// Next panel, or a new one when on the last panel and the policy allows
    pub fn advance_or_create(&mut self) -> bool {
        if self.has_next() {
            self.next()
        } else if self.config.auto_create_on_last_panel {
            self.add_panel()
        } else {
            false
        }
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        self.cursor = self.cursor.clamp_to(self.document());
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        self.cursor = self.cursor.clamp_to(self.document());
        changed
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_label(&self) -> Option<ActionType> {
        self.history.undo_label()
    }

    pub fn redo_label(&self) -> Option<ActionType> {
        self.history.redo_label()
    }

    pub fn execute(&mut self, command: EditorCommand) -> bool {
        match command {
            EditorCommand::AdvanceOrCreate => self.advance_or_create(),
            EditorCommand::ForceNewPanel => self.add_panel(),
            EditorCommand::Undo => self.undo(),
            EditorCommand::Redo => self.redo(),
        }
    }

    /// Run the command bound to `chord`; false if nothing is bound
    pub fn handle_key(&mut self, chord: &KeyChord) -> bool {
        match self.keymap.resolve(chord) {
            Some(command) => {
                tracing::trace!(?chord, ?command, "key resolved");
                self.execute(command);
                true
            }
            None => false,
        }
    }

    fn navigate(&mut self, step: impl FnOnce(Cursor, &Document) -> Cursor) -> bool {
        let moved = step(self.cursor, self.document());
        let changed = moved != self.cursor;
        tracing::trace!(from = ?self.cursor, to = ?moved, "navigate");
        self.cursor = moved;
        changed
    }
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
