//! # Document Edits
//!
//! The closed set of user edits the editor can record.
//!
//! Each edit maps to exactly one `ActionType`, applies as a pure document
//! transform, and knows where the cursor should land afterwards. An edit
//! whose indices do not name an existing node is a no-op and is never
//! recorded.

use crate::errors::EditorError;
use crate::history::ActionType;
use serde::{Deserialize, Serialize};
use storyline_document::{Cursor, Document};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Edit {
    /// Replace a chapter title
    RenameChapter { chapter_index: usize, title: String },

    /// Append a chapter with one page and one empty panel
    AddChapter,

    /// Append a page (one empty panel) to a chapter
    AddPage { chapter_index: usize },

    /// Append an empty panel to a page
    AddPanel { chapter_index: usize, page_index: usize },

    /// Replace one panel's text (atomic, not a diff)
    SetPanelText {
        chapter_index: usize,
        page_index: usize,
        panel_index: usize,
        text: String,
    },
}

impl Edit {
    /// Parse an edit from its tagged JSON form
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        serde_json::from_str(json).map_err(EditorError::InvalidEdit)
    }

    pub fn action_type(&self) -> ActionType {
        match self {
            Edit::RenameChapter { .. } => ActionType::RenameChapter,
            Edit::AddChapter => ActionType::CreateChapter,
            Edit::AddPage { .. } => ActionType::CreatePage,
            Edit::AddPanel { .. } => ActionType::CreatePanel,
            Edit::SetPanelText { .. } => ActionType::UpdatePanelText,
        }
    }

    /// Whether every index in the edit names an existing node
    pub fn targets_existing(&self, doc: &Document) -> bool {
        match self {
            Edit::RenameChapter { chapter_index, .. } | Edit::AddPage { chapter_index } => {
                doc.chapter(*chapter_index).is_some()
            }
            Edit::AddChapter => true,
            Edit::AddPanel {
                chapter_index,
                page_index,
            } => doc.page(*chapter_index, *page_index).is_some(),
            Edit::SetPanelText {
                chapter_index,
                page_index,
                panel_index,
                ..
            } => doc.panel(*chapter_index, *page_index, *panel_index).is_some(),
        }
    }

    /// Apply to `doc`, returning the new document
    pub fn apply(&self, doc: &Document, chapter_prefix: &str) -> Document {
        match self {
            Edit::RenameChapter {
                chapter_index,
                title,
            } => doc.rename_chapter(*chapter_index, title.as_str()),
            Edit::AddChapter => doc.add_chapter_with_prefix(chapter_prefix),
            Edit::AddPage { chapter_index } => doc.add_page(*chapter_index),
            Edit::AddPanel {
                chapter_index,
                page_index,
            } => doc.add_panel(*chapter_index, *page_index),
            Edit::SetPanelText {
                chapter_index,
                page_index,
                panel_index,
                text,
            } => doc.set_panel_text(*chapter_index, *page_index, *panel_index, text.as_str()),
        }
    }

    /// Where the selection goes once this edit is in `doc`
    ///
    /// Additions select the new node; everything else keeps `cursor`.
    pub fn cursor_after(&self, doc: &Document, cursor: Cursor) -> Cursor {
        match self {
            Edit::AddChapter => Cursor::new(doc.len().saturating_sub(1), 0, 0),
            Edit::AddPage { chapter_index } => {
                let pages = doc.chapter(*chapter_index).map_or(1, |c| c.len());
                Cursor::new(*chapter_index, pages.saturating_sub(1), 0)
            }
            Edit::AddPanel {
                chapter_index,
                page_index,
            } => {
                let panels = doc.page(*chapter_index, *page_index).map_or(1, |p| p.len());
                Cursor::new(*chapter_index, *page_index, panels.saturating_sub(1))
            }
            Edit::RenameChapter { .. } | Edit::SetPanelText { .. } => cursor.clamp_to(doc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyline_document::DEFAULT_CHAPTER_PREFIX;

    #[test]
    fn test_action_types() {
        assert_eq!(Edit::AddChapter.action_type(), ActionType::CreateChapter);
        assert_eq!(
            Edit::AddPage { chapter_index: 0 }.action_type(),
            ActionType::CreatePage
        );
        assert_eq!(
            Edit::AddPanel {
                chapter_index: 0,
                page_index: 0
            }
            .action_type(),
            ActionType::CreatePanel
        );
        assert_eq!(
            Edit::RenameChapter {
                chapter_index: 0,
                title: "x".to_string()
            }
            .action_type(),
            ActionType::RenameChapter
        );
    }

    #[test]
    fn test_targets_existing() {
        let doc = Document::new();
        assert!(Edit::AddChapter.targets_existing(&doc));
        assert!(Edit::AddPage { chapter_index: 0 }.targets_existing(&doc));
        assert!(!Edit::AddPage { chapter_index: 1 }.targets_existing(&doc));
        assert!(!Edit::SetPanelText {
            chapter_index: 0,
            page_index: 0,
            panel_index: 1,
            text: String::new(),
        }
        .targets_existing(&doc));
    }

    #[test]
    fn test_cursor_follows_additions() {
        let doc = Document::new();

        let edit = Edit::AddPanel {
            chapter_index: 0,
            page_index: 0,
        };
        let after = edit.apply(&doc, DEFAULT_CHAPTER_PREFIX);
        assert_eq!(edit.cursor_after(&after, Cursor::default()), Cursor::new(0, 0, 1));

        let edit = Edit::AddPage { chapter_index: 0 };
        let after = edit.apply(&after, DEFAULT_CHAPTER_PREFIX);
        assert_eq!(edit.cursor_after(&after, Cursor::new(0, 0, 1)), Cursor::new(0, 1, 0));

        let edit = Edit::AddChapter;
        let after = edit.apply(&after, DEFAULT_CHAPTER_PREFIX);
        assert_eq!(edit.cursor_after(&after, Cursor::new(0, 1, 0)), Cursor::new(1, 0, 0));
    }

    #[test]
    fn test_edit_json_shape() {
        let edit = Edit::from_json(
            r#"{"type":"setPanelText","chapterIndex":0,"pageIndex":0,"panelIndex":0,"text":"Hi"}"#,
        )
        .unwrap();
        assert_eq!(
            edit,
            Edit::SetPanelText {
                chapter_index: 0,
                page_index: 0,
                panel_index: 0,
                text: "Hi".to_string(),
            }
        );

        let json = serde_json::to_string(&Edit::AddChapter).unwrap();
        assert_eq!(json, r#"{"type":"addChapter"}"#);

        assert!(matches!(
            Edit::from_json(r#"{"type":"deletePanel"}"#),
            Err(EditorError::InvalidEdit(_))
        ));
    }
}
