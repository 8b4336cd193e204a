//! Navigation summary for the presentation layer.

use serde::Serialize;
use storyline_document::{Cursor, Document};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterEntry {
    pub id: String,
    pub title: String,
    pub page_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelEntry {
    pub id: String,
    pub text: String,
}

/// Every chapter, plus the panels of the page under the cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outline {
    pub chapters: Vec<ChapterEntry>,
    pub panels: Vec<PanelEntry>,
    pub cursor: Cursor,
}

impl Outline {
    pub fn of(doc: &Document, cursor: Cursor) -> Self {
        let chapters = doc
            .chapters()
            .iter()
            .map(|chapter| ChapterEntry {
                id: chapter.id.clone(),
                title: chapter.title.clone(),
                page_count: chapter.len(),
            })
            .collect();

        let panels = doc
            .page(cursor.chapter_index, cursor.page_index)
            .map(|page| {
                page.panels()
                    .iter()
                    .map(|panel| PanelEntry {
                        id: panel.id.clone(),
                        text: panel.text.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            chapters,
            panels,
            cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_lists_current_page_panels() {
        let doc = Document::new()
            .add_page(0)
            .add_panel(0, 1)
            .set_panel_text(0, 1, 1, "Second")
            .add_chapter();

        let outline = Outline::of(&doc, Cursor::new(0, 1, 0));

        assert_eq!(outline.chapters.len(), 2);
        assert_eq!(outline.chapters[0].page_count, 2);
        assert_eq!(outline.chapters[1].title, "Chapter 2");
        assert_eq!(outline.panels.len(), 2);
        assert_eq!(outline.panels[1].id, "panel-2");
        assert_eq!(outline.panels[1].text, "Second");
    }
}
