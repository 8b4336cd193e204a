//! # Cursor
//!
//! Three indices naming the selected panel. Every transition takes the
//! document it is interpreted against and returns a new cursor; anything
//! out of range leaves the cursor where it was.

use crate::tree::Document;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cursor {
    pub chapter_index: usize,
    pub page_index: usize,
    pub panel_index: usize,
}

impl Cursor {
    pub fn new(chapter_index: usize, page_index: usize, panel_index: usize) -> Self {
        Self {
            chapter_index,
            page_index,
            panel_index,
        }
    }

    /// Pull each index down to the last valid position at its level
    pub fn clamp_to(self, doc: &Document) -> Cursor {
        let chapter_index = self.chapter_index.min(doc.len().saturating_sub(1));
        let page_count = doc.chapter(chapter_index).map_or(1, |c| c.len());
        let page_index = self.page_index.min(page_count.saturating_sub(1));
        let panel_count = doc.page(chapter_index, page_index).map_or(1, |p| p.len());
        let panel_index = self.panel_index.min(panel_count.saturating_sub(1));

        Cursor {
            chapter_index,
            page_index,
            panel_index,
        }
    }

    /// Advance within the current page; no-op on the last panel
    pub fn next(self, doc: &Document) -> Cursor {
        let cursor = self.clamp_to(doc);
        if cursor.has_next(doc) {
            Cursor {
                panel_index: cursor.panel_index + 1,
                ..cursor
            }
        } else {
            cursor
        }
    }

    /// Step back within the current page; no-op on the first panel
    pub fn prev(self, doc: &Document) -> Cursor {
        let cursor = self.clamp_to(doc);
        if cursor.has_prev() {
            Cursor {
                panel_index: cursor.panel_index - 1,
                ..cursor
            }
        } else {
            cursor
        }
    }

    /// Jump to a chapter's first page and first panel
    pub fn select_chapter(self, chapter_index: usize, doc: &Document) -> Cursor {
        if doc.chapter(chapter_index).is_none() {
            return self;
        }
        Cursor::new(chapter_index, 0, 0)
    }

    /// Jump to a page of the current chapter, first panel
    pub fn select_page(self, page_index: usize, doc: &Document) -> Cursor {
        if doc.page(self.chapter_index, page_index).is_none() {
            return self;
        }
        Cursor::new(self.chapter_index, page_index, 0)
    }

    /// Jump to a panel of the current page
    pub fn select_panel(self, panel_index: usize, doc: &Document) -> Cursor {
        if doc.panel(self.chapter_index, self.page_index, panel_index).is_none() {
            return self;
        }
        Cursor {
            panel_index,
            ..self
        }
    }

    pub fn has_next(self, doc: &Document) -> bool {
        doc.page(self.chapter_index, self.page_index)
            .is_some_and(|page| self.panel_index + 1 < page.len())
    }

    pub fn has_prev(self) -> bool {
        self.panel_index > 0
    }

    pub fn is_first_panel(self) -> bool {
        self.panel_index == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_panel_doc() -> Document {
        Document::new().add_panel(0, 0).add_panel(0, 0)
    }

    #[test]
    fn test_next_and_prev() {
        let doc = three_panel_doc();
        let cursor = Cursor::default().next(&doc).next(&doc);
        assert_eq!(cursor.panel_index, 2);

        // Last panel: no-op
        assert_eq!(cursor.next(&doc), cursor);

        let back = cursor.prev(&doc).prev(&doc);
        assert_eq!(back.panel_index, 0);
        assert_eq!(back.prev(&doc), back);
    }

    #[test]
    fn test_clamp_to_shrunk_tree() {
        let doc = Document::new();
        let cursor = Cursor::new(3, 2, 7).clamp_to(&doc);
        assert_eq!(cursor, Cursor::new(0, 0, 0));
    }

    #[test]
    fn test_clamp_keeps_valid_cursor() {
        let doc = three_panel_doc();
        let cursor = Cursor::new(0, 0, 2);
        assert_eq!(cursor.clamp_to(&doc), cursor);
    }

    #[test]
    fn test_select_chapter_resets_page_and_panel() {
        let doc = three_panel_doc().add_chapter();
        let cursor = Cursor::new(0, 0, 2).select_chapter(1, &doc);
        assert_eq!(cursor, Cursor::new(1, 0, 0));
    }

    #[test]
    fn test_select_page_resets_panel() {
        let doc = three_panel_doc().add_page(0);
        let cursor = Cursor::new(0, 0, 2).select_page(1, &doc);
        assert_eq!(cursor, Cursor::new(0, 1, 0));
    }

    #[test]
    fn test_out_of_range_selects_are_noops() {
        let doc = three_panel_doc();
        let cursor = Cursor::new(0, 0, 1);
        assert_eq!(cursor.select_chapter(4, &doc), cursor);
        assert_eq!(cursor.select_page(4, &doc), cursor);
        assert_eq!(cursor.select_panel(4, &doc), cursor);
        assert_eq!(cursor.select_panel(2, &doc).panel_index, 2);
    }

    #[test]
    fn test_has_next_has_prev() {
        let doc = three_panel_doc();
        assert!(Cursor::new(0, 0, 0).has_next(&doc));
        assert!(!Cursor::new(0, 0, 0).has_prev());
        assert!(!Cursor::new(0, 0, 2).has_next(&doc));
        assert!(Cursor::new(0, 0, 2).has_prev());
    }
}
