//! # Story Tree
//!
//! Immutable Chapter → Page → Panel tree and its structural edits.
//!
//! ## Design
//!
//! - Every edit takes `&self` and returns a new `Document`
//! - Nodes are held behind `Arc`, so a new document shares every branch the
//!   edit did not touch
//! - Edits along a path go through `Arc::make_mut`, which clones a node only
//!   while it is still shared with an older snapshot
//! - Every Chapter keeps ≥1 Page and every Page keeps ≥1 Panel; no edit here
//!   removes anything
//! - Ids are `"<kind>-<n>"` drawn from a per-parent counter that only grows
//!
//! ## Example
//!
//! ```rust
//! use storyline_document::Document;
//!
//! let doc = Document::new();
//! let doc = doc.add_panel(0, 0);
//! let doc = doc.set_panel_text(0, 0, 1, "The door creaks open.");
//!
//! assert_eq!(doc.panel(0, 0, 1).unwrap().text, "The door creaks open.");
//! assert_eq!(doc.panel(0, 0, 1).unwrap().id, "panel-2");
//! ```

use serde::Serialize;
use std::sync::Arc;

/// Title prefix used for chapters created without an explicit prefix
pub const DEFAULT_CHAPTER_PREFIX: &str = "Chapter";

/// Smallest content unit: one block of narration or dialogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub id: String,
    pub text: String,
}

impl Panel {
    fn empty(id: String) -> Self {
        Self {
            id,
            text: String::new(),
        }
    }
}

/// Ordered group of panels (never empty)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    panels: Vec<Arc<Panel>>,
    next_panel_seq: u32,
}

impl Page {
    fn with_one_panel(id: String) -> Self {
        let mut page = Self {
            id,
            panels: Vec::new(),
            next_panel_seq: 0,
        };
        page.push_panel();
        page
    }

    /// Panels in reading order
    pub fn panels(&self) -> &[Arc<Panel>] {
        &self.panels
    }

    pub fn panel(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index).map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Always false for a page built by this module
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    fn push_panel(&mut self) {
        let id = next_id("panel", &mut self.next_panel_seq);
        self.panels.push(Arc::new(Panel::empty(id)));
    }

    fn panel_mut(&mut self, index: usize) -> Option<&mut Panel> {
        self.panels.get_mut(index).map(Arc::make_mut)
    }
}

/// Named ordered group of pages (never empty)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pages: Vec<Arc<Page>>,
    next_page_seq: u32,
}

impl Chapter {
    fn with_one_page(id: String, title: String) -> Self {
        let mut chapter = Self {
            id,
            title,
            pages: Vec::new(),
            next_page_seq: 0,
        };
        chapter.push_page();
        chapter
    }

    /// Pages in reading order
    pub fn pages(&self) -> &[Arc<Page>] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index).map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false for a chapter built by this module
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn push_page(&mut self) {
        let id = next_id("page", &mut self.next_page_seq);
        self.pages.push(Arc::new(Page::with_one_panel(id)));
    }

    fn page_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.pages.get_mut(index).map(Arc::make_mut)
    }
}

/// The whole story; the unit of history snapshotting
///
/// Cloning is cheap: only the top-level list of chapter handles is copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    chapters: Vec<Arc<Chapter>>,
    next_chapter_seq: u32,
}

impl Document {
    /// One chapter holding one page holding one empty panel
    pub fn new() -> Self {
        let mut doc = Self {
            chapters: Vec::new(),
            next_chapter_seq: 0,
        };
        doc.push_chapter(DEFAULT_CHAPTER_PREFIX);
        doc
    }

    /// Chapters in reading order
    pub fn chapters(&self) -> &[Arc<Chapter>] {
        &self.chapters
    }

    pub fn chapter(&self, chapter_index: usize) -> Option<&Chapter> {
        self.chapters.get(chapter_index).map(Arc::as_ref)
    }

    pub fn page(&self, chapter_index: usize, page_index: usize) -> Option<&Page> {
        self.chapter(chapter_index)?.page(page_index)
    }

    pub fn panel(&self, chapter_index: usize, page_index: usize, panel_index: usize) -> Option<&Panel> {
        self.page(chapter_index, page_index)?.panel(panel_index)
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Always false for a document built by this module
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// True when every level holds at least one child
    pub fn is_well_formed(&self) -> bool {
        !self.chapters.is_empty()
            && self.chapters.iter().all(|chapter| {
                !chapter.pages.is_empty() && chapter.pages.iter().all(|page| !page.panels.is_empty())
            })
    }

    /// Replace a chapter's title; out-of-range index returns an unchanged copy
    pub fn rename_chapter(&self, chapter_index: usize, new_title: impl Into<String>) -> Document {
        let new_title = new_title.into();
        self.edit_chapter(chapter_index, |chapter| chapter.title = new_title)
    }

    /// Append a chapter titled `"Chapter <n>"`
    pub fn add_chapter(&self) -> Document {
        self.add_chapter_with_prefix(DEFAULT_CHAPTER_PREFIX)
    }

    /// Append a chapter titled `"<prefix> <n>"` with one page and one empty panel
    pub fn add_chapter_with_prefix(&self, prefix: &str) -> Document {
        let mut next = self.clone();
        next.push_chapter(prefix);
        next
    }

    /// Append a page (with one empty panel) to a chapter
    pub fn add_page(&self, chapter_index: usize) -> Document {
        self.edit_chapter(chapter_index, Chapter::push_page)
    }

    /// Append an empty panel to a page
    pub fn add_panel(&self, chapter_index: usize, page_index: usize) -> Document {
        self.edit_page(chapter_index, page_index, Page::push_panel)
    }

    /// Replace exactly one panel's text
    ///
    /// Only the chapter, page and panel on the edited path are rebuilt.
    pub fn set_panel_text(
        &self,
        chapter_index: usize,
        page_index: usize,
        panel_index: usize,
        text: impl Into<String>,
    ) -> Document {
        let text = text.into();
        self.edit_panel(chapter_index, page_index, panel_index, |panel| panel.text = text)
    }

    fn push_chapter(&mut self, prefix: &str) {
        let id = next_id("chapter", &mut self.next_chapter_seq);
        let title = format!("{} {}", prefix, self.next_chapter_seq);
        self.chapters.push(Arc::new(Chapter::with_one_page(id, title)));
    }

    // Copy-on-write path helpers. Bounds are checked before anything is
    // cloned so a no-op edit shares every node with `self`.

    fn edit_chapter(&self, chapter_index: usize, f: impl FnOnce(&mut Chapter)) -> Document {
        let mut next = self.clone();
        match next.chapters.get_mut(chapter_index) {
            Some(chapter) => f(Arc::make_mut(chapter)),
            None => tracing::trace!(chapter_index, "chapter edit out of range, ignored"),
        }
        next
    }

    fn edit_page(&self, chapter_index: usize, page_index: usize, f: impl FnOnce(&mut Page)) -> Document {
        if self.page(chapter_index, page_index).is_none() {
            tracing::trace!(chapter_index, page_index, "page edit out of range, ignored");
            return self.clone();
        }
        self.edit_chapter(chapter_index, |chapter| {
            if let Some(page) = chapter.page_mut(page_index) {
                f(page);
            }
        })
    }

    fn edit_panel(
        &self,
        chapter_index: usize,
        page_index: usize,
        panel_index: usize,
        f: impl FnOnce(&mut Panel),
    ) -> Document {
        if self.panel(chapter_index, page_index, panel_index).is_none() {
            tracing::trace!(chapter_index, page_index, panel_index, "panel edit out of range, ignored");
            return self.clone();
        }
        self.edit_page(chapter_index, page_index, |page| {
            if let Some(panel) = page.panel_mut(panel_index) {
                f(panel);
            }
        })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn next_id(kind: &str, seq: &mut u32) -> String {
    *seq += 1;
    format!("{}-{}", kind, seq)
}
