//! # Storyline Document
//!
//! The story tree (Chapters → Pages → Panels) and the cursor that selects a
//! panel inside it.
//!
//! ## Core Principles
//!
//! 1. **Values, not handles**: every edit returns a new `Document`
//! 2. **Structural sharing**: untouched branches are shared between versions,
//!    so history snapshots cost one path per edit
//! 3. **Never empty**: every chapter has a page and every page has a panel
//! 4. **Out of range is a no-op**: indices come from the rendered tree, so a
//!    stale index leaves the document and cursor unchanged

mod cursor;
mod tree;

pub use cursor::Cursor;
pub use tree::{Chapter, Document, Page, Panel, DEFAULT_CHAPTER_PREFIX};
