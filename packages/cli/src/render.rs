//! Plain-text views of the editor state.

use colored::Colorize;
use storyline_editor::EditorController;

/// One line: location, panel count and analytics for the current panel
pub fn status_line(editor: &EditorController) -> String {
    let cursor = editor.cursor();
    let panels = editor.current_page().map_or(0, |page| page.len());
    let report = editor.report();

    format!(
        "{} ch {} · pg {} · panel {}/{}  {} {} {} {}  {}w {}c",
        "●".cyan(),
        cursor.chapter_index + 1,
        cursor.page_index + 1,
        cursor.panel_index + 1,
        panels,
        report.tone.to_string().magenta(),
        report.intensity,
        report.density,
        report.drift.to_string().yellow(),
        report.word_count,
        report.char_count,
    )
}

/// Chapter list plus the panels of the current page
pub fn show(editor: &EditorController) -> String {
    let outline = editor.outline();
    let mut lines = Vec::new();

    for (index, chapter) in outline.chapters.iter().enumerate() {
        let marker = if index == outline.cursor.chapter_index { ">" } else { " " };
        lines.push(format!(
            "{} [{}] {} ({} pages)",
            marker,
            index,
            chapter.title.bold(),
            chapter.page_count
        ));
    }

    for (index, panel) in outline.panels.iter().enumerate() {
        let marker = if index == outline.cursor.panel_index { ">" } else { " " };
        let text = if panel.text.is_empty() {
            "(empty)".dimmed().to_string()
        } else {
            panel.text.clone()
        };
        lines.push(format!("    {} {} {}", marker, panel.id.dimmed(), text));
    }

    if let Some(label) = editor.undo_label() {
        lines.push(format!("  undo: {}", label));
    }
    if let Some(label) = editor.redo_label() {
        lines.push(format!("  redo: {}", label));
    }

    lines.join("\n")
}
