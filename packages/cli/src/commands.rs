//! Shell commands: one per input line.

use storyline_editor::{Edit, EditMode, EditorController, EditorError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Replace the current panel's text
    Text(String),
    Next,
    Prev,
    /// Next panel, or a new one on the last panel
    Advance,
    NewPanel,
    NewPage,
    NewChapter,
    Rename { chapter_index: usize, title: String },
    Chapter(usize),
    Page(usize),
    Panel(usize),
    /// Apply a JSON-encoded edit
    Edit(Edit),
    Undo,
    Redo,
    Show,
    Dump,
    Help,
    Quit,
}

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("`{command}`: not an index: {value}")]
    InvalidIndex { command: &'static str, value: String },

    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// What the shell should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The command ran; `changed` is false for no-ops
    Done { changed: bool },
    /// Print this text
    Print(String),
    Quit,
}

pub const HELP: &str = "\
commands:
  text <words>           replace current panel text
  next | prev            move within the page
  advance                next panel, or new panel on the last one
  new-panel | new-page | new-chapter
  rename <idx> <title>   rename a chapter
  chapter <idx> | page <idx> | panel <idx>
  edit <json>            apply a JSON edit
  undo | redo
  show | dump | help | quit";

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, ShellError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "text" => ShellCommand::Text(rest.to_string()),
            "next" => ShellCommand::Next,
            "prev" => ShellCommand::Prev,
            "advance" => ShellCommand::Advance,
            "new-panel" => ShellCommand::NewPanel,
            "new-page" => ShellCommand::NewPage,
            "new-chapter" => ShellCommand::NewChapter,
            "rename" => {
                let (index, title) = rest.split_once(char::is_whitespace).ok_or(
                    ShellError::MissingArgument {
                        command: "rename",
                        argument: "an index and a title",
                    },
                )?;
                ShellCommand::Rename {
                    chapter_index: parse_index("rename", index)?,
                    title: title.trim().to_string(),
                }
            }
            "chapter" => ShellCommand::Chapter(parse_index("chapter", rest)?),
            "page" => ShellCommand::Page(parse_index("page", rest)?),
            "panel" => ShellCommand::Panel(parse_index("panel", rest)?),
            "edit" => ShellCommand::Edit(Edit::from_json(rest)?),
            "undo" => ShellCommand::Undo,
            "redo" => ShellCommand::Redo,
            "show" => ShellCommand::Show,
            "dump" => ShellCommand::Dump,
            "help" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        };

        Ok(command)
    }

    pub fn run(self, editor: &mut EditorController) -> Reply {
        let changed = match self {
            ShellCommand::Text(text) => editor.set_panel_text(text, EditMode::Normal),
            ShellCommand::Next => editor.next(),
            ShellCommand::Prev => editor.prev(),
            ShellCommand::Advance => editor.advance_or_create(),
            ShellCommand::NewPanel => editor.add_panel(),
            ShellCommand::NewPage => editor.add_page(),
            ShellCommand::NewChapter => editor.add_chapter(),
            ShellCommand::Rename {
                chapter_index,
                title,
            } => editor.rename_chapter(chapter_index, title),
            ShellCommand::Chapter(index) => editor.select_chapter(index),
            ShellCommand::Page(index) => editor.select_page(index),
            ShellCommand::Panel(index) => editor.select_panel(index),
            ShellCommand::Edit(edit) => editor.apply(edit, EditMode::Normal),
            ShellCommand::Undo => editor.undo(),
            ShellCommand::Redo => editor.redo(),
            ShellCommand::Show => return Reply::Print(crate::render::show(editor)),
            ShellCommand::Dump => {
                let json = serde_json::to_string_pretty(editor.document())
                    .unwrap_or_else(|e| format!("cannot serialize document: {}", e));
                return Reply::Print(json);
            }
            ShellCommand::Help => return Reply::Print(HELP.to_string()),
            ShellCommand::Quit => return Reply::Quit,
        };

        Reply::Done { changed }
    }
}

fn parse_index(command: &'static str, value: &str) -> Result<usize, ShellError> {
    if value.is_empty() {
        return Err(ShellError::MissingArgument {
            command,
            argument: "an index",
        });
    }
    value.parse().map_err(|_| ShellError::InvalidIndex {
        command,
        value: value.to_string(),
    })
}
