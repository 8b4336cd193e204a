//! Editor configuration.
//!
//! Parsed from camelCase JSON; every field has a default so an empty object
//! (or no config at all) gives the stock editor.

use crate::errors::EditorError;
use crate::keymap::Platform;
use serde::{Deserialize, Serialize};
use storyline_document::DEFAULT_CHAPTER_PREFIX;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Maximum undo levels (None or 0 = unbounded)
    #[serde(default)]
    pub history_limit: Option<usize>,

    /// Ctrl+Enter on the last panel creates a new one instead of doing nothing
    #[serde(default = "default_auto_create")]
    pub auto_create_on_last_panel: bool,

    /// Picks Ctrl or Cmd as the primary shortcut modifier
    #[serde(default)]
    pub platform: Platform,

    /// New chapters are titled "<prefix> <n>"
    #[serde(default = "default_chapter_title")]
    pub default_chapter_title: String,
}

fn default_auto_create() -> bool {
    true
}

fn default_chapter_title() -> String {
    DEFAULT_CHAPTER_PREFIX.to_string()
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        serde_json::from_str(json).map_err(EditorError::InvalidConfig)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: None,
            auto_create_on_last_panel: default_auto_create(),
            platform: Platform::default(),
            default_chapter_title: default_chapter_title(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "historyLimit": 50,
            "autoCreateOnLastPanel": false,
            "platform": "mac",
            "defaultChapterTitle": "Act"
        }"#;

        let config = EditorConfig::from_json(json).unwrap();
        assert_eq!(config.history_limit, Some(50));
        assert!(!config.auto_create_on_last_panel);
        assert_eq!(config.platform, Platform::Mac);
        assert_eq!(config.default_chapter_title, "Act");
    }

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = EditorConfig::from_json("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.history_limit, None);
        assert!(config.auto_create_on_last_panel);
        assert_eq!(config.platform, Platform::Standard);
        assert_eq!(config.default_chapter_title, "Chapter");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let err = EditorConfig::from_json(r#"{"platform": "amiga"}"#).unwrap_err();
        assert!(matches!(err, EditorError::InvalidConfig(_)));
        assert!(err.to_string().starts_with("Invalid config"));
    }
}
