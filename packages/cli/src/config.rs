use std::path::{Path, PathBuf};
use storyline_editor::EditorConfig;

pub const DEFAULT_CONFIG_NAME: &str = "storyline.config.json";

/// Load editor config
///
/// An explicit path must exist. Without one, `storyline.config.json` in `cwd`
/// is used when present and defaults otherwise.
pub fn load(cwd: &Path, explicit: Option<&Path>) -> anyhow::Result<EditorConfig> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);
            if !candidate.exists() {
                return Ok(EditorConfig::default());
            }
            candidate
        }
    };

    let content = std::fs::read_to_string(&config_path)?;
    let config = EditorConfig::from_json(&content)?;
    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}
