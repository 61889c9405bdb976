//! Application configuration: canvas settings file and output directory

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sketchpad_config::CanvasConfig;
use tracing::debug;

/// Environment variable naming the export directory when `--out-dir` is absent
pub const OUT_DIR_ENV: &str = "SKETCHPAD_OUT_DIR";

/// Resolve where exported PNGs go: the flag, then the environment, then `.`
pub fn resolve_out_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(OUT_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load a canvas config from a JSON file, or the defaults when no file is given.
/// Missing fields take their default values.
pub fn load_canvas_config(path: Option<&Path>) -> Result<CanvasConfig> {
    let Some(path) = path else {
        return Ok(CanvasConfig::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: CanvasConfig = serde_json::from_str(&text)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    debug!("Loaded canvas config from {}: {:?}", path.display(), config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_env() {
        let dir = resolve_out_dir(Some(PathBuf::from("/tmp/exports")));
        assert_eq!(dir, PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_no_file_means_defaults() {
        assert_eq!(load_canvas_config(None).unwrap(), CanvasConfig::default());
    }

    #[test]
    fn test_partial_config_file() {
        let path = std::env::temp_dir().join(format!("sketchpad-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"width": 320, "tool": "spray", "spray_seed": 4}"#).unwrap();

        let config = load_canvas_config(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.width, 320);
        assert_eq!(config.height, sketchpad_config::DEFAULT_HEIGHT);
        assert_eq!(config.tool, "spray");
        assert_eq!(config.spray_seed, Some(4));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_canvas_config(Some(Path::new("/nonexistent/sketchpad.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
