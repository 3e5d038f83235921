//! Runtime configuration for the widgets.
//!
//! Natively the config is read from `ui.json` inside the platform config
//! directory; in the browser there is nowhere to read it from, so the defaults
//! apply. `main` installs the loaded value as a context and components fetch it
//! through [`use_ui_config`].

use std::path::PathBuf;

use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Delay before a tooltip shows, in milliseconds.
    pub tooltip_delay_ms: u64,
    /// Pan distance allowed on each axis at scale 1, in CSS pixels.
    pub drag_extent_px: f64,
    pub log_level: String,
    /// Where native downloads land. Defaults to the user's download directory.
    pub download_dir: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tooltip_delay_ms: 300,
            drag_extent_px: 100.0,
            log_level: "warn".to_string(),
            download_dir: None,
        }
    }
}

impl UiConfig {
    /// Parses `log_level`, falling back to `WARN` for anything unrecognised.
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::WARN)
    }

    pub fn from_json(data: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn config_path() -> PathBuf {
    use directories_next::ProjectDirs;

    let base = if let Some(proj_dirs) = ProjectDirs::from("com", "N K", "chat-media-widgets") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    };
    base.join("ui.json")
}

/// Loads the config file. A missing file yields the defaults; a malformed one
/// is an error.
#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> anyhow::Result<UiConfig> {
    match std::fs::read_to_string(config_path()) {
        Ok(data) => UiConfig::from_json(&data),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(UiConfig::default()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load() -> anyhow::Result<UiConfig> {
    Ok(UiConfig::default())
}

/// Returns the config installed in context, or the defaults when the host
/// never provided one.
pub fn use_ui_config() -> UiConfig {
    use_hook(|| try_consume_context::<UiConfig>().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = UiConfig::from_json(r#"{ "tooltip_delay_ms": 750 }"#).unwrap();
        assert_eq!(cfg.tooltip_delay_ms, 750);
        assert_eq!(cfg.drag_extent_px, 100.0);
        assert_eq!(cfg.download_dir, None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(UiConfig::from_json("{ tooltip").is_err());
    }

    #[test]
    fn unknown_log_level_falls_back_to_warn() {
        let cfg = UiConfig {
            log_level: "chatty".into(),
            ..Default::default()
        };
        assert_eq!(cfg.level(), Level::WARN);

        let cfg = UiConfig {
            log_level: "debug".into(),
            ..Default::default()
        };
        assert_eq!(cfg.level(), Level::DEBUG);
    }
}
