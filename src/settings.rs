//! Launcher settings stored as settings.json in the app data directory

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Empty means "look next to the launcher executable"
    pub game_path: Option<String>,
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "pong-launcher-settings-{}-{}",
            tag,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = temp_dir("missing");
        let settings = Settings::load(&dir);
        assert!(settings.game_path.is_none());
        assert!(settings.window_x.is_none());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = temp_dir("roundtrip");
        let settings = Settings {
            window_x: Some(120.0),
            window_y: Some(80.0),
            window_w: Some(420.0),
            window_h: Some(520.0),
            game_path: Some("/opt/pong/deadman-pong".to_string()),
        };
        settings.save(&dir);
        let loaded = Settings::load(&dir);
        assert_eq!(loaded.window_x, Some(120.0));
        assert_eq!(loaded.window_h, Some(520.0));
        assert_eq!(loaded.game_path.as_deref(), Some("/opt/pong/deadman-pong"));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn garbage_file_falls_back_to_defaults() {
        let dir = temp_dir("garbage");
        std::fs::write(dir.join("settings.json"), "not json at all").unwrap();
        let settings = Settings::load(&dir);
        assert!(settings.game_path.is_none());
        std::fs::remove_dir_all(&dir).ok();
    }
}
