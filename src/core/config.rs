//! User configuration
//!
//! Loaded once at startup from a JSON file in the platform config directory:
//! - macOS: ~/Library/Application Support/bevysolar/config.json
//! - Linux: ~/.config/bevysolar/config.json
//! - Windows: %APPDATA%\bevysolar\config\config.json
//!
//! Every field is optional in the file; missing fields take their defaults.

use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";

/// Tunables that are not part of the body catalog.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarConfig {
    /// Directory under `assets/` holding the body textures.
    pub texture_dir: String,
    /// Free-fly translation speed in scene units per second.
    pub camera_speed: f32,
    /// Radians of orbit per pixel of mouse drag.
    pub drag_sensitivity: f32,
    pub min_zoom_distance: f32,
    pub max_zoom_distance: f32,
    /// Time-speed multipliers offered as presets.
    pub time_presets: Vec<f32>,
    /// Index into `time_presets` active at startup.
    pub default_preset: usize,
    pub show_orbits: bool,
    pub show_moons: bool,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            texture_dir: "textures".to_string(),
            camera_speed: 120.0,
            drag_sensitivity: 0.01,
            min_zoom_distance: 10.0,
            max_zoom_distance: 500.0,
            time_presets: vec![0.1, 0.5, 1.0, 2.0, 5.0],
            default_preset: 2,
            show_orbits: true,
            show_moons: true,
        }
    }
}

impl SolarConfig {
    /// Resolve the platform config file path.
    pub fn default_path() -> Result<PathBuf, anyhow::Error> {
        let proj_dirs = ProjectDirs::from("", "", "bevysolar")
            .ok_or_else(|| anyhow::anyhow!("Failed to resolve config directory"))?;
        Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Read a config file.
    ///
    /// Returns Ok(None) if the file doesn't exist.
    /// Returns Err if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Option<Self>, anyhow::Error> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        let config: SolarConfig = serde_json::from_str(&contents)?;
        Ok(Some(config.sanitized()))
    }

    /// Write the config as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), anyhow::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Load from the platform path, falling back to defaults on any problem.
    pub fn load_or_default() -> Self {
        match Self::default_path() {
            Ok(path) => Self::load_or_create(&path),
            Err(e) => {
                warn!("Config: {}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Load `path`, writing the defaults there on first run so they can be
    /// edited. An unreadable file is left untouched.
    pub fn load_or_create(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(Some(config)) => {
                info!("Config: loaded {}", path.display());
                config
            }
            Ok(None) => {
                let config = Self::default();
                match config.save_to(path) {
                    Ok(()) => info!("Config: wrote defaults to {}", path.display()),
                    Err(e) => debug!("Config: could not write {}: {}", path.display(), e),
                }
                config
            }
            Err(e) => {
                warn!("Config: failed to read {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Repair values that would break the camera clamps or preset lookup.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        self.time_presets
            .retain(|speed| speed.is_finite() && *speed > 0.0);
        if self.time_presets.is_empty() {
            self.time_presets = defaults.time_presets.clone();
            self.default_preset = defaults.default_preset;
        }
        if self.default_preset >= self.time_presets.len() {
            self.default_preset = 0;
        }

        if !(self.min_zoom_distance > 0.0 && self.min_zoom_distance < self.max_zoom_distance) {
            self.min_zoom_distance = defaults.min_zoom_distance;
            self.max_zoom_distance = defaults.max_zoom_distance;
        }
        if !(self.camera_speed.is_finite() && self.camera_speed >= 0.0) {
            self.camera_speed = defaults.camera_speed;
        }
        if !self.drag_sensitivity.is_finite() {
            self.drag_sensitivity = defaults.drag_sensitivity;
        }
        self
    }

    /// Multiplier of the preset active at startup.
    pub fn default_time_scale(&self) -> f32 {
        self.time_presets
            .get(self.default_preset)
            .copied()
            .unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(test_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "bevysolar-config-{}-{}-{}",
            test_name,
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = unique_temp_dir("missing").join(CONFIG_FILE_NAME);
        let loaded = SolarConfig::load_from(&path).expect("missing file is not an error");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let path = unique_temp_dir("roundtrip").join(CONFIG_FILE_NAME);
        let config = SolarConfig {
            camera_speed: 60.0,
            show_moons: false,
            ..default()
        };
        config.save_to(&path).expect("Failed to save config");

        let loaded = SolarConfig::load_from(&path)
            .expect("Failed to load config")
            .expect("config file should exist");
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = unique_temp_dir("partial");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "show_orbits": false }"#).unwrap();

        let loaded = SolarConfig::load_from(&path).unwrap().unwrap();
        assert!(!loaded.show_orbits);
        assert_eq!(loaded.camera_speed, SolarConfig::default().camera_speed);
        assert_eq!(loaded.time_presets, SolarConfig::default().time_presets);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = unique_temp_dir("first-run");
        let path = dir.join(CONFIG_FILE_NAME);

        let config = SolarConfig::load_or_create(&path);
        assert_eq!(config, SolarConfig::default());
        assert!(path.exists());
        assert_eq!(
            SolarConfig::load_from(&path).unwrap(),
            Some(SolarConfig::default())
        );

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_invalid_file_is_not_overwritten() {
        let dir = unique_temp_dir("keep-invalid");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(SolarConfig::load_or_create(&path), SolarConfig::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let dir = unique_temp_dir("invalid");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        assert!(SolarConfig::load_from(&path).is_err());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_sanitize_repairs_bad_values() {
        let config = SolarConfig {
            time_presets: vec![-1.0, f32::NAN],
            default_preset: 9,
            min_zoom_distance: 600.0,
            max_zoom_distance: 500.0,
            camera_speed: f32::INFINITY,
            ..default()
        }
        .sanitized();

        let defaults = SolarConfig::default();
        assert_eq!(config.time_presets, defaults.time_presets);
        assert_eq!(config.default_preset, defaults.default_preset);
        assert_eq!(config.min_zoom_distance, defaults.min_zoom_distance);
        assert_eq!(config.max_zoom_distance, defaults.max_zoom_distance);
        assert_eq!(config.camera_speed, defaults.camera_speed);
    }

    #[test]
    fn test_default_preset_out_of_range() {
        let config = SolarConfig {
            time_presets: vec![1.0, 4.0],
            default_preset: 5,
            ..default()
        }
        .sanitized();
        assert_eq!(config.default_preset, 0);
        assert_eq!(config.default_time_scale(), 1.0);
    }
}
