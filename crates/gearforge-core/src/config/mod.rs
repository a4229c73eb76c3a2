use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::shell::MAX_DRAWN_TEETH;

pub const CONFIG_DIR_NAME: &str = "gearforge";
pub const CONFIG_FILE_NAME: &str = "gearforge_config.json";

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config range: {0}")]
    InvalidRange(String),
}

/// Default location, `<config dir>/gearforge`
pub fn default_config_dir() -> PathBuf {
    config_dir_under(dirs::config_dir())
}

fn config_dir_under(base: Option<PathBuf>) -> PathBuf {
    match base {
        Some(base) => base.join(CONFIG_DIR_NAME),
        None => {
            log::warn!(
                "No user config directory on this platform, settings go to ./{}",
                CONFIG_DIR_NAME
            );
            PathBuf::from(CONFIG_DIR_NAME)
        }
    }
}

/// Shell settings persisted between sessions. Calculations are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearForgeConfig {
    /// Inclusive slider range for the tooth count
    pub teeth_range: [u32; 2],
    /// Inclusive slider range for the module
    pub module_range: [f64; 2],
    pub module_step: f64,
    pub default_teeth: u32,
    pub default_module: f64,
    pub show_timestamps: bool,
}

impl Default for GearForgeConfig {
    fn default() -> Self {
        Self {
            teeth_range: [5, 100],
            module_range: [0.5, 10.0],
            module_step: 0.1,
            default_teeth: 20,
            default_module: 2.5,
            show_timestamps: false, // Matches the event log default
        }
    }
}

impl GearForgeConfig {
    /// Reject ranges the sliders could not honour
    pub fn validate(&self) -> Result<()> {
        let [teeth_min, teeth_max] = self.teeth_range;
        if teeth_min == 0 || teeth_min > teeth_max {
            return Err(ConfigError::InvalidRange(format!(
                "teeth range {}..={} must be positive and ascending",
                teeth_min, teeth_max
            )));
        }
        if teeth_max > MAX_DRAWN_TEETH {
            return Err(ConfigError::InvalidRange(format!(
                "teeth range may not exceed {} teeth",
                MAX_DRAWN_TEETH
            )));
        }

        let [module_min, module_max] = self.module_range;
        if !(module_min.is_finite() && module_max.is_finite()) || module_min <= 0.0 || module_min > module_max {
            return Err(ConfigError::InvalidRange(format!(
                "module range {}..={} must be positive and ascending",
                module_min, module_max
            )));
        }

        if !self.module_step.is_finite() || self.module_step <= 0.0 {
            return Err(ConfigError::InvalidRange(format!(
                "module step {} must be positive",
                self.module_step
            )));
        }

        if !(teeth_min..=teeth_max).contains(&self.default_teeth)
            || !(module_min..=module_max).contains(&self.default_module)
        {
            return Err(ConfigError::InvalidRange(format!(
                "defaults ({} teeth, module {}) fall outside the slider ranges",
                self.default_teeth, self.default_module
            )));
        }

        Ok(())
    }

    pub fn save_to_dir(&self, dir: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join(CONFIG_FILE_NAME), json)?;
        Ok(())
    }

    /// A missing file yields defaults; a malformed or invalid one is an error
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let json_path = dir.join(CONFIG_FILE_NAME);
        if !json_path.exists() {
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(json_path)?;
        let config: GearForgeConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load, falling back to defaults on any failure
    pub fn load_or_default(dir: &Path) -> Self {
        match Self::load_from_dir(dir) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default settings, could not load {}: {}", dir.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GearForgeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let config = GearForgeConfig {
            teeth_range: [8, 60],
            default_teeth: 30,
            show_timestamps: true,
            ..Default::default()
        };
        config.save_to_dir(dir.path()).unwrap();
        assert_eq!(GearForgeConfig::load_from_dir(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(GearForgeConfig::load_from_dir(dir.path()).unwrap(), GearForgeConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{ "show_timestamps": true }"#).unwrap();
        let config = GearForgeConfig::load_from_dir(dir.path()).unwrap();
        assert!(config.show_timestamps);
        assert_eq!(config.teeth_range, [5, 100]);
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        let zero_teeth = GearForgeConfig { teeth_range: [0, 10], default_teeth: 5, ..Default::default() };
        assert!(matches!(zero_teeth.validate(), Err(ConfigError::InvalidRange(_))));

        let negative_module = GearForgeConfig { module_range: [-1.0, 10.0], ..Default::default() };
        assert!(negative_module.validate().is_err());

        let default_outside = GearForgeConfig { default_module: 12.0, ..Default::default() };
        assert!(default_outside.validate().is_err());
    }

    #[test]
    fn test_teeth_range_capped_at_drawable_limit() {
        let huge = GearForgeConfig { teeth_range: [5, 4_000_000_000], ..Default::default() };
        assert!(matches!(huge.validate(), Err(ConfigError::InvalidRange(_))));

        let at_limit = GearForgeConfig { teeth_range: [5, MAX_DRAWN_TEETH], ..Default::default() };
        assert!(at_limit.validate().is_ok());

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{ "teeth_range": [5, 4000000000] }"#).unwrap();
        assert_eq!(GearForgeConfig::load_or_default(dir.path()), GearForgeConfig::default());
    }

    #[test]
    fn test_config_dir_without_platform_dir_is_named() {
        assert_eq!(config_dir_under(Some(PathBuf::from("/home/u/.config"))), PathBuf::from("/home/u/.config/gearforge"));
        assert_eq!(config_dir_under(None), PathBuf::from(CONFIG_DIR_NAME));
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "not json").unwrap();
        assert!(matches!(GearForgeConfig::load_from_dir(dir.path()), Err(ConfigError::Json(_))));
        assert_eq!(GearForgeConfig::load_or_default(dir.path()), GearForgeConfig::default());
    }
}
