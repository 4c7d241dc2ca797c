use crate::commit::{Bounds, DEFAULT_MAX_SECONDS, DEFAULT_MIN_SECONDS};
use crate::error::{DurationError, Result};
use crate::units::UnitTable;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    /// Custom unit table, largest unit first, ending with `second = 1`
    #[serde(default)]
    pub units: Option<UnitTable>,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for a single duration input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Initial value in seconds
    #[serde(default)]
    pub value: u64,
    #[serde(default = "default_min")]
    pub min: u64,
    #[serde(default = "default_max")]
    pub max: u64,
    /// Confirm button label
    #[serde(default = "default_label")]
    pub label: String,
    /// Commit on every edit instead of showing a confirm button
    #[serde(default)]
    pub no_confirm_button: bool,
}

const fn default_min() -> u64 {
    DEFAULT_MIN_SECONDS
}

const fn default_max() -> u64 {
    DEFAULT_MAX_SECONDS
}

fn default_label() -> String {
    "set".to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            value: 0,
            min: default_min(),
            max: default_max(),
            label: default_label(),
            no_confirm_button: false,
        }
    }
}

impl InputConfig {
    /// Bounds for this input
    ///
    /// # Errors
    ///
    /// Returns `InvalidBounds` if `min > max`.
    pub fn bounds(&self) -> Result<Bounds> {
        Bounds::new(self.min, self.max)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,
    #[serde(default = "default_window_height")]
    pub height: u32,
    #[serde(default)]
    pub always_on_top: bool,
}

const fn default_window_width() -> u32 {
    480
}

const fn default_window_height() -> u32 {
    220
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            always_on_top: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Also write logs to ~/.config/duration-input/duration-input.log
    #[serde(default)]
    pub enabled: bool,
}

impl AppConfig {
    /// Get the configuration directory path (~/.config/duration-input/)
    #[must_use]
    pub fn config_dir() -> PathBuf {
        crate::paths::config_dir()
    }

    /// Get the config file path (~/.config/duration-input/config.toml)
    #[must_use]
    pub fn config_path() -> PathBuf {
        crate::paths::config_path()
    }

    /// Load config from the default path, creating a template on first run.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` after writing the template, or an error if the
    /// file cannot be read, parsed or validated.
    pub fn load_or_create() -> Result<Self> {
        Self::load_or_create_at(&Self::config_path())
    }

    /// Load config from `path`, creating a template there if it is missing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` after writing the template, or an error if the
    /// file cannot be read, parsed or validated.
    pub fn load_or_create_at(path: &Path) -> Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::write(path, CONFIG_TEMPLATE)?;
            info!("Wrote config template to {:?}", path);

            return Err(DurationError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate config file contents.
    ///
    /// An initial value outside `[min, max]` is clamped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` for malformed TOML (including invalid unit
    /// tables) and `ConfigInvalid` for inverted bounds.
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;

        let bounds = config
            .input
            .bounds()
            .map_err(|e| DurationError::ConfigInvalid {
                message: format!("input: {e}"),
            })?;

        let clamped = bounds.clamp(config.input.value);
        if clamped != config.input.value {
            warn!(
                "input.value {} is outside [{}, {}], using {}",
                config.input.value,
                bounds.min(),
                bounds.max(),
                clamped
            );
            config.input.value = clamped;
        }

        Ok(config)
    }

    /// The configured unit table, or the default one
    #[must_use]
    pub fn unit_table(&self) -> UnitTable {
        self.units.clone().unwrap_or_default()
    }
}

/// Default config file contents
pub const CONFIG_TEMPLATE: &str = r#"# Duration Input Configuration
# ~/.config/duration-input/config.toml

# Optional custom unit table, largest first, must end with second = 1
# units = [
#     { name = "day", seconds = 86400 },
#     { name = "hour", seconds = 3600 },
#     { name = "minute", seconds = 60 },
#     { name = "second", seconds = 1 },
# ]

[input]
# Initial value in seconds
value = 3600
# Bounds in seconds (default max is 5 years)
min = 0
max = 157788000
# Confirm button label
label = "set"
# Commit on every edit instead of showing a confirm button
no_confirm_button = false

[window]
width = 480
height = 220
always_on_top = false

[logging]
# Also write logs to ~/.config/duration-input/duration-input.log
enabled = false
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses() {
        let config = AppConfig::parse(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.input.value, 3600);
        assert_eq!(config.input.max, DEFAULT_MAX_SECONDS);
        assert_eq!(config.input.label, "set");
        assert!(!config.input.no_confirm_button);
        assert!(config.units.is_none());
        assert_eq!(config.unit_table(), UnitTable::default());
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.input, InputConfig::default());
        assert_eq!(config.window.width, 480);
    }

    #[test]
    fn test_custom_units() {
        let config = AppConfig::parse(
            r#"
units = [
    { name = "hour", seconds = 3600 },
    { name = "second", seconds = 1 },
]
"#,
        )
        .unwrap();
        assert_eq!(config.unit_table().entries().len(), 2);
    }

    #[test]
    fn test_invalid_units_rejected() {
        let err = AppConfig::parse(
            r#"
units = [{ name = "second", seconds = 1 }, { name = "hour", seconds = 3600 }]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, DurationError::ConfigParseError(_)));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = AppConfig::parse("[input]\nmin = 10\nmax = 5\n").unwrap_err();
        assert!(matches!(err, DurationError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_value_clamped_into_bounds() {
        let config = AppConfig::parse("[input]\nvalue = 999\nmin = 10\nmax = 100\n").unwrap();
        assert_eq!(config.input.value, 100);
    }

    #[test]
    fn test_load_or_create_writes_template() {
        let dir = std::env::temp_dir().join(format!("duration-input-test-{}", std::process::id()));
        let path = dir.join(crate::paths::CONFIG_FILE_NAME);
        let _ = fs::remove_dir_all(&dir);

        let err = AppConfig::load_or_create_at(&path).unwrap_err();
        assert!(matches!(err, DurationError::ConfigNotFound { .. }));
        assert!(path.exists());

        let config = AppConfig::load_or_create_at(&path).unwrap();
        assert_eq!(config.input.value, 3600);

        let _ = fs::remove_dir_all(&dir);
    }
}
