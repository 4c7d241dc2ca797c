pub mod commit;
pub mod config;
pub mod error;
pub mod events;
pub mod format;
pub mod model;
pub mod paths;
pub mod select;
pub mod time;
pub mod units;

pub use commit::{commit, Bounds, CommitOutcome, DEFAULT_MAX_SECONDS, DEFAULT_MIN_SECONDS};
pub use config::{AppConfig, InputConfig, LoggingConfig, WindowConfig, CONFIG_TEMPLATE};

/// Re-export toml error type for config parsing error handling
pub use toml::de::Error as TomlParseError;
pub use error::DurationError;
pub use events::{ChangeBus, DurationEvent};
pub use format::{capitalize, describe, format_magnitude, pluralize, unit_label};
pub use model::{parse_magnitude, DurationModel, DurationView, PendingEdit, UnitOption};
pub use paths::{
    config_dir, config_path, log_file_path, theme_path, CONFIG_DIR_NAME, CONFIG_FILE_NAME,
    LOG_FILE_NAME, THEME_FILE_NAME,
};
pub use select::{select_unit, UnitSelection};
pub use time::SecondsExt;
pub use units::{UnitEntry, UnitTable};
