//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the submission endpoint, tracker tunables, accents and hotkeys.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, HotkeyMode, ModeHotkeys};

use crate::error::AppError;
use crate::tracker::TrackerConfig;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/inexia-tui";
const DEFAULT_ACCENT: &str = "#8b5cf6";

/// Where and how inquiries are delivered.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Endpoint receiving the inquiry as JSON. Inquiries are only logged
    /// when unset.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Minimum time a submission takes, in milliseconds.
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        SubmissionConfig {
            endpoint: None,
            min_delay_ms: default_min_delay_ms(),
        }
    }
}

impl SubmissionConfig {
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.min_delay_ms)
    }
}

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub log_level: String,
    pub submission: SubmissionConfig,
    pub tracker: TrackerConfig,
    pub notice_seconds: u64,
    pub accent: String,
    pub accents: BTreeMap<String, String>,
    pub hotkeys: ModeHotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default = "default_notice_seconds")]
    pub notice_seconds: u64,
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default = "default_accents")]
    pub accents: BTreeMap<String, String>, // section id -> #rrggbb
    #[serde(default)]
    pub hotkeys: ModeHotkeys,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_min_delay_ms() -> u64 {
    1000
}

fn default_notice_seconds() -> u64 {
    4
}

fn default_accent() -> String {
    DEFAULT_ACCENT.to_string()
}

fn default_accents() -> BTreeMap<String, String> {
    ["about", "projects", "technology", "team", "contact"]
        .into_iter()
        .map(|id| (id.to_string(), DEFAULT_ACCENT.to_string()))
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            log_level: default_log_level(),
            submission: SubmissionConfig::default(),
            tracker: TrackerConfig::default(),
            notice_seconds: default_notice_seconds(),
            accent: default_accent(),
            accents: default_accents(),
            hotkeys: ModeHotkeys::default(),
            file_path: None,
        }
    }

    /// Load the configuration from the disk using the custom directory if
    /// provided. A missing file is created with the defaults.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.apply(data);
            self.validate()?;
        } else {
            self.save()?;
        }
        Ok(())
    }

    fn apply(&mut self, data: FileSpec) {
        self.theme_name = data.theme_name;
        self.log_level = data.log_level;
        self.submission = data.submission;
        self.tracker = data.tracker;
        self.notice_seconds = data.notice_seconds;
        self.accent = data.accent;
        self.accents = data.accents;
        self.hotkeys = data.hotkeys;
    }

    fn to_file_spec(&self) -> FileSpec {
        FileSpec {
            theme_name: self.theme_name.clone(),
            log_level: self.log_level.clone(),
            submission: self.submission.clone(),
            tracker: self.tracker,
            notice_seconds: self.notice_seconds,
            accent: self.accent.clone(),
            accents: self.accents.clone(),
            hotkeys: self.hotkeys.clone(),
        }
    }

    /// Reject values the application cannot work with.
    ///
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log_level_filter()?;
        let band = &self.tracker.band;
        for (key, margin) in [
            ("tracker.band.top_margin", band.top_margin),
            ("tracker.band.bottom_margin", band.bottom_margin),
        ] {
            if !(0.0..=1.0).contains(&margin) {
                return Err(ConfigError::InvalidValue {
                    key,
                    message: format!("{} is not between 0 and 1", margin),
                });
            }
        }
        if self.tracker.nav_offset < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "tracker.nav_offset",
                message: "must not be negative".to_string(),
            });
        }
        Ok(())
    }

    /// Parse the configured log level.
    ///
    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| ConfigError::InvalidValue {
            key: "log_level",
            message: format!("unknown level '{}'", self.log_level),
        })
    }

    pub fn notice_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.notice_seconds as i64)
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let content = serde_yaml::to_string(&self.to_file_spec())
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
