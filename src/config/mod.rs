//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including theme preferences, the listing page size, the notification
//! duration and hotkey bindings.

mod error;
mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{
    build_footer_text, default_hotkeys, format_hotkey_display, get_action_for_event,
    get_action_for_special_mode, matches_hotkey, Hotkey, HotkeyAction, ViewHotkeys,
};

use crate::error::AppError;
use crate::inventory::{DEFAULT_PAGE_SIZE, PAGE_SIZES};
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/inventario-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub page_size: usize,
    pub notification_ms: u64,
    pub hotkeys: ViewHotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
    #[serde(default)]
    pub hotkeys: ViewHotkeys,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_notification_ms() -> u64 {
    6000
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding default values and no file path.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            page_size: default_page_size(),
            notification_ms: default_notification_ms(),
            hotkeys: ViewHotkeys::default(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, one is written with the
    /// default values.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
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

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.clone().ok_or(ConfigError::FilePathNotSet)?;

        if !file_path.exists() {
            info!("Creating configuration file {}...", file_path.display());
            return self.save();
        }

        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            message: format!("IO error: {}", e),
        })?;
        self.apply(&contents)?;
        debug!("Loaded configuration from {}.", file_path.display());
        Ok(())
    }

    /// Overwrite the current values with the ones in the given YAML document.
    ///
    fn apply(&mut self, contents: &str) -> Result<(), AppError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.theme_name = data.theme_name;
        self.page_size = if PAGE_SIZES.contains(&data.page_size) {
            data.page_size
        } else {
            warn!(
                "Unsupported page size {} in configuration, using {}",
                data.page_size, DEFAULT_PAGE_SIZE
            );
            DEFAULT_PAGE_SIZE
        };
        self.notification_ms = data.notification_ms;
        self.hotkeys = data.hotkeys;
        self.hotkeys.fill_missing(&default_hotkeys());
        Ok(())
    }

    /// Serialize the configuration data and write it to the disk, returning
    /// any unrecoverable errors.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            page_size: self.page_size,
            notification_ms: self.notification_ms,
            hotkeys: self.hotkeys.clone(),
        };
        let content = serde_yaml::to_string(&data)
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

    /// Return how long toasts stay open.
    ///
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "inventario-config-{}-{}-{}",
            label,
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn new_holds_defaults() {
        let config = Config::new();
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.page_size, 6);
        assert_eq!(config.notification_duration(), Duration::from_millis(6000));
        assert!(config.file_path().is_none());
    }

    #[test]
    fn save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn load_creates_file_with_defaults() {
        let dir = scratch_dir("create");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        let file_path = dir.join(FILE_NAME);
        assert!(file_path.exists());
        assert_eq!(config.file_path(), Some(file_path.as_path()));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn save_then_load_round_trips_values() {
        let dir = scratch_dir("round-trip");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.theme_name = "dracula".to_string();
        config.page_size = 12;
        config.notification_ms = 2500;
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.theme_name, "dracula");
        assert_eq!(reloaded.page_size, 12);
        assert_eq!(reloaded.notification_ms, 2500);
        assert_eq!(reloaded.hotkeys, default_hotkeys());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reads_existing_file() {
        let dir = scratch_dir("existing");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "theme_name: dracula\npage_size: 3\nnotification_ms: 1500\nhotkeys:\n  product_form:\n    submit_form:\n      code: char\n      char: s\n      modifiers:\n        control: true\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.theme_name, "dracula");
        assert_eq!(config.page_size, 3);
        assert_eq!(config.notification_duration(), Duration::from_millis(1500));
        assert_eq!(
            config.hotkeys.product_form.get(&HotkeyAction::SubmitForm),
            Some(&Hotkey {
                code: crossterm::event::KeyCode::Char('s'),
                modifiers: crossterm::event::KeyModifiers::CONTROL,
            })
        );
        assert_eq!(
            config.hotkeys.product_form.get(&HotkeyAction::InsertNewline),
            default_hotkeys().product_form.get(&HotkeyAction::InsertNewline)
        );
        assert_eq!(config.hotkeys.product_list, default_hotkeys().product_list);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn apply_fills_missing_fields_with_defaults() {
        let mut config = Config::new();
        config.apply("theme_name: rose-pine-dawn\n").unwrap();
        assert_eq!(config.theme_name, "rose-pine-dawn");
        assert_eq!(config.page_size, 6);
        assert_eq!(config.notification_ms, 6000);
    }

    #[test]
    fn apply_rejects_unsupported_page_size() {
        let mut config = Config::new();
        config.apply("page_size: 7\n").unwrap();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn load_warning_reaches_installed_logger() {
        let buffer = crate::logger::LogBuffer::default();
        crate::logger::CustomLogger::init(buffer.clone(), log::LevelFilter::Warn).unwrap();

        let dir = scratch_dir("warning");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "page_size: 7\n").unwrap();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();

        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(buffer
            .entries()
            .iter()
            .any(|entry| entry.contains("Unsupported page size 7")));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn apply_reports_malformed_yaml() {
        let mut config = Config::new();
        let result = config.apply("page_size: [oops");
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
    }
}
