//! Configuration module for `famgraph`

use crate::core::render::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the famgraph config directory
const DIR_VARIABLE: &str = "$FAMGRAPH";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory scanned for input CSV files
    #[serde(default)]
    pub data_dir: String,
    /// Directory receiving `.dot` files and rendered artifacts
    #[serde(default)]
    pub out_dir: String,
}

/// Renderer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Graphviz layout command (usually `dot`)
    #[serde(default)]
    pub command: String,
    /// Artifacts produced for every input, in order
    #[serde(default)]
    pub formats: Vec<OutputFormat>,
    /// Extension (without dot) of input files picked up from `data_dir`
    #[serde(default)]
    pub extension: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Renderer settings
    #[serde(default)]
    pub render: RenderConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override input directory
    pub data_dir: Option<String>,
    /// Override output directory
    pub out_dir: Option<String>,
    /// Override renderer command
    pub command: Option<String>,
    /// Override output formats
    pub formats: Option<Vec<OutputFormat>>,
}

impl Config {
    /// Keys accepted by [`get`](Self::get), [`set`](Self::set) and [`unset`](Self::unset)
    pub const KEYS: [&'static str; 8] = [
        "level",
        "file",
        "verbose",
        "data_dir",
        "out_dir",
        "command",
        "formats",
        "extension",
    ];

    /// Get the `$FAMGRAPH` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/famgraph`
    /// - macOS: `~/Library/Application Support/famgraph`
    /// - Windows: `%APPDATA%\famgraph`
    #[must_use]
    pub fn get_famgraph_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("famgraph")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are filled, so
    /// upgrading picks up new settings without touching user edits.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.data_dir.is_empty() && !defaults.paths.data_dir.is_empty() {
            self.paths.data_dir.clone_from(&defaults.paths.data_dir);
            changed = true;
        }
        if self.paths.out_dir.is_empty() && !defaults.paths.out_dir.is_empty() {
            self.paths.out_dir.clone_from(&defaults.paths.out_dir);
            changed = true;
        }

        if self.render.command.is_empty() && !defaults.render.command.is_empty() {
            self.render.command.clone_from(&defaults.render.command);
            changed = true;
        }
        if self.render.formats.is_empty() && !defaults.render.formats.is_empty() {
            self.render.formats.clone_from(&defaults.render.formats);
            changed = true;
        }
        if self.render.extension.is_empty() && !defaults.render.extension.is_empty() {
            self.render.extension.clone_from(&defaults.render.extension);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides only affect the current run; nothing is written back to disk.
    /// Only non-`None` values replace config values.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     out_dir: Some("charts".to_string()),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(data_dir) = &overrides.data_dir {
            self.paths.data_dir.clone_from(data_dir);
        }
        if let Some(out_dir) = &overrides.out_dir {
            self.paths.out_dir.clone_from(out_dir);
        }

        if let Some(command) = &overrides.command {
            self.render.command.clone_from(command);
        }
        if let Some(formats) = &overrides.formats {
            self.render.formats.clone_from(formats);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_famgraph_dir`](Self::get_famgraph_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_famgraph_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$FAMGRAPH` in a config value to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let famgraph_dir = Self::get_famgraph_dir();
            value.replace(DIR_VARIABLE, famgraph_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults; `$FAMGRAPH` is expanded in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_dir = Self::expand_variables(&config.paths.data_dir);
        config.paths.out_dir = Self::expand_variables(&config.paths.out_dir);

        Ok(config)
    }

    /// Load configuration from the compiled-in defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is not valid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create it from defaults on first run
    ///
    /// An existing file gets any newly added fields merged in from defaults (and is
    /// re-saved if that changed anything). Any read or parse failure falls back to
    /// the defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created, the config cannot
    /// be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `data_dir`, `out_dir`,
    /// `command`, `formats`, `extension`. Dashed spellings (`out-dir`) also work.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "data_dir" | "data-dir" => Some(self.paths.data_dir.clone()),
            "out_dir" | "out-dir" => Some(self.paths.out_dir.clone()),
            "command" => Some(self.render.command.clone()),
            "formats" => Some(Self::join_formats(&self.render.formats)),
            "extension" => Some(self.render.extension.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// `formats` takes a comma-separated list (`png,svg,html`). Call
    /// [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "data_dir" | "data-dir" => self.paths.data_dir = value.to_string(),
            "out_dir" | "out-dir" => self.paths.out_dir = value.to_string(),
            "command" => self.render.command = value.to_string(),
            "formats" => self.render.formats = Self::parse_formats(value)?,
            "extension" => {
                self.render.extension = value.trim_start_matches('.').to_string();
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "data_dir" | "data-dir" => self.paths.data_dir.clone_from(&defaults.paths.data_dir),
            "out_dir" | "out-dir" => self.paths.out_dir.clone_from(&defaults.paths.out_dir),
            "command" => self.render.command.clone_from(&defaults.render.command),
            "formats" => self.render.formats.clone_from(&defaults.render.formats),
            "extension" => self.render.extension.clone_from(&defaults.render.extension),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// Succeeds without doing anything if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Parse a comma-separated list of output formats
    ///
    /// # Errors
    /// Returns an error naming the first unknown format, or if the list is empty
    pub fn parse_formats(value: &str) -> Result<Vec<OutputFormat>, String> {
        let formats = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<OutputFormat>)
            .collect::<Result<Vec<_>, _>>()?;
        if formats.is_empty() {
            return Err("At least one output format is required".to_string());
        }
        Ok(formats)
    }

    fn join_formats(formats: &[OutputFormat]) -> String {
        formats
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_dir = \"{}\"", self.paths.data_dir)?;
        writeln!(f, "  out_dir = \"{}\"", self.paths.out_dir)?;

        writeln!(f, "\n[render]")?;
        writeln!(f, "  command = \"{}\"", self.render.command)?;
        writeln!(f, "  formats = \"{}\"", Self::join_formats(&self.render.formats))?;
        writeln!(f, "  extension = \"{}\"", self.render.extension)?;

        Ok(())
    }
}
