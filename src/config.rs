//! Configuration for the amount entry tool
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/recibo/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! The numeral grammar itself is not configurable; only display chrome and
//! logging live here.

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Currency symbol shown as the input prefix (display only)
    pub symbol: String,

    /// Placeholder shown while the field is empty
    pub placeholder: String,

    /// Default log level when RUST_LOG is unset
    pub log_level: String,

    /// Whether to also write logs to rotating files
    pub log_to_file: bool,

    /// Directory for log files
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            placeholder: "0,00".to_string(),
            log_level: "info".to_string(),
            log_to_file: false,
            log_dir: PathBuf::from("./logs"),
        }
    }
}

/// Config as deserialized from the TOML file; every field optional so a
/// partial file merges over the defaults
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub symbol: Option<String>,
    pub placeholder: Option<String>,
    pub log_level: Option<String>,
    pub log_to_file: Option<bool>,
    pub log_dir: Option<String>,
}

impl Config {
    /// Path to the config file
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("recibo").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist, so users can
    /// discover the available options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Write template (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Config error in {}: {}", path.display(), e);
                    eprintln!("Tip: run `recibo config --reset` to regenerate the file.");
                    std::process::exit(1);
                }
            },
            Err(_) => FileConfig::default(),
        }
    }

    /// Load configuration: env > file > default
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        let defaults = Self::default();

        let symbol = std::env::var("RECIBO_SYMBOL")
            .ok()
            .or(file.symbol)
            .unwrap_or(defaults.symbol);

        let placeholder = file.placeholder.unwrap_or(defaults.placeholder);

        let log_level = std::env::var("RECIBO_LOG")
            .ok()
            .or(file.log_level)
            .unwrap_or(defaults.log_level);

        let log_to_file = std::env::var("RECIBO_LOG_FILE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .ok()
            .or(file.log_to_file)
            .unwrap_or(defaults.log_to_file);

        let log_dir = std::env::var("RECIBO_LOG_DIR")
            .ok()
            .or(file.log_dir)
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        Self {
            symbol,
            placeholder,
            log_level,
            log_to_file,
            log_dir,
        }
    }

    /// Render the effective configuration as a TOML document; single source
    /// of truth for the config file format
    pub fn to_toml(&self) -> String {
        format!(
            r#"# recibo configuration
# Delete any line to fall back to the built-in default.

# Currency symbol shown before the amount field (display only)
symbol = "{}"

# Placeholder shown while the field is empty
placeholder = "{}"

# Log level when RUST_LOG is unset: trace, debug, info, warn, error
log_level = "{}"

# Also write logs to rotating files in log_dir
log_to_file = {}
log_dir = "{}"
"#,
            self.symbol,
            self.placeholder,
            self.log_level,
            self.log_to_file,
            self.log_dir.display(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.symbol, "R$");
        assert_eq!(config.placeholder, "0,00");
        assert!(!config.log_to_file);
    }

    #[test]
    fn test_partial_file_merges_over_defaults() {
        let file: FileConfig = toml::from_str(r#"symbol = "US$""#).unwrap();
        assert_eq!(file.symbol.as_deref(), Some("US$"));
        assert!(file.placeholder.is_none());
    }

    #[test]
    fn test_template_round_trips() {
        let template = Config::default().to_toml();
        let parsed: FileConfig = toml::from_str(&template).unwrap();
        assert_eq!(parsed.symbol.as_deref(), Some("R$"));
        assert_eq!(parsed.log_to_file, Some(false));
    }
}
