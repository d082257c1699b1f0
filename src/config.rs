use crate::error::{Result, SiteError};
use crate::router::ScrollTiming;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub content: ContentConfig,
    pub scroll: ScrollTiming,
    pub log: LogConfig,
}

/// Native window configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial width (in points)
    pub width: f32,
    /// Initial height (in points)
    pub height: f32,
    /// Window title before any page sets its own
    pub title: String,
}

/// Where content comes from
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ContentConfig {
    /// Root that `/images/...` paths resolve against
    pub public_dir: PathBuf,
    /// Generator output to load instead of the bundled dataset
    pub generated_dir: Option<PathBuf>,
    /// Try the remote providers named in the environment
    pub remote: bool,
}

/// Logging configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter when RUST_LOG is unset: "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 1280.0,
            height: 860.0,
            title: "Mukherji Architects Milano".to_string(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig {
            public_dir: PathBuf::from("public"),
            generated_dir: None,
            remote: true,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window: WindowConfig::default(),
            content: ContentConfig::default(),
            scroll: ScrollTiming::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "mukherji-site")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// The browser has no config directory.
    #[cfg(target_arch = "wasm32")]
    pub fn config_path() -> Option<PathBuf> {
        None
    }

    /// Load configuration from file, or return defaults if it is missing or broken
    pub fn load() -> Self {
        Self::load_or_default(Self::config_path())
    }

    fn load_or_default(path: Option<PathBuf>) -> Self {
        let Some(path) = path else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using default configuration");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
        toml::from_str(&contents).map_err(|e| SiteError::toml(path.display().to_string(), e))
    }

    /// Save configuration to the platform config directory
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path().ok_or(SiteError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|e| SiteError::io(path, e))
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<PathBuf> {
        let path = Self::config_path().ok_or(SiteError::NoConfigDir)?;
        if !path.exists() {
            Config::default().save_to(&path)?;
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.window.width, 1280.0);
        assert_eq!(config.content.public_dir, PathBuf::from("public"));
        assert!(config.content.remote);
        assert_eq!(config.scroll.first_attempt, Duration::from_millis(100));
        assert_eq!(config.scroll.retry_delay, Duration::from_millis(400));
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        assert!(toml_str.contains("first_attempt = 100"));
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[scroll]\nfirst_attempt = 50\nretry_delay = 250\n").unwrap();
        assert_eq!(config.scroll.first_attempt, Duration::from_millis(50));
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");
        let mut config = Config::default();
        config.content.generated_dir = Some(PathBuf::from("src/data"));
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_broken_file_is_toml_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[window\nwidth = ").unwrap();
        assert!(matches!(Config::load_from(&path), Err(SiteError::Toml { .. })));
    }

    #[test]
    fn test_no_config_dir_falls_back_to_defaults() {
        assert_eq!(Config::load_or_default(None), Config::default());
    }

    #[test]
    fn test_broken_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[scroll]\nfirst_attempt = \"soon\"\n").unwrap();
        assert_eq!(Config::load_or_default(Some(path)), Config::default());
        let missing = dir.path().join("absent.toml");
        assert_eq!(Config::load_or_default(Some(missing)), Config::default());
    }
}
