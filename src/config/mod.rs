//! Configuration for space-traveling.
//!
//! Configuration is read from `~/.config/space-traveling/config.toml`.
//! If the file doesn't exist, a default configuration with comments is created.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cms::{DEFAULT_PAGE_SIZE, DEFAULT_PATHS_LIMIT};
use crate::comments::CommentsConfig;
use crate::fetcher::http_fetcher::DEFAULT_TIMEOUT_SECS;
use crate::reading_time::WORDS_PER_MINUTE;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub feed: FeedConfig,
    pub reading: ReadingConfig,
    pub comments: CommentsConfig,
}

/// Content API access.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    pub access_token: Option<String>,
    pub page_size: u32,
    pub paths_limit: u32,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://spacetraveling.cdn.prismic.io/api/v2".to_string(),
            access_token: None,
            page_size: DEFAULT_PAGE_SIZE,
            paths_limit: DEFAULT_PATHS_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Skip posts whose id is already listed when loading more.
    pub dedupe_ids: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    pub words_per_minute: u32,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            words_per_minute: WORDS_PER_MINUTE,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/space-traveling/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("space-traveling").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn default_config_content() -> &'static str {
        r##"# space-traveling configuration

[api]
# Content repository API root
endpoint = "https://spacetraveling.cdn.prismic.io/api/v2"

# Access token for private repositories
# access_token = ""

# Posts per listing page
page_size = 1

# Post routes to pre-render
paths_limit = 10

# Request timeout in seconds
timeout_secs = 10

[feed]
# Skip posts already listed when loading more
dedupe_ids = false

[reading]
# Reading speed used for the estimate on post pages
words_per_minute = 200

[comments]
# GitHub repository (owner/name) holding comment issues; unset disables comments
# repo = "owner/space-traveling-comments"
issue_term = "pathname"
theme = "github-dark"
"##
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
