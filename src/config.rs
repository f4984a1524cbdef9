use crate::codec::ParsePolicy;
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the record book file inside the home directory
pub const BOOK_FILE_NAME: &str = ".telephone_book";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Record book location, overriding `$HOME/.telephone_book`
    pub book_path: Option<PathBuf>,
    /// Rows printed between table separators (0 = never)
    pub records_per_block: usize,
    /// Abort on the first malformed line instead of skipping it
    pub strict_parse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            book_path: None,
            records_per_block: 3,
            strict_parse: false,
        }
    }
}

impl Config {
    /// Load config from the user's config directory, or defaults
    pub fn load() -> Self {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load config from `path`, degrading to defaults when absent or corrupt
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let parsed: BookResult<Self> = std::fs::read_to_string(path)
            .map_err(BookError::from)
            .and_then(|content| serde_json::from_str(&content).map_err(BookError::from));
        match parsed {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Config file {} unreadable or invalid, using defaults: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> BookResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn parse_policy(&self) -> ParsePolicy {
        if self.strict_parse {
            ParsePolicy::Strict
        } else {
            ParsePolicy::Skip
        }
    }

    /// Resolve the record book path. Looked up on every call.
    pub fn book_path(&self, override_path: Option<&Path>) -> BookResult<PathBuf> {
        if let Some(path) = override_path.or(self.book_path.as_deref()) {
            return Ok(path.to_path_buf());
        }
        default_book_path()
    }
}

/// `$HOME/.telephone_book`
pub fn default_book_path() -> BookResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(BOOK_FILE_NAME))
        .ok_or_else(|| BookError::Config("cannot determine the home directory".to_string()))
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("telbook").join("config.json"))
}
