use crate::commands::top::DEFAULT_COUNT;
use crate::error::{AirlistError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CONFIG_FILENAME: &str = "config.json";
const PROJECT_CONFIG_DIR: &str = ".airlist";
const DEFAULT_DATA_FILE: &str = "data/listings.csv";
const DEFAULT_HISTORY_FILE: &str = "data/.airbnb_cli_history";
const DEFAULT_HISTORY_SIZE: usize = 50;

/// Configuration for airlist, stored in `.airlist/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AirlistConfig {
    /// CSV file holding the listings
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Plain text file with one previously run command per line
    #[serde(default = "default_history_file")]
    pub history_file: PathBuf,

    /// Number of listings shown when `list-top` gets no count
    #[serde(default = "default_count")]
    pub default_count: usize,

    /// How many history entries are offered for recall in the shell
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_history_file() -> PathBuf {
    PathBuf::from(DEFAULT_HISTORY_FILE)
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_history_size() -> usize {
    DEFAULT_HISTORY_SIZE
}

impl Default for AirlistConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            history_file: default_history_file(),
            default_count: DEFAULT_COUNT,
            history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

impl AirlistConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AirlistError::Io)?;
        let mut config: AirlistConfig =
            serde_json::from_str(&content).map_err(AirlistError::Serialization)?;

        if config.default_count == 0 {
            warn!(
                path = %config_path.display(),
                "default_count must be positive, using {}", DEFAULT_COUNT
            );
            config.default_count = DEFAULT_COUNT;
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AirlistError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AirlistError::Serialization)?;
        fs::write(config_path, content).map_err(AirlistError::Io)?;
        Ok(())
    }

    /// Resolves the effective config for a working directory.
    ///
    /// Looks in `<cwd>/.airlist/` first, then the user config directory, then
    /// falls back to defaults. A broken config file is reported and skipped.
    /// Relative paths in the result are anchored at `cwd`.
    pub fn resolve(cwd: &Path) -> Self {
        let mut candidates = vec![cwd.join(PROJECT_CONFIG_DIR)];
        if let Some(dirs) = ProjectDirs::from("com", "airlist", "airlist") {
            candidates.push(dirs.config_dir().to_path_buf());
        }

        let config = candidates
            .iter()
            .filter(|dir| dir.join(CONFIG_FILENAME).exists())
            .find_map(|dir| match Self::load(dir) {
                Ok(config) => {
                    debug!(dir = %dir.display(), "using config");
                    Some(config)
                }
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "ignoring unreadable config");
                    None
                }
            })
            .unwrap_or_default();

        config.anchored_at(cwd)
    }

    fn anchored_at(mut self, cwd: &Path) -> Self {
        if self.data_file.is_relative() {
            self.data_file = cwd.join(&self.data_file);
        }
        if self.history_file.is_relative() {
            self.history_file = cwd.join(&self.history_file);
        }
        self
    }
}
