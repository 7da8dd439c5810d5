use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the school site content store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one blob file per collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    #[serde(default)]
    pub write_back: WriteBackPolicy,

    #[serde(default)]
    pub on_decode_error: DecodePolicy,
}

/// When a mutated collection is written back to the blob store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteBackPolicy {
    /// Persist after every mutation, including an emptied collection
    #[default]
    Always,
    /// Never persist an empty Pages/Posts/Media collection.
    /// Deleting every record then reverts to the seed on reload.
    SkipEmptySeeded,
}

/// What to do when a stored blob cannot be decoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// Log a warning and install the collection's seed
    #[default]
    FallbackToSeed,
    /// Refuse to open the store
    Fail,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            key_prefix: default_key_prefix(),
            write_back: WriteBackPolicy::default(),
            on_decode_error: DecodePolicy::default(),
        }
    }
}

impl StorageConfig {
    /// Configured data directory, or the platform data dir
    pub fn resolved_data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir(),
        }
    }
}

fn default_key_prefix() -> String {
    "school_cms".to_string()
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("org", "school-cms", "school-cms")
}

fn default_data_dir() -> PathBuf {
    if let Some(dirs) = project_dirs() {
        dirs.data_dir().to_path_buf()
    } else {
        PathBuf::from("~/.school-cms/data")
    }
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Config::default();
            config.save_to(&path)?;
            Ok(config)
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = project_dirs() {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.school-cms/config.toml")
        }
    }
}
