use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Override for the item store file; `None` uses the default path
    /// under the config directory.
    #[serde(default)]
    pub data_path: Option<String>,
    /// Format due times as "02:30 PM" instead of "14:30".
    #[serde(default)]
    pub use_12_hour_clock: bool,
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".simplist-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Default location of the item store file.
    pub fn default_data_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("items.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Resolve the item store path, honoring the override.
    pub fn resolved_data_path(&self) -> Option<PathBuf> {
        match &self.data_path {
            Some(p) => Some(PathBuf::from(p)),
            None => Self::default_data_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.data_path.is_none());
        assert!(!config.use_12_hour_clock);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.data_path.is_none());
        assert!(!config.use_12_hour_clock);
    }

    #[test]
    fn test_data_path_override_wins() {
        let config = Config {
            data_path: Some("/tmp/tasks.json".to_string()),
            use_12_hour_clock: false,
        };
        assert_eq!(
            config.resolved_data_path(),
            Some(PathBuf::from("/tmp/tasks.json"))
        );
    }
}
