use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;

/// Defaults for output shaping, read from the user's config.toml.
/// CLI flags can only turn a mode on, never off, so a config default of
/// `true` always wins.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grouping: bool,
    #[serde(default)]
    pub compact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grouping: false,
            compact: false,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("com", "flowcount", "flowcount") {
            let config_dir = proj_dirs.config_dir();
            let config_path = config_dir.join("config.toml");

            if config_path.exists() {
                if let Ok(content) = fs::read_to_string(config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Config::default()
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "flowcount", "flowcount") {
            let config_dir = proj_dirs.config_dir();
            fs::create_dir_all(config_dir)?;

            let config_path = config_dir.join("config.toml");
            let content = toml::to_string_pretty(self)?;
            fs::write(config_path, content)?;
        }
        Ok(())
    }
}
