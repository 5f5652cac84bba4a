use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::models::City;
use crate::utils::path::{expand_tilde, resolve_under};

/// Runtime configuration, loaded once at start-up and never mutated afterwards
/// (apart from the command-line overrides applied in `run()`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the city CSV files.
    pub data_dir: String,
    /// Rows shown per page by the raw viewer.
    pub page_size: usize,
    pub separator_char: String,
    /// City key ("chicago", "new york city", "washington") → CSV file name.
    pub cities: BTreeMap<String, String>,
}

fn default_cities() -> BTreeMap<String, String> {
    City::ALL
        .iter()
        .map(|c| (c.key().to_string(), c.default_file_name().to_string()))
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: ".".to_string(),
            page_size: 5,
            separator_char: "-".to_string(),
            cities: default_cities(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (~/.bikeshare)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bikeshare")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bikeshare.conf")
    }

    /// Load configuration from `path` (or the standard file), defaults if not found
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.normalize_cities()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Re-key `cities` by canonical city key ("Chicago" → "chicago").
    pub fn normalize_cities(&mut self) -> AppResult<()> {
        let mut cities = BTreeMap::new();
        for (key, file) in std::mem::take(&mut self.cities) {
            let city = City::from_input(&key).ok_or_else(|| AppError::UnknownCity(key.clone()))?;
            if cities.insert(city.key().to_string(), file).is_some() {
                return Err(AppError::Config(format!(
                    "city '{}' is listed more than once",
                    city.key()
                )));
            }
        }
        self.cities = cities;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be at least 1".into()));
        }
        if let Some(unknown) = self
            .cities
            .keys()
            .find(|k| City::from_input(k).map(|c| c.key()) != Some(k.as_str()))
        {
            return Err(AppError::UnknownCity(unknown.clone()));
        }
        Ok(())
    }

    /// Write the default configuration to `path` (or the standard file).
    /// An existing file is left untouched unless `force` is set.
    pub fn init(path: Option<&Path>, force: bool) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(&path, yaml)?;
        Ok(path)
    }

    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Full path of the CSV file backing `city`.
    pub fn city_file(&self, city: City) -> PathBuf {
        let name = self
            .cities
            .get(city.key())
            .map(String::as_str)
            .unwrap_or_else(|| city.default_file_name());
        resolve_under(&self.data_dir(), name)
    }

    pub fn separator_line(&self) -> String {
        crate::utils::formatting::separator(&self.separator_char, 40)
    }
}
