//! Guide configuration.
//!
//! Loaded from `~/.adm-guide/config.toml`; every key is optional and a missing
//! file means defaults. `ADM_HOME` moves the whole directory, which keeps
//! tests and separate profiles apart.
//!
//! ```toml
//! data-dir = "/home/me/notes/adm"
//! log-filter = "adm_guide=debug"
//!
//! [wheel]
//! radius = 140.0
//! center-x = 180.0
//! center-y = 180.0
//! ```

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::wheel::{Geometry, Point};

/// Environment variable overriding the guide's home directory.
pub const HOME_ENV: &str = "ADM_HOME";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine home directory; set ADM_HOME")]
    NoHome,

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Guide configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Where the database and log file live. Defaults to the guide's home.
    pub data_dir: Option<PathBuf>,

    /// `tracing` filter directive. `ADM_LOG` takes precedence.
    pub log_filter: Option<String>,

    #[serde(default)]
    pub wheel: WheelConfig,
}

/// Overrides for the wheel's dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct WheelConfig {
    pub radius: Option<f64>,
    pub center_x: Option<f64>,
    pub center_y: Option<f64>,
}

impl Config {
    /// Load config from the guide's home, or defaults if the file is missing.
    pub fn load() -> Result<Self, ConfigError> {
        let home = Self::home().ok_or(ConfigError::NoHome)?;
        let mut config = Self::load_from(&home.join("config.toml"))?;
        if config.data_dir.is_none() {
            config.data_dir = Some(home);
        }
        Ok(config)
    }

    /// Load config from a specific file, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The guide's home: `$ADM_HOME`, else `~/.adm-guide`.
    pub fn home() -> Option<PathBuf> {
        if let Ok(dir) = env::var(HOME_ENV)
            && !dir.is_empty()
        {
            return Some(PathBuf::from(dir));
        }
        dirs::home_dir().map(|h| h.join(".adm-guide"))
    }

    /// The data directory, once resolved by [`Config::load`].
    fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// The `SQLite` database path.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.data_dir().join("guide.sqlite")
    }

    /// Where the TUI writes its log.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("adm.log")
    }

    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Wheel geometry with any configured overrides applied.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        let default = Geometry::default();
        Geometry {
            radius: self.wheel.radius.unwrap_or(default.radius),
            center: Point::new(
                self.wheel.center_x.unwrap_or(default.center.x),
                self.wheel.center_y.unwrap_or(default.center.y),
            ),
            ..default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn missing_file_means_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter(), "warn");
        assert_eq!(config.geometry(), Geometry::default());
    }

    #[test]
    fn reads_kebab_case_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "data-dir = \"/tmp/adm\"\nlog-filter = \"debug\"\n\n[wheel]\nradius = 100.0\ncenter-y = 120.0\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.database_path(), PathBuf::from("/tmp/adm/guide.sqlite"));
        assert_eq!(config.log_filter(), "debug");
        let geometry = config.geometry();
        assert!((geometry.radius - 100.0).abs() < f64::EPSILON);
        assert!((geometry.center.x - 180.0).abs() < f64::EPSILON);
        assert!((geometry.center.y - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_toml_names_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data-dir = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "colour = \"blue\"").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
