use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;
use crate::filter::DEFAULT_MAX_DISTANCE;
use crate::links::DEFAULT_MAPS_URL;
use crate::types::{Coordinates, MapBounds};

/// North Campus, where the map opens.
const HOME: Coordinates = Coordinates {
    latitude: 42.295949815364075,
    longitude: -83.71039687364726,
};

/// Application settings, read from a TOML file. Every field has a default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub data: DataConfig,
    pub map: MapConfig,
    pub search: SearchConfig,
    pub filters: FiltersConfig,
    pub links: LinksConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// CSV table of lots.
    pub lots: PathBuf,
    /// CSV gazetteer for the location search.
    pub places: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            lots: PathBuf::from("data/lots.csv"),
            places: PathBuf::from("data/places.csv"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub home: Coordinates,
    pub zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            home: HOME,
            zoom: 15.,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub bounds: MapBounds,
    pub max_suggestions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            bounds: MapBounds::default(),
            max_suggestions: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiltersConfig {
    pub max_distance: f64,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub base_url: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MAPS_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`, `off`.
    pub level: String,
    pub to_file: bool,
    pub file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            to_file: false,
            file: None,
        }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter, DirectoryError> {
        self.level
            .parse()
            .map_err(|_| DirectoryError::Config(format!("unknown log level '{}'", self.level)))
    }
}

impl DirectoryConfig {
    pub fn from_toml(text: &str) -> Result<Self, DirectoryError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|source| DirectoryError::ConfigRead {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml(&text)
    }

    /// Resolves relative data paths against `base`, normally the config file's directory.
    pub fn relative_to(mut self, base: &Path) -> Self {
        if self.data.lots.is_relative() {
            self.data.lots = base.join(&self.data.lots);
        }
        if self.data.places.is_relative() {
            self.data.places = base.join(&self.data.places);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DirectoryConfig::from_toml("").unwrap();
        assert_eq!(config, DirectoryConfig::default());
        assert_eq!(config.filters.max_distance, 5.0);
        assert_eq!(config.map.home, HOME);
    }

    #[test]
    fn test_partial_config() {
        let config = DirectoryConfig::from_toml(
            r#"
            [map]
            zoom = 13.5

            [search]
            max_suggestions = 3

            [log]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.map.zoom, 13.5);
        assert_eq!(config.map.home, HOME);
        assert_eq!(config.search.max_suggestions, 3);
        assert_eq!(config.search.bounds, MapBounds::default());
        assert_eq!(config.log.level_filter().unwrap(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_bad_config() {
        assert!(matches!(
            DirectoryConfig::from_toml("[map]\nzoom = \"far\""),
            Err(DirectoryError::ConfigDecode(_))
        ));
        let log = LogConfig {
            level: "loud".to_string(),
            ..Default::default()
        };
        assert!(log.level_filter().is_err());
    }

    #[test]
    fn test_missing_config_file_keeps_source() {
        let err = DirectoryConfig::from_path("/nonexistent/parking/directory.toml").unwrap_err();
        match &err {
            DirectoryError::ConfigRead { path, source } => {
                assert_eq!(path, "/nonexistent/parking/directory.toml");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_relative_to() {
        let config = DirectoryConfig::default().relative_to(Path::new("/srv/parking"));
        assert_eq!(config.data.lots, PathBuf::from("/srv/parking/data/lots.csv"));
    }
}
