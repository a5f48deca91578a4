use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".roster.yml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    Mongodb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub backend: StoreBackend,

    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_database")]
    pub database: String,

    #[serde(default)]
    pub collections: CollectionNames,
}

fn default_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_database() -> String {
    "school".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            uri: default_uri(),
            database: default_database(),
            collections: CollectionNames::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionNames {
    #[serde(default = "default_students")]
    pub students: String,

    #[serde(default = "default_teachers")]
    pub teachers: String,

    #[serde(default = "default_courses")]
    pub courses: String,
}

fn default_students() -> String {
    "students".to_string()
}

fn default_teachers() -> String {
    "teachers".to_string()
}

fn default_courses() -> String {
    "courses".to_string()
}

impl Default for CollectionNames {
    fn default() -> Self {
        Self {
            students: default_students(),
            teachers: default_teachers(),
            courses: default_courses(),
        }
    }
}

impl RosterConfig {
    /// Load the nearest config file at or above `start_path`, or defaults if there is none.
    pub fn load(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RosterConfig = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(RosterError::AlreadyInitialized(path.display().to_string()));
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, RosterConfig::default());
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.bind_address(), "127.0.0.1:4000");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "store:\n  backend: mongodb\n  database: campus\n",
        )
        .unwrap();

        let config = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.store.backend, StoreBackend::Mongodb);
        assert_eq!(config.store.database, "campus");
        assert_eq!(config.store.uri, "mongodb://localhost:27017");
        assert_eq!(config.store.collections.courses, "courses");
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_config_found_in_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "server:\n  port: 8080\n").unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = RosterConfig::load(&nested).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_save_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        RosterConfig::default().save(&path).unwrap();
        assert_eq!(RosterConfig::load_from(&path).unwrap(), RosterConfig::default());

        let err = RosterConfig::default().save(&path).unwrap_err();
        assert!(matches!(err, RosterError::AlreadyInitialized(_)));
    }

    #[test]
    fn test_invalid_backend_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "store:\n  backend: postgres\n").unwrap();
        assert!(matches!(
            RosterConfig::load_from(&path),
            Err(RosterError::Yaml(_))
        ));
    }
}
