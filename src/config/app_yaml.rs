//! Document model for the `app.yaml` configuration file.

use super::runtime::RuntimeConfig;
use super::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Parsed configuration document.
///
/// Only the `runtime_config` section is consumed here; unknown top-level
/// fields (deployment metadata and the like) are ignored so the document can
/// carry settings for other tools.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppYaml {
    runtime_config: Option<RuntimeConfig>,
}

impl AppYaml {
    /// The all-defaults document used when no `app.yaml` was found.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses the document at `path`.
    ///
    /// Fails only on I/O errors or malformed YAML. Callers decide how to
    /// handle a missing file via [`super::AppYamlFinder`] before calling
    /// this.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty file is a valid, all-defaults document.
        if contents.trim().is_empty() {
            return Ok(Self::empty());
        }

        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The document's runtime-configuration section, defaulted when absent.
    pub fn runtime_config(&self) -> RuntimeConfig {
        self.runtime_config.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_yaml(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("app.yaml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parses_runtime_config_section() {
        let dir = TempDir::new().unwrap();
        let path = write_yaml(
            &dir,
            "env: flex\nruntime_config:\n  jdk: openjdk8\n  build_script: custom mvn goals\n",
        );

        let doc = AppYaml::from_path(&path).unwrap();
        let config = doc.runtime_config();
        assert_eq!(config.jdk.as_deref(), Some("openjdk8"));
        assert_eq!(config.build_script.as_deref(), Some("custom mvn goals"));
    }

    #[test]
    fn test_document_without_runtime_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_yaml(&dir, "env: flex\n");

        let doc = AppYaml::from_path(&path).unwrap();
        assert_eq!(doc.runtime_config(), RuntimeConfig::default());
    }

    #[test]
    fn test_empty_file_is_the_empty_document() {
        let dir = TempDir::new().unwrap();
        let path = write_yaml(&dir, "");

        let doc = AppYaml::from_path(&path).unwrap();
        assert_eq!(doc.runtime_config(), RuntimeConfig::default());
    }

    #[test]
    fn test_null_runtime_config_section_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_yaml(&dir, "runtime_config:\n");

        let doc = AppYaml::from_path(&path).unwrap();
        assert_eq!(doc.runtime_config(), RuntimeConfig::default());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_yaml(&dir, "runtime_config: [not: a map\n");

        let err = AppYaml::from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = AppYaml::from_path(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
