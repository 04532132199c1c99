//! Build configuration: the `app.yaml` document model, its locator, and the
//! merged effective [`RuntimeConfig`].

pub mod app_yaml;
pub mod finder;
pub mod runtime;

pub use app_yaml::AppYaml;
pub use finder::AppYamlFinder;
pub use runtime::RuntimeConfig;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the configuration document.
///
/// A missing document is never an error; the finder reports "not found"
/// before the parser is ever consulted.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The located document could not be read.
    #[error("failed to read configuration document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The located document exists but is not valid YAML.
    #[error("malformed configuration document {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
