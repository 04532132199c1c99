//! Locates the configuration document inside a workspace.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Conventional `app.yaml` locations, checked in order.
pub const DEFAULT_APP_YAML_LOCATIONS: &[&str] = &["app.yaml", "src/main/appengine/app.yaml"];

/// Finds the configuration document within a workspace.
///
/// Absence is reported as `None`, never as an error; a run without a
/// document simply uses built-in defaults.
#[derive(Debug, Default)]
pub struct AppYamlFinder {
    override_path: Option<PathBuf>,
}

impl AppYamlFinder {
    /// `override_path`, when given, is resolved relative to the workspace
    /// root and replaces the conventional search locations entirely.
    pub fn new(override_path: Option<PathBuf>) -> Self {
        Self { override_path }
    }

    /// Returns the absolute path of the located document, if any.
    pub fn find_app_yaml(&self, workspace: &Path) -> Option<PathBuf> {
        if let Some(relative) = &self.override_path {
            let candidate = workspace.join(relative);
            if candidate.is_file() {
                debug!("using configured app.yaml at {}", relative.display());
                return Some(candidate);
            }
            warn!(
                "configured app.yaml path {} does not exist in the workspace",
                relative.display()
            );
            return None;
        }

        DEFAULT_APP_YAML_LOCATIONS
            .iter()
            .map(|relative| workspace.join(relative))
            .find(|candidate| candidate.is_file())
    }
}
