//! The merged, effective build configuration for one run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Effective runtime configuration consumed read-only by every build step.
///
/// Every field is independently optional; `None` means "use the step-defined
/// default", never an error. The struct is built once per run by merging
/// three layers in strictly increasing precedence: built-in defaults, the
/// document's `runtime_config` section, and the operator override map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// JDK identifier used to resolve build and runtime images.
    pub jdk: Option<String>,

    /// Explicit path to the deployable artifact, workspace-relative for the
    /// prebuilt path, build-stage-relative for source builds.
    pub artifact: Option<String>,

    /// Runtime server identifier (e.g. `jetty9`).
    pub server: Option<String>,

    /// Custom build command that replaces the tool-specific build command.
    pub build_script: Option<String>,

    /// Enables jetty quickstart generation in the runtime image.
    pub jetty_quickstart: Option<bool>,
}

impl RuntimeConfig {
    /// Merges the three configuration layers into the effective config.
    ///
    /// Later layers overwrite only the fields they explicitly set; a field
    /// unset at all layers stays unset.
    pub fn merged(document: RuntimeConfig, overrides: &BTreeMap<String, String>) -> RuntimeConfig {
        let mut effective = RuntimeConfig::default();
        effective.apply(document);
        effective.apply_overrides(overrides);
        effective
    }

    fn apply(&mut self, layer: RuntimeConfig) {
        if layer.jdk.is_some() {
            self.jdk = layer.jdk;
        }
        if layer.artifact.is_some() {
            self.artifact = layer.artifact;
        }
        if layer.server.is_some() {
            self.server = layer.server;
        }
        if layer.build_script.is_some() {
            self.build_script = layer.build_script;
        }
        if layer.jetty_quickstart.is_some() {
            self.jetty_quickstart = layer.jetty_quickstart;
        }
    }

    /// Applies operator-supplied overrides, the highest-precedence layer.
    ///
    /// Unrecognized keys are logged and ignored rather than failing the run,
    /// so newer CLI front-ends can pass settings older cores do not know.
    pub fn apply_overrides(&mut self, overrides: &BTreeMap<String, String>) {
        for (key, value) in overrides {
            match key.as_str() {
                "jdk" => self.jdk = Some(value.clone()),
                "artifact" => self.artifact = Some(value.clone()),
                "server" => self.server = Some(value.clone()),
                "build_script" => self.build_script = Some(value.clone()),
                "jetty_quickstart" => match value.parse::<bool>() {
                    Ok(flag) => self.jetty_quickstart = Some(flag),
                    Err(_) => warn!(
                        "ignoring jetty_quickstart override '{}': expected true or false",
                        value
                    ),
                },
                other => warn!("ignoring unrecognized override setting '{}'", other),
            }
        }
    }
}
