//! Build and runtime base-image selection.

use super::error::BuildStepError;
use crate::config::RuntimeConfig;
use std::collections::BTreeMap;

/// JDK identifier assumed when the configuration leaves `jdk` unset.
pub const DEFAULT_JDK: &str = "openjdk8";

/// Build-stage image for Maven source builds.
pub const MAVEN_BUILD_IMAGE: &str = "maven:3.9-eclipse-temurin-17";

/// Build-stage image for Gradle source builds.
pub const GRADLE_BUILD_IMAGE: &str = "gradle:8.5-jdk17";

/// Build-stage image for custom build scripts, which bring their own tools.
pub const SCRIPT_BUILD_IMAGE: &str = "eclipse-temurin:17-jdk";

/// Maps jdk and server identifiers to runtime base images.
///
/// Lookups are strict: an identifier with no registered image is an error,
/// never a silent fallback, so a typo in `app.yaml` fails the run instead of
/// producing an unexpected image.
#[derive(Debug, Clone)]
pub struct RuntimeImageLookup {
    jdk_images: BTreeMap<String, String>,
    server_images: BTreeMap<(String, String), String>,
}

impl Default for RuntimeImageLookup {
    fn default() -> Self {
        let jdk_images = [
            ("openjdk8", "eclipse-temurin:8-jre"),
            ("openjdk11", "eclipse-temurin:11-jre"),
            ("openjdk17", "eclipse-temurin:17-jre"),
            ("openjdk21", "eclipse-temurin:21-jre"),
        ]
        .into_iter()
        .map(|(jdk, image)| (jdk.to_string(), image.to_string()))
        .collect();

        let server_images = [
            (("openjdk8", "jetty9"), "jetty:9.4-jre8"),
            (("openjdk11", "jetty9"), "jetty:9.4-jre11"),
            (("openjdk11", "jetty10"), "jetty:10-jre11"),
            (("openjdk17", "jetty11"), "jetty:11-jre17"),
            (("openjdk21", "jetty12"), "jetty:12-jre21"),
        ]
        .into_iter()
        .map(|((jdk, server), image)| ((jdk.to_string(), server.to_string()), image.to_string()))
        .collect();

        Self {
            jdk_images,
            server_images,
        }
    }
}

impl RuntimeImageLookup {
    /// Resolves the runtime base image for the merged configuration.
    ///
    /// With a server configured the (jdk, server) pair must be registered;
    /// without one the jdk alone selects a plain JRE image.
    pub fn runtime_image(&self, config: &RuntimeConfig) -> Result<String, BuildStepError> {
        let jdk = config.jdk.as_deref().unwrap_or(DEFAULT_JDK);

        match config.server.as_deref() {
            Some(server) => self
                .server_images
                .get(&(jdk.to_string(), server.to_string()))
                .cloned()
                .ok_or_else(|| BuildStepError::UnknownRuntime {
                    jdk: jdk.to_string(),
                    server: Some(server.to_string()),
                }),
            None => {
                self.jdk_images
                    .get(jdk)
                    .cloned()
                    .ok_or_else(|| BuildStepError::UnknownRuntime {
                        jdk: jdk.to_string(),
                        server: None,
                    })
            }
        }
    }
}
