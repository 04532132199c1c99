//! Marker-file patterns and probe functions
//!
//! A marker file is a file whose mere presence in the workspace root signals
//! which build tooling produced or should produce the deployable artifact.

use std::io;
use std::path::{Path, PathBuf};

/// Maven project descriptor.
pub const MAVEN_DESCRIPTOR: &str = "pom.xml";

/// Gradle build descriptors, either flavor marks a Gradle workspace.
pub const GRADLE_DESCRIPTORS: &[&str] = &["build.gradle", "build.gradle.kts"];

/// Workspace-local Maven wrapper, preferred over a system install.
pub const MAVEN_WRAPPER: &str = "mvnw";

/// Workspace-local Gradle wrapper, preferred over a system install.
pub const GRADLE_WRAPPER: &str = "gradlew";

/// Extensions that identify a prebuilt deployable artifact.
pub const DEPLOYABLE_EXTENSIONS: &[&str] = &["jar", "war"];

/// Checks whether the workspace root contains a Maven project descriptor.
pub fn has_maven_descriptor(workspace: &Path) -> bool {
    workspace.join(MAVEN_DESCRIPTOR).is_file()
}

/// Checks whether the workspace root contains a Gradle build descriptor.
pub fn has_gradle_descriptor(workspace: &Path) -> bool {
    GRADLE_DESCRIPTORS
        .iter()
        .any(|descriptor| workspace.join(descriptor).is_file())
}

/// Checks whether a file name carries a deployable extension.
pub fn is_deployable(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| DEPLOYABLE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Lists prebuilt deployable artifacts in the workspace root.
///
/// Only the root itself is scanned; build tool output directories are the
/// source-build path's concern. Results are sorted by file name so callers
/// see a deterministic order.
pub fn find_deployable_artifacts(workspace: &Path) -> io::Result<Vec<PathBuf>> {
    let mut artifacts = Vec::new();
    for entry in workspace.read_dir()? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_deployable(&path) {
            artifacts.push(path);
        }
    }
    artifacts.sort();
    Ok(artifacts)
}
