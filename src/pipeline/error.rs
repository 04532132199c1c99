//! Pipeline and build-step error types.

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors a single build step can fail with.
#[derive(Debug, Error)]
pub enum BuildStepError {
    /// No prebuilt deployable artifact exists where one was expected.
    #[error("no deployable artifact (*.jar or *.war) found in {}", dir.display())]
    ArtifactNotFound { dir: PathBuf },

    /// More than one candidate artifact was found and none was configured.
    #[error(
        "multiple deployable artifacts found in {}: {}; set runtime_config.artifact to disambiguate",
        dir.display(),
        candidates.join(", ")
    )]
    AmbiguousArtifact {
        dir: PathBuf,
        candidates: Vec<String>,
    },

    /// The configured jdk/server pair has no registered runtime image.
    #[error("no runtime image registered for jdk={jdk}, server={server:?}")]
    UnknownRuntime {
        jdk: String,
        server: Option<String>,
    },

    /// A source build produced no artifact location and none was configured.
    #[error("unable to determine the build artifact; set runtime_config.artifact")]
    MissingArtifactLocation,

    /// A second step tried to claim the build artifact location.
    #[error("build artifact location already set to {}", existing.display())]
    ArtifactLocationAlreadySet { existing: PathBuf },

    /// A filesystem probe inside the workspace failed.
    #[error("workspace probe failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced at the pipeline boundary.
///
/// Step failures carry the failing step's identity; configuration failures
/// abort before any step runs. Either way no output files are written.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("build step '{step}' failed: {source}")]
    Step {
        step: &'static str,
        #[source]
        source: BuildStepError,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
