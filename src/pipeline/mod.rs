//! The pipeline-selection engine.
//!
//! [`PipelineConfigurator`] maps the workspace contents and the merged
//! configuration to a deterministic, ordered sequence of [`BuildStep`]s,
//! drives them against one shared [`BuildContext`], and writes the generated
//! `Dockerfile` and `.dockerignore` into the workspace.

pub mod configurator;
pub mod context;
pub mod error;
pub mod images;
pub mod steps;

pub use configurator::{GeneratedFiles, PipelineConfigurator, PipelinePlan};
pub use context::{BuildContext, Dockerfile};
pub use error::{BuildStepError, PipelineError};
pub use images::RuntimeImageLookup;
pub use steps::BuildStep;

/// File name of the generated build script.
pub const DOCKERFILE_NAME: &str = "Dockerfile";

/// File name of the generated exclusion file.
pub const DOCKERIGNORE_NAME: &str = ".dockerignore";

/// Stage name shared between source-build steps and the runtime image copy.
pub const DOCKERFILE_BUILD_STAGE: &str = "builder";

/// Working directory of the build stage.
pub const BUILD_STAGE_WORKDIR: &str = "/workspace";

/// Destination directory for the deployable artifact in the runtime image.
pub const APP_DESTINATION: &str = "/app/";
