//! Build step that invokes Gradle.

use crate::pipeline::context::BuildContext;
use crate::pipeline::error::BuildStepError;
use crate::pipeline::{BUILD_STAGE_WORKDIR, DOCKERFILE_BUILD_STAGE};
use crate::workspace::markers::GRADLE_WRAPPER;
use std::path::PathBuf;
use tracing::info;

/// Conventional Gradle output directory for deployable archives.
const GRADLE_ARTIFACT_LOCATION: &str = "build/libs";

#[derive(Debug)]
pub struct GradleBuildStep {
    build_image: String,
}

impl GradleBuildStep {
    pub fn new(build_image: impl Into<String>) -> Self {
        Self {
            build_image: build_image.into(),
        }
    }

    pub fn run(&self, context: &mut BuildContext) -> Result<(), BuildStepError> {
        let executable = self.gradle_executable(context);

        context
            .dockerfile_mut()
            .append_line(format!(
                "FROM {} AS {}",
                self.build_image, DOCKERFILE_BUILD_STAGE
            ))
            .append_line(format!("WORKDIR {}", BUILD_STAGE_WORKDIR))
            .append_line("COPY . .")
            .append_line(format!("RUN {} build", executable))
            .append_blank();

        context.set_build_artifact_location(PathBuf::from(GRADLE_ARTIFACT_LOCATION))
    }

    fn gradle_executable(&self, context: &BuildContext) -> String {
        if context.workspace_dir().join(GRADLE_WRAPPER).is_file() {
            info!("Gradle wrapper discovered. Using wrapper instead of system gradle.");
            format!("./{}", GRADLE_WRAPPER)
        } else {
            "gradle".to_string()
        }
    }
}
