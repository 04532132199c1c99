//! Build step that invokes Maven.

use crate::pipeline::context::BuildContext;
use crate::pipeline::error::BuildStepError;
use crate::pipeline::{BUILD_STAGE_WORKDIR, DOCKERFILE_BUILD_STAGE};
use crate::workspace::markers::MAVEN_WRAPPER;
use std::path::PathBuf;
use tracing::info;

/// Conventional Maven output directory.
const MAVEN_ARTIFACT_LOCATION: &str = "target";

#[derive(Debug)]
pub struct MavenBuildStep {
    build_image: String,
}

impl MavenBuildStep {
    pub fn new(build_image: impl Into<String>) -> Self {
        Self {
            build_image: build_image.into(),
        }
    }

    pub fn run(&self, context: &mut BuildContext) -> Result<(), BuildStepError> {
        let executable = self.maven_executable(context);

        context
            .dockerfile_mut()
            .append_line(format!(
                "FROM {} AS {}",
                self.build_image, DOCKERFILE_BUILD_STAGE
            ))
            .append_line(format!("WORKDIR {}", BUILD_STAGE_WORKDIR))
            .append_line("COPY . .")
            .append_line(format!("RUN {} -B -DskipTests clean package", executable))
            .append_blank();

        context.set_build_artifact_location(PathBuf::from(MAVEN_ARTIFACT_LOCATION))
    }

    fn maven_executable(&self, context: &BuildContext) -> String {
        if context.workspace_dir().join(MAVEN_WRAPPER).is_file() {
            info!("Maven wrapper discovered. Using wrapper instead of system maven.");
            format!("./{}", MAVEN_WRAPPER)
        } else {
            "mvn".to_string()
        }
    }
}
