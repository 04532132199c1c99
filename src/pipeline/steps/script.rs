//! Build step that runs a configured custom build command.

use crate::pipeline::context::BuildContext;
use crate::pipeline::error::BuildStepError;
use crate::pipeline::{BUILD_STAGE_WORKDIR, DOCKERFILE_BUILD_STAGE};

#[derive(Debug)]
pub struct ScriptExecutionBuildStep {
    build_image: String,
    build_command: String,
}

impl ScriptExecutionBuildStep {
    pub fn new(build_image: impl Into<String>, build_command: impl Into<String>) -> Self {
        Self {
            build_image: build_image.into(),
            build_command: build_command.into(),
        }
    }

    /// Emits a build stage that runs the custom command verbatim.
    ///
    /// No artifact location is set; a custom build must either name its
    /// artifact via `runtime_config.artifact` or leave discovery to a later
    /// step.
    pub fn run(&self, context: &mut BuildContext) -> Result<(), BuildStepError> {
        context
            .dockerfile_mut()
            .append_line(format!(
                "FROM {} AS {}",
                self.build_image, DOCKERFILE_BUILD_STAGE
            ))
            .append_line(format!("WORKDIR {}", BUILD_STAGE_WORKDIR))
            .append_line("COPY . .")
            .append_line(format!("RUN {}", self.build_command))
            .append_blank();

        Ok(())
    }
}
