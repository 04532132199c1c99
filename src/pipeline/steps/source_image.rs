//! Runtime-image step for source builds.

use crate::pipeline::context::BuildContext;
use crate::pipeline::error::BuildStepError;
use crate::pipeline::images::RuntimeImageLookup;
use crate::pipeline::{APP_DESTINATION, BUILD_STAGE_WORKDIR, DOCKERFILE_BUILD_STAGE};

#[derive(Debug)]
pub struct SourceBuildImageBuildStep {
    images: RuntimeImageLookup,
}

impl SourceBuildImageBuildStep {
    pub fn new(images: RuntimeImageLookup) -> Self {
        Self { images }
    }

    /// Emits the runtime stage, copying the artifact out of the build stage.
    ///
    /// A configured `runtime_config.artifact` names the exact build-stage
    /// path; otherwise the whole artifact location directory claimed by the
    /// preceding source-build step is copied.
    pub fn run(&self, context: &mut BuildContext) -> Result<(), BuildStepError> {
        let image = self.images.runtime_image(context.runtime_config())?;

        let source = match &context.runtime_config().artifact {
            Some(artifact) => format!(
                "{}/{}",
                BUILD_STAGE_WORKDIR,
                artifact.trim_start_matches("./")
            ),
            None => {
                let location = context
                    .build_artifact_location()
                    .ok_or(BuildStepError::MissingArtifactLocation)?;
                format!("{}/{}/", BUILD_STAGE_WORKDIR, location.display())
            }
        };

        context
            .dockerfile_mut()
            .append_line(format!("FROM {}", image))
            .append_line(format!(
                "COPY --from={} {} {}",
                DOCKERFILE_BUILD_STAGE, source, APP_DESTINATION
            ))
            .append_blank();

        Ok(())
    }
}
