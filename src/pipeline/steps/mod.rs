//! Build steps.
//!
//! A closed set of variants, each appending lines to the shared Dockerfile
//! buffer and optionally claiming the build artifact location. Steps are
//! stateless across runs; each instance is configured once and invoked
//! exactly once per run.

mod gradle;
mod maven;
mod prebuilt;
mod runtime_options;
mod script;
mod source_image;

pub use gradle::GradleBuildStep;
pub use maven::MavenBuildStep;
pub use prebuilt::PrebuiltImageBuildStep;
pub use runtime_options::RuntimeOptionsBuildStep;
pub use script::ScriptExecutionBuildStep;
pub use source_image::SourceBuildImageBuildStep;

use super::context::BuildContext;
use super::error::BuildStepError;

/// One unit of work in the generation pipeline.
#[derive(Debug)]
pub enum BuildStep {
    Maven(MavenBuildStep),
    Gradle(GradleBuildStep),
    ScriptExecution(ScriptExecutionBuildStep),
    PrebuiltImage(PrebuiltImageBuildStep),
    SourceBuildImage(SourceBuildImageBuildStep),
    RuntimeOptions(RuntimeOptionsBuildStep),
}

impl BuildStep {
    /// Stable identifier used in logs, error context, and plan output.
    pub fn name(&self) -> &'static str {
        match self {
            BuildStep::Maven(_) => "maven",
            BuildStep::Gradle(_) => "gradle",
            BuildStep::ScriptExecution(_) => "script-execution",
            BuildStep::PrebuiltImage(_) => "prebuilt-image",
            BuildStep::SourceBuildImage(_) => "source-build-image",
            BuildStep::RuntimeOptions(_) => "runtime-options",
        }
    }

    /// Runs the step against the shared context.
    pub fn run(&self, context: &mut BuildContext) -> Result<(), BuildStepError> {
        match self {
            BuildStep::Maven(step) => step.run(context),
            BuildStep::Gradle(step) => step.run(context),
            BuildStep::ScriptExecution(step) => step.run(context),
            BuildStep::PrebuiltImage(step) => step.run(context),
            BuildStep::SourceBuildImage(step) => step.run(context),
            BuildStep::RuntimeOptions(step) => step.run(context),
        }
    }
}
