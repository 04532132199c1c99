//! The Pipeline Configurator.
//!
//! Deterministically maps (workspace contents, merged configuration) to an
//! ordered build-step sequence, drives execution against one shared
//! [`BuildContext`], and persists the generated files.

use super::context::BuildContext;
use super::error::PipelineError;
use super::images::{
    RuntimeImageLookup, GRADLE_BUILD_IMAGE, MAVEN_BUILD_IMAGE, SCRIPT_BUILD_IMAGE,
};
use super::steps::{
    BuildStep, GradleBuildStep, MavenBuildStep, PrebuiltImageBuildStep, RuntimeOptionsBuildStep,
    ScriptExecutionBuildStep, SourceBuildImageBuildStep,
};
use super::{DOCKERFILE_NAME, DOCKERIGNORE_NAME};
use crate::config::{AppYaml, AppYamlFinder, RuntimeConfig};
use crate::workspace::markers;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Paths of the files written by a successful run.
#[derive(Debug)]
pub struct GeneratedFiles {
    pub dockerfile: PathBuf,
    pub dockerignore: PathBuf,
}

/// The outcome of selection without execution: the ordered step names, the
/// effective configuration every step would observe, and the located
/// configuration document, workspace-relative.
#[derive(Debug, Clone, Serialize)]
pub struct PipelinePlan {
    pub steps: Vec<String>,
    pub runtime_config: RuntimeConfig,
    pub app_yaml: Option<PathBuf>,
}

pub struct PipelineConfigurator {
    finder: AppYamlFinder,
    images: RuntimeImageLookup,
    overrides: BTreeMap<String, String>,
    disable_source_build: bool,
}

impl PipelineConfigurator {
    pub fn new(
        finder: AppYamlFinder,
        overrides: BTreeMap<String, String>,
        disable_source_build: bool,
    ) -> Self {
        Self {
            finder,
            images: RuntimeImageLookup::default(),
            overrides,
            disable_source_build,
        }
    }

    /// Runs the full pipeline and writes `Dockerfile` and `.dockerignore`
    /// into the workspace root.
    ///
    /// Output files are written only after every step has succeeded; a
    /// failed run leaves the workspace unmodified.
    pub fn generate_docker_resources(
        &self,
        workspace: &Path,
    ) -> Result<GeneratedFiles, PipelineError> {
        let (mut context, steps, app_yaml) = self.prepare(workspace)?;

        for step in &steps {
            debug!("running build step '{}'", step.name());
            step.run(&mut context).map_err(|source| PipelineError::Step {
                step: step.name(),
                source,
            })?;
        }

        let dockerfile = workspace.join(DOCKERFILE_NAME);
        fs::write(&dockerfile, context.dockerfile().contents()).map_err(|source| {
            PipelineError::WriteOutput {
                path: dockerfile.clone(),
                source,
            }
        })?;

        let dockerignore = workspace.join(DOCKERIGNORE_NAME);
        fs::write(&dockerignore, dockerignore_contents(app_yaml.as_deref())).map_err(
            |source| PipelineError::WriteOutput {
                path: dockerignore.clone(),
                source,
            },
        )?;

        info!(
            "generated {} and {} in {}",
            DOCKERFILE_NAME,
            DOCKERIGNORE_NAME,
            workspace.display()
        );
        Ok(GeneratedFiles {
            dockerfile,
            dockerignore,
        })
    }

    /// Performs configuration merging and step selection without executing
    /// any step or writing any file.
    pub fn plan(&self, workspace: &Path) -> Result<PipelinePlan, PipelineError> {
        let (context, steps, app_yaml) = self.prepare(workspace)?;
        Ok(PipelinePlan {
            steps: steps.iter().map(|s| s.name().to_string()).collect(),
            runtime_config: context.runtime_config().clone(),
            app_yaml,
        })
    }

    fn prepare(
        &self,
        workspace: &Path,
    ) -> Result<(BuildContext, Vec<BuildStep>, Option<PathBuf>), PipelineError> {
        let located = self.finder.find_app_yaml(workspace);
        let document = match &located {
            Some(path) => AppYaml::from_path(path)?,
            None => {
                debug!("no configuration document found; using defaults");
                AppYaml::empty()
            }
        };

        let runtime_config = RuntimeConfig::merged(document.runtime_config(), &self.overrides);
        debug!("effective runtime configuration: {:?}", runtime_config);

        let context = BuildContext::new(
            workspace.to_path_buf(),
            runtime_config,
            self.disable_source_build,
        );
        let steps = self.select_steps(&context);
        debug!(
            "selected build steps: [{}]",
            steps
                .iter()
                .map(BuildStep::name)
                .collect::<Vec<_>>()
                .join(", ")
        );

        let relative = located.map(|path| {
            path.strip_prefix(workspace)
                .map(Path::to_path_buf)
                .unwrap_or(path)
        });
        Ok((context, steps, relative))
    }

    /// Selection is total: the precedence rules always yield exactly one
    /// path, so ambiguity is never an error.
    fn select_steps(&self, context: &BuildContext) -> Vec<BuildStep> {
        let mut steps = Vec::new();

        match self.select_source_build_step(context) {
            Some(step) if !context.is_source_build_disabled() => {
                steps.push(step);
                steps.push(BuildStep::SourceBuildImage(SourceBuildImageBuildStep::new(
                    self.images.clone(),
                )));
            }
            Some(step) => {
                debug!(
                    "source builds are disabled; discarding '{}' in favor of the prebuilt path",
                    step.name()
                );
                steps.push(BuildStep::PrebuiltImage(PrebuiltImageBuildStep::new(
                    self.images.clone(),
                )));
            }
            None => {
                steps.push(BuildStep::PrebuiltImage(PrebuiltImageBuildStep::new(
                    self.images.clone(),
                )));
            }
        }

        steps.push(BuildStep::RuntimeOptions(RuntimeOptionsBuildStep));
        steps
    }

    /// Fixed marker precedence, first match wins: custom script, then the
    /// Maven descriptor, then a Gradle descriptor.
    fn select_source_build_step(&self, context: &BuildContext) -> Option<BuildStep> {
        if let Some(script) = &context.runtime_config().build_script {
            return Some(BuildStep::ScriptExecution(ScriptExecutionBuildStep::new(
                SCRIPT_BUILD_IMAGE,
                script.clone(),
            )));
        }

        let workspace = context.workspace_dir();
        if markers::has_maven_descriptor(workspace) {
            return Some(BuildStep::Maven(MavenBuildStep::new(MAVEN_BUILD_IMAGE)));
        }
        if markers::has_gradle_descriptor(workspace) {
            return Some(BuildStep::Gradle(GradleBuildStep::new(GRADLE_BUILD_IMAGE)));
        }
        None
    }
}

/// Contents of the exclusion file: the generated files themselves, plus the
/// configuration document's relative path when one was located, so the
/// document is never copied into the build context.
fn dockerignore_contents(app_yaml: Option<&Path>) -> String {
    let mut lines = vec![DOCKERFILE_NAME.to_string(), DOCKERIGNORE_NAME.to_string()];
    if let Some(path) = app_yaml {
        lines.push(path.display().to_string());
    }
    let mut contents = lines.join("\n");
    contents.push('\n');
    contents
}
