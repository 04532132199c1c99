//! Per-run mutable state shared by every build step.

use super::error::BuildStepError;
use crate::config::RuntimeConfig;
use std::path::{Path, PathBuf};

/// Append-only buffer of generated Dockerfile lines.
///
/// Steps may only add lines; removing or reordering previously appended
/// lines is not expressible through this API.
#[derive(Debug, Default)]
pub struct Dockerfile {
    lines: Vec<String>,
}

impl Dockerfile {
    pub fn append_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    pub fn append_blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders the buffer as file contents with a trailing newline.
    pub fn contents(&self) -> String {
        let mut contents = self.lines.join("\n");
        contents.push('\n');
        contents
    }
}

/// Mutable aggregate owned by the configurator for the duration of one run
/// and lent to each build step in turn.
///
/// Steps may append to the Dockerfile buffer and set the artifact location
/// once; the runtime configuration is immutable after construction.
#[derive(Debug)]
pub struct BuildContext {
    workspace_dir: PathBuf,
    runtime_config: RuntimeConfig,
    disable_source_build: bool,
    dockerfile: Dockerfile,
    build_artifact_location: Option<PathBuf>,
}

impl BuildContext {
    pub fn new(
        workspace_dir: PathBuf,
        runtime_config: RuntimeConfig,
        disable_source_build: bool,
    ) -> Self {
        Self {
            workspace_dir,
            runtime_config,
            disable_source_build,
            dockerfile: Dockerfile::default(),
            build_artifact_location: None,
        }
    }

    pub fn workspace_dir(&self) -> &Path {
        &self.workspace_dir
    }

    pub fn runtime_config(&self) -> &RuntimeConfig {
        &self.runtime_config
    }

    /// Administrative flag: when set, source builds are skipped even if a
    /// build descriptor is present in the workspace.
    pub fn is_source_build_disabled(&self) -> bool {
        self.disable_source_build
    }

    pub fn dockerfile(&self) -> &Dockerfile {
        &self.dockerfile
    }

    pub fn dockerfile_mut(&mut self) -> &mut Dockerfile {
        &mut self.dockerfile
    }

    /// Directory inside the build stage where the source build leaves its
    /// output, set by the step that produced it.
    pub fn build_artifact_location(&self) -> Option<&Path> {
        self.build_artifact_location.as_deref()
    }

    /// Claims the artifact location. Write-once: a second call fails.
    pub fn set_build_artifact_location(&mut self, location: PathBuf) -> Result<(), BuildStepError> {
        if let Some(existing) = &self.build_artifact_location {
            return Err(BuildStepError::ArtifactLocationAlreadySet {
                existing: existing.clone(),
            });
        }
        self.build_artifact_location = Some(location);
        Ok(())
    }
}
