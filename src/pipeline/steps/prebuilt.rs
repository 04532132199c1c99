//! Runtime-image step for workspaces that already contain the artifact.

use crate::pipeline::context::BuildContext;
use crate::pipeline::error::BuildStepError;
use crate::pipeline::images::RuntimeImageLookup;
use crate::pipeline::APP_DESTINATION;
use crate::workspace::markers;

#[derive(Debug)]
pub struct PrebuiltImageBuildStep {
    images: RuntimeImageLookup,
}

impl PrebuiltImageBuildStep {
    pub fn new(images: RuntimeImageLookup) -> Self {
        Self { images }
    }

    /// Emits the runtime stage, copying the prebuilt artifact straight from
    /// the build context.
    pub fn run(&self, context: &mut BuildContext) -> Result<(), BuildStepError> {
        let image = self.images.runtime_image(context.runtime_config())?;
        let artifact = self.artifact(context)?;

        context
            .dockerfile_mut()
            .append_line(format!("FROM {}", image))
            .append_line(format!("COPY {} {}", artifact, APP_DESTINATION))
            .append_blank();

        Ok(())
    }

    /// The configured artifact path, or the single deployable discovered in
    /// the workspace root.
    fn artifact(&self, context: &BuildContext) -> Result<String, BuildStepError> {
        if let Some(artifact) = &context.runtime_config().artifact {
            return Ok(artifact.clone());
        }

        let workspace = context.workspace_dir();
        let mut candidates = markers::find_deployable_artifacts(workspace)?;
        match candidates.len() {
            0 => Err(BuildStepError::ArtifactNotFound {
                dir: workspace.to_path_buf(),
            }),
            1 => {
                let artifact = candidates.remove(0);
                let name = artifact
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or_default();
                Ok(name.to_string())
            }
            _ => Err(BuildStepError::AmbiguousArtifact {
                dir: workspace.to_path_buf(),
                candidates: candidates
                    .iter()
                    .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
                    .map(str::to_string)
                    .collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuntimeConfig;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn context(workspace: &Path, config: RuntimeConfig) -> BuildContext {
        BuildContext::new(workspace.to_path_buf(), config, false)
    }

    fn step() -> PrebuiltImageBuildStep {
        PrebuiltImageBuildStep::new(RuntimeImageLookup::default())
    }

    #[test]
    fn test_copies_single_discovered_artifact() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("foo.war"), "").unwrap();
        let mut ctx = context(dir.path(), RuntimeConfig::default());

        step().run(&mut ctx).unwrap();

        assert_eq!(
            ctx.dockerfile().lines(),
            &["FROM eclipse-temurin:8-jre", "COPY foo.war /app/", ""]
        );
    }

    #[test]
    fn test_configured_artifact_skips_discovery() {
        let dir = TempDir::new().unwrap();
        // two candidates would otherwise be ambiguous
        fs::write(dir.path().join("a.jar"), "").unwrap();
        fs::write(dir.path().join("b.jar"), "").unwrap();
        let config = RuntimeConfig {
            artifact: Some("a.jar".to_string()),
            ..RuntimeConfig::default()
        };
        let mut ctx = context(dir.path(), config);

        step().run(&mut ctx).unwrap();

        assert!(ctx
            .dockerfile()
            .lines()
            .contains(&"COPY a.jar /app/".to_string()));
    }

    #[test]
    fn test_no_artifact_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(dir.path(), RuntimeConfig::default());

        let err = step().run(&mut ctx).unwrap_err();
        assert!(matches!(err, BuildStepError::ArtifactNotFound { .. }));
        assert!(ctx.dockerfile().is_empty());
    }

    #[test]
    fn test_multiple_artifacts_are_ambiguous() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.jar"), "").unwrap();
        fs::write(dir.path().join("b.war"), "").unwrap();
        let mut ctx = context(dir.path(), RuntimeConfig::default());

        let err = step().run(&mut ctx).unwrap_err();
        match err {
            BuildStepError::AmbiguousArtifact { candidates, .. } => {
                assert_eq!(candidates, vec!["a.jar", "b.war"]);
            }
            other => panic!("expected AmbiguousArtifact, got {other:?}"),
        }
    }
}
