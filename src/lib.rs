//! jarpack - deterministic Dockerfile generation for JVM workspaces
//!
//! This library inspects a source workspace, decides which build tooling (if
//! any) should produce the deployable artifact, and emits a multi-stage
//! Dockerfile plus a `.dockerignore` exclusion file so the artifact can be
//! packaged into a runtime image.
//!
//! # Core Concepts
//!
//! - **Pipeline selection**: a deterministic decision procedure over marker
//!   files and configuration that yields an ordered, acyclic build-step
//!   sequence (custom script beats Maven, Maven beats Gradle, and a prebuilt
//!   artifact is the fallback)
//! - **Runtime configuration**: three precedence layers merged per field —
//!   built-in defaults, the workspace's `app.yaml`, and operator overrides
//! - **Build context**: per-run state shared by every step, with an
//!   append-only Dockerfile buffer and a write-once artifact location
//!
//! # Example Usage
//!
//! ```no_run
//! use jarpack::{AppYamlFinder, PipelineConfigurator};
//! use std::collections::BTreeMap;
//! use std::path::Path;
//!
//! fn generate(workspace: &Path) -> Result<(), Box<dyn std::error::Error>> {
//!     let configurator = PipelineConfigurator::new(
//!         AppYamlFinder::default(),
//!         BTreeMap::new(),
//!         false,
//!     );
//!     let files = configurator.generate_docker_resources(workspace)?;
//!     println!("wrote {}", files.dockerfile.display());
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`pipeline`]: the configurator, the build-step variants, and the shared
//!   build context
//! - [`config`]: the `app.yaml` document model, its locator, and the merged
//!   runtime configuration
//! - [`workspace`]: marker-file probes over the workspace root
//! - [`cli`]: command-line surface

// Public modules
pub mod cli;
pub mod config;
pub mod pipeline;
pub mod workspace;

// Re-export key types for convenient access
pub use config::{AppYaml, AppYamlFinder, ConfigError, RuntimeConfig};
pub use pipeline::{
    BuildContext, BuildStep, BuildStepError, GeneratedFiles, PipelineConfigurator, PipelineError,
    PipelinePlan, RuntimeImageLookup,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_jarpack() {
        assert_eq!(NAME, "jarpack");
    }
}
