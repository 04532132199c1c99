//! Workspace probing.
//!
//! Stateless checks over the workspace root: build-system marker files and
//! prebuilt deployable artifacts.

pub mod markers;

pub use markers::{find_deployable_artifacts, has_gradle_descriptor, has_maven_descriptor};
