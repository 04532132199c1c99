//! Shared test fixtures: temporary workspace construction.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Builder for throwaway workspaces backed by a temp directory.
pub struct TestWorkspaceBuilder {
    files: Vec<(String, String)>,
}

impl TestWorkspaceBuilder {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    pub fn file(mut self, relative_path: &str) -> Self {
        self.files.push((relative_path.to_string(), String::new()));
        self
    }

    pub fn file_with_contents(mut self, relative_path: &str, contents: &str) -> Self {
        self.files
            .push((relative_path.to_string(), contents.to_string()));
        self
    }

    pub fn build(self) -> TestWorkspace {
        let dir = TempDir::new().expect("failed to create temp workspace");
        for (relative_path, contents) in &self.files {
            let path = dir.path().join(relative_path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("failed to create parent directories");
            }
            fs::write(&path, contents).expect("failed to write fixture file");
        }
        TestWorkspace { dir }
    }
}

pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path))
            .unwrap_or_else(|e| panic!("failed to read {relative_path}: {e}"))
    }

    pub fn exists(&self, relative_path: &str) -> bool {
        self.dir.path().join(relative_path).exists()
    }
}
