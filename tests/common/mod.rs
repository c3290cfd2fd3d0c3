//! Common test utilities for Playprep integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Environment variables the check command reads; cleared before each test
/// command so the surrounding CI environment cannot leak into assertions.
pub const CONFIG_ENV_VARS: &[&str] = &[
    "service_account_json_key_path",
    "package_name",
    "app_path",
    "expansionfile_path",
    "track",
    "user_fraction",
    "update_priority",
    "whatsnews_dir",
    "mapping_file",
];

/// A deploy directory populated with release artifacts
#[allow(dead_code)]
pub struct DeployDir {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the deploy directory root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl DeployDir {
    /// Create a new empty deploy directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create an artifact file (e.g. app.aab, mapping.txt) and return its path
    pub fn artifact(&self, name: &str) -> String {
        let file_path = self.path.join(name);
        std::fs::write(&file_path, b"artifact").expect("Failed to write artifact");
        file_path.to_string_lossy().into_owned()
    }

    /// Create a subdirectory (e.g. a what's new directory) and return its path
    pub fn dir(&self, name: &str) -> String {
        let dir_path = self.path.join(name);
        std::fs::create_dir_all(&dir_path).expect("Failed to create directory");
        dir_path.to_string_lossy().into_owned()
    }

    /// Path of a file that does not exist in the deploy directory
    pub fn missing(&self, name: &str) -> String {
        self.path.join(name).to_string_lossy().into_owned()
    }
}
