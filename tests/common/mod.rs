//! Common test utilities for assetpack integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Bundles and asset manager options shared by most tests
///
/// `jquery` <- `app` <- `admin`
#[allow(dead_code)]
pub const BUNDLES: &str = r"
bundles:
  jquery:
    basePath: vendor/jquery
    baseUrl: /vendor/jquery
    js: [jquery.js]
  app:
    basePath: src/app
    js: [app.js, forms.js]
    css: [site.css]
    depends: [jquery]
  admin:
    basePath: src/admin
    js: [admin.js]
    css: [admin.css]
    depends: [app]
assetManager:
  basePath: public/assets
  baseUrl: /assets
";

/// A test workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    #[allow(dead_code)]
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write the source files referenced by [`BUNDLES`]
    #[allow(dead_code)]
    pub fn write_sources(&self) {
        self.write_file("vendor/jquery/jquery.js", "var jQuery;\n");
        self.write_file("src/app/app.js", "app();\n");
        self.write_file("src/app/forms.js", "forms();");
        self.write_file("src/app/site.css", "body{}\n");
        self.write_file("src/admin/admin.js", "admin();\n");
        self.write_file("src/admin/admin.css", ".admin{}\n");
    }

    /// Write `assets.yaml` from [`BUNDLES`] plus a `targets` section
    #[allow(dead_code)]
    pub fn write_config(&self, targets: &str) {
        self.write_file("assets.yaml", &format!("{BUNDLES}targets:\n{targets}"));
    }

    /// `assetpack compress assets.yaml <manifest>` run inside the workspace
    #[allow(dead_code)]
    pub fn compress_cmd(&self, manifest: &str) -> Command {
        let mut cmd = assetpack_cmd();
        cmd.current_dir(&self.path)
            .args(["--no-color", "compress", "assets.yaml", manifest]);
        cmd
    }

    /// Parse a manifest written by the compress command
    #[allow(dead_code)]
    pub fn read_manifest(&self, path: &str) -> serde_yaml::Value {
        serde_yaml::from_str(&self.read_file(path)).expect("Manifest should be valid YAML")
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the assetpack binary, with `RUST_LOG` cleared
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated, dead_code)]
pub fn assetpack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("assetpack").expect("assetpack binary should be built");
    cmd.env_remove("RUST_LOG");
    cmd
}
