//! Test fixtures and utilities for reducing test setup duplication.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, recording_compressors, registry_with};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let registry = registry_with(&[("app", "src/app", &["app.js"], &[], &[])]);
//!     let (compressors, scripts, styles) = recording_compressors();
//! }
//! ```

use std::cell::RefCell;
use std::env;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::TempDir;

use crate::builder::Compressors;
use crate::builder::compress::Compressor;
use crate::config::{BundleSpec, TargetSpec};
use crate::domain::Bundle;
use crate::error::Result;
use crate::registry::BundleRegistry;

/// Returns a directory path suitable for creating temporary directories.
///
/// Never returns a relative path, so temp dirs are never created under the
/// current working directory when `TMPDIR` is relative.
fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        PathBuf::from("/tmp")
    }
}

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// Partial bundle definition with script files and dependencies
pub fn bundle_spec(js: &[&str], depends: &[&str]) -> BundleSpec {
    BundleSpec {
        js: js.iter().map(|f| (*f).to_string()).collect(),
        depends: depends.iter().map(|d| (*d).to_string()).collect(),
        ..BundleSpec::default()
    }
}

/// Target definition rooted at `public/assets`
pub fn target_spec(js: Option<&str>, css: Option<&str>, depends: &[&str]) -> TargetSpec {
    TargetSpec {
        base_path: Some(PathBuf::from("public/assets")),
        base_url: Some("/assets".to_string()),
        js: js.map(str::to_string),
        css: css.map(str::to_string),
        depends: depends.iter().map(|d| (*d).to_string()).collect(),
    }
}

/// Registry from `(name, base_path, js, css, depends)` rows, in row order
pub fn registry_with(rows: &[(&str, &str, &[&str], &[&str], &[&str])]) -> BundleRegistry {
    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|i| (*i).to_string()).collect()
    }

    let mut registry = BundleRegistry::new();
    for (name, base_path, js, css, depends) in rows {
        registry.register(Bundle {
            name: (*name).to_string(),
            base_path: PathBuf::from(*base_path),
            js: strings(js),
            css: strings(css),
            depends: strings(depends),
        });
    }
    registry
}

/// One recorded compress call: inputs and output path
pub type CompressCall = (Vec<PathBuf>, PathBuf);

/// Compressor that records its calls instead of touching the filesystem
#[derive(Debug, Clone, Default)]
pub struct RecordingCompressor {
    calls: Rc<RefCell<Vec<CompressCall>>>,
}

impl RecordingCompressor {
    pub fn calls(&self) -> Vec<CompressCall> {
        self.calls.borrow().clone()
    }
}

impl Compressor for RecordingCompressor {
    fn compress(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((inputs.to_vec(), output.to_path_buf()));
        Ok(())
    }
}

/// Compressors whose script and style hooks record their calls
pub fn recording_compressors() -> (Compressors, RecordingCompressor, RecordingCompressor) {
    let scripts = RecordingCompressor::default();
    let styles = RecordingCompressor::default();
    let compressors = Compressors {
        script: Box::new(scripts.clone()),
        style: Box::new(styles.clone()),
    };
    (compressors, scripts, styles)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
        assert!(temp.path().is_absolute());
    }

    #[test]
    fn test_registry_with_rows() {
        let registry = registry_with(&[
            ("b", "b", &["b.js"], &[], &["a"]),
            ("a", "a", &[], &["a.css"], &[]),
        ]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("b").expect("registered").depends, vec!["a"]);
        assert_eq!(registry.get("a").expect("registered").css, vec!["a.css"]);
    }

    #[test]
    fn test_recording_compressor_shares_calls() {
        let (compressors, scripts, styles) = recording_compressors();
        compressors
            .script
            .compress(&[PathBuf::from("a.js")], Path::new("all.js"))
            .expect("recording never fails");

        assert_eq!(scripts.calls().len(), 1);
        assert!(styles.calls().is_empty());
    }
}
