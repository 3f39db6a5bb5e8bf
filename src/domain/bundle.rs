//! Bundle domain type

use std::path::PathBuf;

use super::AssetKind;
use crate::config::BundleSpec;

/// A registered bundle
///
/// Missing fields from the partial definition are defaulted to empty, so a
/// bundle without `basePath` resolves its files relative to the working
/// directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    pub name: String,
    pub base_path: PathBuf,
    pub js: Vec<String>,
    pub css: Vec<String>,
    pub depends: Vec<String>,
}

impl Bundle {
    /// Create a bundle from its (possibly partial) definition
    ///
    /// `baseUrl` is accepted in the definition but unused: outputs are
    /// published under the target's URL.
    pub fn from_spec(name: impl Into<String>, spec: BundleSpec) -> Self {
        Self {
            name: name.into(),
            base_path: spec.base_path.unwrap_or_default(),
            js: spec.js,
            css: spec.css,
            depends: spec.depends,
        }
    }

    /// Files of the given kind, relative to `base_path`
    pub fn files(&self, kind: AssetKind) -> &[String] {
        match kind {
            AssetKind::Script => &self.js,
            AssetKind::Style => &self.css,
        }
    }

    /// Files of the given kind joined with `base_path`, in declaration order
    pub fn file_paths(&self, kind: AssetKind) -> impl Iterator<Item = PathBuf> + '_ {
        self.files(kind)
            .iter()
            .map(|file| self.base_path.join(file))
    }
}
