//! Bundle definitions as they appear in the configuration file and in
//! extension manifests

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A (possibly partial) bundle definition
///
/// Every field is optional on disk; missing values default to empty.
///
/// ```yaml
/// jquery:
///   basePath: vendor/jquery
///   baseUrl: /assets/jquery
///   js: [jquery.js]
///   depends: []
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BundleSpec {
    /// Directory the bundle's files are relative to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,

    /// Public URL matching `base_path`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Script files, in load order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub js: Vec<String>,

    /// Stylesheet files, in load order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub css: Vec<String>,

    /// Names of bundles this bundle depends on
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends: Vec<String>,
}
