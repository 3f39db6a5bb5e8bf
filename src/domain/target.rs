//! Target domain types

use std::path::PathBuf;

use super::AssetKind;
use crate::config::TargetSpec;
use crate::error::{self, Result};

/// A target as loaded from configuration, before building
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub base_path: PathBuf,
    pub base_url: String,
    /// Declared script output filename, may contain `{ts}`
    pub js: Option<String>,
    /// Declared stylesheet output filename, may contain `{ts}`
    pub css: Option<String>,
    /// Directly absorbed bundles
    pub depends: Vec<String>,
}

impl Target {
    /// Create a target from its definition
    ///
    /// # Errors
    ///
    /// Returns `MissingOption` if `basePath` or `baseUrl` is absent or empty.
    pub fn from_spec(name: impl Into<String>, spec: TargetSpec) -> Result<Self> {
        let name = name.into();
        let owner = format!("the '{name}' target");

        let base_path = spec
            .base_path
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| error::missing_option("basePath", owner.clone()))?;
        let base_url = spec
            .base_url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| error::missing_option("baseUrl", owner))?;

        Ok(Self {
            name,
            base_path,
            base_url,
            js: spec.js,
            css: spec.css,
            depends: spec.depends,
        })
    }

    /// Declared output filename for `kind`, if non-empty
    pub fn output(&self, kind: AssetKind) -> Option<&str> {
        let output = match kind {
            AssetKind::Script => self.js.as_deref(),
            AssetKind::Style => self.css.as_deref(),
        };
        output.filter(|o| !o.is_empty())
    }
}

/// A target whose outputs have been produced
///
/// `js` and `css` hold at most one entry: the produced output filename,
/// relative to `base_path`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuiltTarget {
    pub name: String,
    pub base_path: PathBuf,
    pub base_url: String,
    pub js: Vec<String>,
    pub css: Vec<String>,
    /// Directly absorbed bundles, in canonical order
    pub depends: Vec<String>,
}

impl BuiltTarget {
    /// Start a built target from a loaded one, with no outputs yet
    pub fn from_target(target: &Target) -> Self {
        Self {
            name: target.name.clone(),
            base_path: target.base_path.clone(),
            base_url: target.base_url.clone(),
            js: Vec::new(),
            css: Vec::new(),
            depends: target.depends.clone(),
        }
    }

    /// Record the produced output filename for `kind`
    pub fn set_output(&mut self, kind: AssetKind, output: String) {
        match kind {
            AssetKind::Script => self.js = vec![output],
            AssetKind::Style => self.css = vec![output],
        }
    }
}
