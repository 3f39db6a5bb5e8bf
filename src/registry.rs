//! Bundle registry
//!
//! This module provides:
//! - Merging inline bundles with extension manifests
//! - Bundle lookup by name
//!
//! Bundles are stored in registration order and indexed by name, so the
//! registry doubles as the bundle-level [`DependencyGraph`].

use std::collections::HashMap;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::config::{BundleSpec, load_extension_manifest};
use crate::domain::Bundle;
use crate::error::{self, Result};
use crate::resolver::DependencyGraph;

/// Registry of all known bundles
#[derive(Debug, Clone, Default)]
pub struct BundleRegistry {
    bundles: Vec<Bundle>,
    by_name: HashMap<String, usize>,
}

impl BundleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load bundles from inline definitions and extension search paths
    ///
    /// Priority order (first registration wins):
    /// 1. Inline bundles from configuration
    /// 2. `assets.yaml` of each extension path, in the given order
    ///
    /// A missing extension manifest is skipped silently.
    pub fn load(inline: IndexMap<String, BundleSpec>, extensions: &[PathBuf]) -> Result<Self> {
        let mut registry = Self::new();

        for (name, spec) in inline {
            registry.register(Bundle::from_spec(name, spec));
        }

        for path in extensions {
            let Some(manifest) = load_extension_manifest(path)? else {
                tracing::debug!("No bundle manifest in extension {}", path.display());
                continue;
            };

            tracing::debug!(
                "Loaded {} bundle(s) from extension {}",
                manifest.len(),
                path.display()
            );
            for (name, spec) in manifest {
                if !registry.register(Bundle::from_spec(name.as_str(), spec)) {
                    tracing::debug!(
                        "Bundle '{}' from extension {} is already registered, skipping",
                        name,
                        path.display()
                    );
                }
            }
        }

        Ok(registry)
    }

    /// Register a bundle unless one with the same name exists
    ///
    /// Returns `false` if the name was already taken.
    pub fn register(&mut self, bundle: Bundle) -> bool {
        if self.by_name.contains_key(&bundle.name) {
            return false;
        }
        self.by_name.insert(bundle.name.clone(), self.bundles.len());
        self.bundles.push(bundle);
        true
    }

    /// Get a bundle by name
    pub fn get(&self, name: &str) -> Option<&Bundle> {
        self.by_name
            .get(name)
            .and_then(|&idx| self.bundles.get(idx))
    }

    /// Get a bundle by name, failing with `UnknownBundle` on behalf of `referrer`
    pub fn require(&self, name: &str, referrer: &str) -> Result<&Bundle> {
        self.get(name)
            .ok_or_else(|| error::unknown_bundle(name, referrer))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

impl DependencyGraph for BundleRegistry {
    fn nodes(&self) -> impl Iterator<Item = &str> {
        self.bundles.iter().map(|b| b.name.as_str())
    }

    fn depends(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(|b| b.depends.as_slice())
    }
}
