//! Target building
//!
//! This module handles:
//! - Loading targets and sorting their bundles into canonical order
//! - Collecting input files per asset type
//! - Invoking the compress hook and recording the produced output
//!
//! ## Input order
//!
//! For a target `all` absorbing `[app, jquery]` where `app` depends on
//! `jquery`, the canonical order puts `jquery` first:
//!
//! ```text
//! all.depends (declared)  = [app, jquery]
//! all.depends (sorted)    = [jquery, app]
//! script inputs           = jquery/jquery.js, app/app.js, app/forms.js
//! ```
//!
//! Only bundles listed directly by the target contribute files.

pub mod compress;

use std::collections::HashMap;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::config::TargetSpec;
use crate::domain::{AssetKind, BuiltTarget, Target};
use crate::error::Result;
use crate::registry::BundleRegistry;
use crate::resolver::ensure_known_bundles;

pub use compress::Compressors;

/// Placeholder in output filenames replaced with the run's Unix timestamp
pub const TIMESTAMP_PLACEHOLDER: &str = "{ts}";

/// Load targets from configuration
///
/// Each target's `depends` is validated against the registry and stably
/// sorted by position in `order` (the canonical bundle order).
///
/// # Errors
///
/// - `MissingOption` if a target lacks `basePath` or `baseUrl`
/// - `UnknownBundle` if a target lists an unregistered bundle
pub fn load_targets(
    specs: IndexMap<String, TargetSpec>,
    registry: &BundleRegistry,
    order: &[String],
) -> Result<Vec<Target>> {
    let positions: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.as_str(), idx))
        .collect();

    specs
        .into_iter()
        .map(|(name, spec)| {
            let mut target = Target::from_spec(name, spec)?;
            ensure_known_bundles(registry, &target.name, &target.depends)?;
            sort_by_position(&mut target.depends, &positions);
            Ok(target)
        })
        .collect()
}

/// Stable sort of bundle names by canonical position
fn sort_by_position(names: &mut [String], positions: &HashMap<&str, usize>) {
    names.sort_by_key(|name| positions.get(name.as_str()).copied().unwrap_or(usize::MAX));
}

/// Substitute `{ts}` in a declared output filename
pub fn expand_timestamp(template: &str, timestamp: u64) -> String {
    template.replace(TIMESTAMP_PLACEHOLDER, &timestamp.to_string())
}

/// Builds targets against a bundle registry
pub struct TargetBuilder<'a> {
    registry: &'a BundleRegistry,
    compressors: &'a Compressors,
    timestamp: u64,
}

impl<'a> TargetBuilder<'a> {
    pub fn new(
        registry: &'a BundleRegistry,
        compressors: &'a Compressors,
        timestamp: u64,
    ) -> Self {
        Self {
            registry,
            compressors,
            timestamp,
        }
    }

    /// Build every target, in order, calling `on_built` after each one
    pub fn build(
        &self,
        targets: &[Target],
        mut on_built: impl FnMut(&BuiltTarget),
    ) -> Result<Vec<BuiltTarget>> {
        targets
            .iter()
            .map(|target| {
                let built = self.build_target(target)?;
                on_built(&built);
                Ok(built)
            })
            .collect()
    }

    /// Build one target's script and stylesheet outputs
    ///
    /// An asset type without a declared output filename is skipped and its
    /// file list stays empty.
    pub fn build_target(&self, target: &Target) -> Result<BuiltTarget> {
        let mut built = BuiltTarget::from_target(target);

        for kind in AssetKind::ALL {
            let Some(declared) = target.output(kind) else {
                continue;
            };

            let output = expand_timestamp(declared, self.timestamp);
            let inputs = self.collect_inputs(target, kind)?;
            let output_path = target.base_path.join(&output);

            tracing::info!(
                "Building {} for target '{}' from {} file(s) -> {}",
                kind,
                target.name,
                inputs.len(),
                output_path.display()
            );
            for input in &inputs {
                tracing::debug!("  {}", input.display());
            }

            self.compressors
                .for_kind(kind)
                .compress(&inputs, &output_path)?;
            built.set_output(kind, output);
        }

        Ok(built)
    }

    /// Input files of `kind` for `target`
    ///
    /// Bundles are taken in the target's `depends` order and files in
    /// declaration order within each bundle. Duplicates are kept.
    pub fn collect_inputs(&self, target: &Target, kind: AssetKind) -> Result<Vec<PathBuf>> {
        let mut inputs = Vec::new();
        for name in &target.depends {
            let bundle = self.registry.require(name, &target.name)?;
            inputs.extend(bundle.file_paths(kind));
        }
        Ok(inputs)
    }
}
