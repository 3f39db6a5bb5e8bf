//! Compress command implementation
//!
//! Pipeline:
//! 1. Load configuration and the bundle registry
//! 2. Check bundle and target names are disjoint
//! 3. Compute the canonical bundle order (fails on cycles)
//! 4. Load targets and build their outputs
//! 5. Rewrite the target graph and write the manifest

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::builder::{Compressors, TargetBuilder, load_targets};
use crate::cli::CompressArgs;
use crate::config::ScriptConfig;
use crate::error::Result;
use crate::progress::BuildProgress;
use crate::registry::BundleRegistry;
use crate::resolver::{canonical_order, ensure_disjoint};
use crate::rewriter::adjust_dependencies;

/// Run compress command
pub fn run(args: CompressArgs, quiet: bool) -> Result<()> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let compressors = Compressors::from_templates(args.js_compressor, args.css_compressor);

    compress(
        &args.config_file,
        &args.bundle_file,
        &compressors,
        timestamp,
        quiet,
    )
}

/// Run the whole pipeline with explicit hooks and timestamp
pub fn compress(
    config_file: &Path,
    bundle_file: &Path,
    compressors: &Compressors,
    timestamp: u64,
    quiet: bool,
) -> Result<()> {
    tracing::info!("Loading configuration from {}", config_file.display());
    let config = ScriptConfig::load(config_file)?;

    let registry = BundleRegistry::load(config.bundles, &config.extensions)?;
    if registry.is_empty() {
        tracing::warn!("No bundles registered");
    } else {
        tracing::info!("Registered {} bundle(s)", registry.len());
    }

    ensure_disjoint(&registry, config.targets.keys().map(String::as_str))?;
    let order = canonical_order(&registry)?;
    tracing::debug!("Canonical bundle order: [{}]", order.join(", "));

    let targets = load_targets(config.targets, &registry, &order)?;

    let progress = BuildProgress::new(targets.len() as u64, quiet);
    let built = TargetBuilder::new(&registry, compressors, timestamp)
        .build(&targets, |target| progress.target_built(&target.name))
        .inspect_err(|_| progress.abandon())?;
    progress.finish();

    let manifest = adjust_dependencies(built, &registry)?;
    if manifest.is_empty() {
        tracing::warn!("No targets configured, the manifest will be empty");
    }
    for name in manifest.names() {
        tracing::debug!("Manifest entry: {}", name);
    }

    manifest.write(bundle_file)?;
    tracing::info!(
        "Wrote {} manifest entries to {}",
        manifest.len(),
        bundle_file.display()
    );

    Ok(())
}
