//! Up-front validation of bundle and target names

use crate::error::{self, Result};
use crate::registry::BundleRegistry;

/// Ensure no target shares its name with a registered bundle
///
/// Targets and the stub entries synthesized for absorbed bundles are written
/// into one namespace, so a collision would silently overwrite an entry.
pub fn ensure_disjoint<'a>(
    registry: &BundleRegistry,
    target_names: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    for name in target_names {
        if registry.contains(name) {
            return Err(error::name_collision(name));
        }
    }
    Ok(())
}

/// Ensure every bundle a target lists is registered
pub fn ensure_known_bundles(
    registry: &BundleRegistry,
    referrer: &str,
    names: &[String],
) -> Result<()> {
    for name in names {
        registry.require(name, referrer)?;
    }
    Ok(())
}
