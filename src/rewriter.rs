//! Target graph rewriting
//!
//! After building, every bundle listed by a target is "owned" by that target.
//! The rewriter turns bundle-level dependencies into target-level ones:
//!
//! ```text
//! bundles:  jquery: []   app: [jquery]   admin: [app]
//! targets:  core: [jquery]   site: [app]   back: [admin]
//!
//! core.depends = []
//! site.depends = [core]          app -> jquery, owned by core
//! back.depends = [site]          admin -> app, owned by site
//! stubs:   jquery -> [core]   app -> [site]   admin -> [back]
//! ```
//!
//! Only one level of bundle dependencies is considered. A dependency on a
//! bundle no target owns stays in the rewritten list under its bundle name,
//! and the cycle check follows such bundles back into the targets they reach.

use indexmap::{IndexMap, IndexSet};

use crate::domain::BuiltTarget;
use crate::error::{self, Result};
use crate::manifest::{Manifest, ManifestEntry};
use crate::registry::BundleRegistry;
use crate::resolver::{DependencyList, VisitState, topological_visit};

/// Bundle name → owning target name, in first-claim order
pub type Ownership = IndexMap<String, String>;

/// Map every bundle listed by a target to that target
///
/// A target listing the same bundle twice still owns it once.
///
/// # Errors
///
/// Returns `AmbiguousOwnership` on the first bundle claimed by a second target.
pub fn ownership(targets: &[BuiltTarget]) -> Result<Ownership> {
    let mut owners = Ownership::new();
    for target in targets {
        for bundle in &target.depends {
            match owners.get(bundle) {
                Some(owner) if *owner != target.name => {
                    return Err(error::ambiguous_owner(
                        bundle.as_str(),
                        owner.as_str(),
                        target.name.as_str(),
                    ));
                }
                Some(_) => {}
                None => {
                    owners.insert(bundle.clone(), target.name.clone());
                }
            }
        }
    }
    Ok(owners)
}

/// Target-level dependencies of `target`
///
/// # Errors
///
/// Returns `UnknownBundle` if an owned bundle is missing from the registry.
pub fn rewrite_depends(
    target: &BuiltTarget,
    registry: &BundleRegistry,
    owners: &Ownership,
) -> Result<Vec<String>> {
    let mut depends = IndexSet::new();
    for name in &target.depends {
        let bundle = registry.require(name, &target.name)?;
        for dep in &bundle.depends {
            let mapped = owners.get(dep).unwrap_or(dep);
            if *mapped != target.name {
                depends.insert(mapped.clone());
            }
        }
    }
    Ok(depends.into_iter().collect())
}

/// Graph over rewritten targets and the unowned bundles they reach
///
/// An unowned bundle's edges are its own dependencies mapped through
/// `owners`, so `t1 -> u -> t2 -> t1` is found even though `u` belongs to
/// no target.
fn target_graph(
    targets: &[BuiltTarget],
    registry: &BundleRegistry,
    owners: &Ownership,
) -> DependencyList {
    let mut edges: IndexMap<String, Vec<String>> = targets
        .iter()
        .map(|t| (t.name.clone(), t.depends.clone()))
        .collect();

    let mut pending: Vec<String> = targets
        .iter()
        .flat_map(|t| t.depends.iter().cloned())
        .collect();
    while let Some(name) = pending.pop() {
        if edges.contains_key(&name) {
            continue;
        }
        let Some(bundle) = registry.get(&name) else {
            continue;
        };
        let depends: Vec<String> = bundle
            .depends
            .iter()
            .map(|dep| owners.get(dep).unwrap_or(dep).clone())
            .collect();
        pending.extend(depends.iter().cloned());
        edges.insert(name, depends);
    }

    DependencyList::new(edges)
}

/// Rewrite built targets into the final manifest
///
/// The manifest lists targets in build order, followed by one stub per
/// owned bundle.
///
/// # Errors
///
/// - `AmbiguousOwnership` if two targets list the same bundle
/// - `CircularDependency` if the rewritten target graph has a cycle
/// - `NameCollision` if a stub would shadow a target
pub fn adjust_dependencies(
    targets: Vec<BuiltTarget>,
    registry: &BundleRegistry,
) -> Result<Manifest> {
    let owners = ownership(&targets)?;

    let mut rewritten = Vec::with_capacity(targets.len());
    for mut target in targets {
        target.depends = rewrite_depends(&target, registry, &owners)?;
        tracing::debug!(
            "Target '{}' now depends on [{}]",
            target.name,
            target.depends.join(", ")
        );
        rewritten.push(target);
    }

    let graph = target_graph(&rewritten, registry, &owners);
    let mut state = VisitState::new();
    for target in &rewritten {
        topological_visit(&graph, &target.name, &mut state)?;
    }

    let mut manifest = Manifest::new();
    for target in rewritten {
        let name = target.name.clone();
        manifest.insert(name, ManifestEntry::from_target(target))?;
    }
    for (bundle, owner) in owners {
        manifest.insert(bundle, ManifestEntry::stub(owner))?;
    }

    Ok(manifest)
}
