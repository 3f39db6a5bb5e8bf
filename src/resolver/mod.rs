//! Dependency resolution for asset bundles and targets
//!
//! This module handles:
//! - The [`DependencyGraph`] abstraction shared by bundles and targets
//! - Topological ordering with circular dependency detection
//! - Up-front name validation

pub mod graph;
pub mod sort;
pub mod validation;

pub use graph::{DependencyGraph, DependencyList};
pub use sort::{VisitState, canonical_order, topological_visit};
pub use validation::{ensure_disjoint, ensure_known_bundles};
