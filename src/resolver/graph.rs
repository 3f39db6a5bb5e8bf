//! Graph abstraction for dependency resolution
//!
//! Any named node set that can answer "what does `name` depend on" can be
//! ordered by [`crate::resolver::sort`]. The bundle registry is one such
//! graph; the rewritten target graph is another.
//!
//! ## Graph Structure
//!
//! ```text
//! IndexMap<String, Vec<String>>
//!    ↓              ↓
//!  node_name    [dep1, dep2, dep3]
//! ```

use indexmap::IndexMap;

/// A named node set exposing a `depends` list per node
pub trait DependencyGraph {
    /// All node names, in the order they should be used as roots
    fn nodes(&self) -> impl Iterator<Item = &str>;

    /// Dependencies of `name`, or `None` if `name` is not part of the graph
    fn depends(&self, name: &str) -> Option<&[String]>;
}

/// Adjacency list keyed by node name
///
/// Names referenced but not listed are leaves with no dependencies.
#[derive(Debug, Clone, Default)]
pub struct DependencyList {
    edges: IndexMap<String, Vec<String>>,
}

impl DependencyList {
    pub fn new(edges: IndexMap<String, Vec<String>>) -> Self {
        Self { edges }
    }
}

impl DependencyGraph for DependencyList {
    fn nodes(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    fn depends(&self, name: &str) -> Option<&[String]> {
        Some(self.edges.get(name).map_or(&[][..], Vec::as_slice))
    }
}
