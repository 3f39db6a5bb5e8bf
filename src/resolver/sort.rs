//! Topological sort implementation using depth-first search (DFS)
//!
//! ## Algorithm
//!
//! Uses DFS with three-color marking to detect cycles and produce ordering:
//!
//! 1. **WHITE** (unvisited): name absent from the visit state
//! 2. **GRAY** (in progress): name is on the current DFS path
//! 3. **BLACK** (done): name and all its dependencies are ordered
//!
//! Cycles are detected when we encounter a GRAY node. The walk keeps its own
//! stack of frames instead of recursing, so deep dependency chains cannot
//! overflow the thread stack.
//!
//! Visiting every root against one shared [`VisitState`] accumulates a
//! completion order in which every node comes after all of its dependencies.

use std::collections::HashMap;

use super::graph::DependencyGraph;
use crate::error::{self, Result};

/// Referrer reported when a visit is started from a name the graph lacks
const ROOT_REFERRER: &str = "<root>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Shared state across topological visits
#[derive(Debug, Default)]
pub struct VisitState {
    marks: HashMap<String, Mark>,
    order: Vec<String>,
}

impl VisitState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names in completion order
    pub fn into_order(self) -> Vec<String> {
        self.order
    }

    fn enter(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Mark::InProgress);
    }

    fn finish(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Mark::Done);
        self.order.push(name.to_string());
    }
}

/// One node on the explicit DFS stack
struct Frame<'a> {
    name: &'a str,
    depends: &'a [String],
    next: usize,
}

/// Visit `start` and everything it depends on
///
/// Names finished during this visit are appended to `state`'s order after
/// all of their dependencies.
///
/// # Errors
///
/// - `CircularDependency` naming the first node found on a cycle
/// - `UnknownBundle` if a dependency is not part of the graph
pub fn topological_visit<'a, G: DependencyGraph>(
    graph: &'a G,
    start: &'a str,
    state: &mut VisitState,
) -> Result<()> {
    match state.marks.get(start) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::InProgress) => return Err(error::circular_dependency(start, start)),
        None => {}
    }

    let depends = graph
        .depends(start)
        .ok_or_else(|| error::unknown_bundle(start, ROOT_REFERRER))?;
    state.enter(start);
    let mut stack = vec![Frame {
        name: start,
        depends,
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let name = frame.name;
        let depends: &'a [String] = frame.depends;

        let Some(dep) = depends.get(frame.next) else {
            stack.pop();
            state.finish(name);
            continue;
        };
        frame.next += 1;

        match state.marks.get(dep.as_str()) {
            Some(Mark::Done) => {}
            Some(Mark::InProgress) => {
                return Err(error::circular_dependency(
                    dep.as_str(),
                    cycle_chain(&stack, dep),
                ));
            }
            None => {
                let dep_depends = graph
                    .depends(dep)
                    .ok_or_else(|| error::unknown_bundle(dep.as_str(), name))?;
                state.enter(dep);
                stack.push(Frame {
                    name: dep.as_str(),
                    depends: dep_depends,
                    next: 0,
                });
            }
        }
    }

    Ok(())
}

/// Compute the canonical order of every node in `graph`
///
/// Roots are taken in [`DependencyGraph::nodes`] order, which makes the
/// result deterministic for a given graph.
pub fn canonical_order<G: DependencyGraph>(graph: &G) -> Result<Vec<String>> {
    let mut state = VisitState::new();
    for name in graph.nodes() {
        topological_visit(graph, name, &mut state)?;
    }
    Ok(state.into_order())
}

/// Render the cycle closing at `repeated`, e.g. `x -> y -> x`
fn cycle_chain(stack: &[Frame<'_>], repeated: &str) -> String {
    let start = stack
        .iter()
        .position(|frame| frame.name == repeated)
        .unwrap_or(0);
    stack[start..]
        .iter()
        .map(|frame| frame.name)
        .chain(std::iter::once(repeated))
        .collect::<Vec<_>>()
        .join(" -> ")
}
