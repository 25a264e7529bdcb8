//! Model reference validation
//!
//! Validates model-in-model references for circular containment. A model
//! that (transitively) contains itself has no finite layout, so the registry
//! refuses the edge that would close such a cycle.

use petgraph::algo::has_path_connecting;
use petgraph::graph::NodeIndex;
use petgraph::{Directed, Graph};
use std::collections::{HashMap, HashSet, VecDeque};

/// Model reference validator
///
/// Works on model indices within a single schema; an edge `(parent, child)`
/// means `parent` holds a reference to `child`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceValidator;

impl ReferenceValidator {
    /// Create a new reference validator
    pub fn new() -> Self {
        Self
    }

    /// Check whether adding `parent -> child` to `edges` closes a cycle
    ///
    /// Returns the cycle as model indices, starting and ending at `parent`,
    /// or `None` when the new edge is safe.
    pub fn check_circular_reference(
        &self,
        edges: &[(usize, usize)],
        parent: usize,
        child: usize,
    ) -> Option<Vec<usize>> {
        if parent == child {
            return Some(vec![parent, child]);
        }

        let mut graph = Graph::<usize, (), Directed>::new();
        let mut node_map: HashMap<usize, NodeIndex> = HashMap::new();

        for &(from, to) in edges.iter().chain(std::iter::once(&(parent, child))) {
            let from_node = *node_map
                .entry(from)
                .or_insert_with(|| graph.add_node(from));
            let to_node = *node_map.entry(to).or_insert_with(|| graph.add_node(to));
            graph.add_edge(from_node, to_node, ());
        }

        let child_node = *node_map.get(&child)?;
        let parent_node = *node_map.get(&parent)?;

        // The new edge closes a cycle iff the child already reaches the parent
        if !has_path_connecting(&graph, child_node, parent_node, None) {
            return None;
        }

        let mut cycle = vec![parent];
        cycle.extend(self.find_path(&graph, child_node, parent_node)?);
        Some(cycle)
    }

    /// Find the shortest path between two nodes (BFS)
    fn find_path(
        &self,
        graph: &Graph<usize, (), Directed>,
        from: NodeIndex,
        to: NodeIndex,
    ) -> Option<Vec<usize>> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        let mut parent = HashMap::new();

        queue.push_back(from);
        visited.insert(from);

        while let Some(node) = queue.pop_front() {
            if node == to {
                let mut path = Vec::new();
                let mut current = Some(to);
                while let Some(node_idx) = current {
                    path.push(graph[node_idx]);
                    current = parent.get(&node_idx).copied();
                }
                path.reverse();
                return Some(path);
            }

            for neighbor in graph.neighbors(node) {
                if visited.insert(neighbor) {
                    parent.insert(neighbor, node);
                    queue.push_back(neighbor);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_reference_is_a_cycle() {
        let validator = ReferenceValidator::new();
        assert_eq!(validator.check_circular_reference(&[], 3, 3), Some(vec![3, 3]));
    }

    #[test]
    fn test_chain_without_cycle() {
        let validator = ReferenceValidator::new();
        // 0 -> 1 -> 2, adding 0 -> 2 is a diamond, not a cycle
        let edges = [(0, 1), (1, 2)];
        assert_eq!(validator.check_circular_reference(&edges, 0, 2), None);
    }

    #[test]
    fn test_closing_edge_reports_cycle_path() {
        let validator = ReferenceValidator::new();
        let edges = [(0, 1), (1, 2)];
        assert_eq!(
            validator.check_circular_reference(&edges, 2, 0),
            Some(vec![2, 0, 1, 2])
        );
    }

    #[test]
    fn test_shared_child_is_not_a_cycle() {
        let validator = ReferenceValidator::new();
        let edges = [(0, 2), (1, 2)];
        assert_eq!(validator.check_circular_reference(&edges, 0, 1), None);
    }
}
