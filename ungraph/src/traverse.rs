//! Graph walkers.
//!
//! The walkers keep their own traversal state and borrow the graph only
//! for the duration of a step, so several walkers can run over the same
//! graph. They implement the `petgraph` `Walker` trait, use
//! `Walker::iter` to obtain an iterator.
//!
//! Neighbors are always considered in the order in which their edges
//! were added.

use std::collections::{HashSet, VecDeque};
use std::mem;

pub use petgraph::visit::Walker;

use crate::graph::Graph;
use crate::node::NodeId;

/// Depth-first search using an explicit stack.
///
/// Nodes are returned in the order in which they are popped from the
/// stack for the first time. Since neighbors are pushed in edge order,
/// the most recently connected neighbor is explored first.
pub struct Dfs {
    stack: Vec<NodeId>,
    discovered: HashSet<NodeId>,
}

impl Dfs {
    pub fn new<V>(graph: &Graph<V>, start: NodeId) -> Self {
        Dfs {
            stack: vec![start],
            discovered: HashSet::with_capacity(graph.node_count()),
        }
    }

    pub fn next<V>(&mut self, graph: &Graph<V>) -> Option<NodeId> {
        while let Some(node) = self.stack.pop() {
            if !self.discovered.insert(node) {
                continue;
            }

            for neighbor in graph.ordered_neighbors(node) {
                if !self.discovered.contains(&neighbor) {
                    self.stack.push(neighbor);
                }
            }

            return Some(node);
        }

        None
    }
}

impl<'a, V> Walker<&'a Graph<V>> for Dfs {
    type Item = NodeId;

    fn walk_next(&mut self, context: &'a Graph<V>) -> Option<Self::Item> {
        self.next(context)
    }
}

/// Breadth-first search using an explicit queue.
pub struct Bfs {
    queue: VecDeque<NodeId>,
    discovered: HashSet<NodeId>,
}

impl Bfs {
    pub fn new<V>(graph: &Graph<V>, start: NodeId) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(start);

        Bfs {
            queue,
            discovered: HashSet::with_capacity(graph.node_count()),
        }
    }

    pub fn next<V>(&mut self, graph: &Graph<V>) -> Option<NodeId> {
        while let Some(node) = self.queue.pop_front() {
            if !self.discovered.insert(node) {
                continue;
            }

            for neighbor in graph.ordered_neighbors(node) {
                if !self.discovered.contains(&neighbor) {
                    self.queue.push_back(neighbor);
                }
            }

            return Some(node);
        }

        None
    }
}

impl<'a, V> Walker<&'a Graph<V>> for Bfs {
    type Item = NodeId;

    fn walk_next(&mut self, context: &'a Graph<V>) -> Option<Self::Item> {
        self.next(context)
    }
}

/// Level-synchronized breadth-first search.
///
/// Every node is returned together with its depth, the number of edges
/// on a shortest path from the start node. All nodes of one level are
/// returned before the first node of the next level.
pub struct BfsWithDepth {
    cur_stack: VecDeque<NodeId>,
    next_stack: VecDeque<NodeId>,
    discovered: HashSet<NodeId>,
    depth: usize,
}

impl BfsWithDepth {
    pub fn new<V>(graph: &Graph<V>, start: NodeId) -> Self {
        let mut discovered = HashSet::with_capacity(graph.node_count());
        discovered.insert(start);
        let mut cur_stack = VecDeque::new();
        cur_stack.push_back(start);

        BfsWithDepth {
            cur_stack,
            next_stack: VecDeque::new(),
            discovered,
            depth: 0,
        }
    }

    pub fn next<V>(&mut self, graph: &Graph<V>) -> Option<(NodeId, usize)> {
        if self.cur_stack.is_empty() && !self.next_stack.is_empty() {
            mem::swap(&mut self.cur_stack, &mut self.next_stack);
            self.depth += 1;
        }

        let node = self.cur_stack.pop_front()?;
        for neighbor in graph.ordered_neighbors(node) {
            if self.discovered.insert(neighbor) {
                self.next_stack.push_back(neighbor);
            }
        }

        Some((node, self.depth))
    }
}

impl<'a, V> Walker<&'a Graph<V>> for BfsWithDepth {
    type Item = (NodeId, usize);

    fn walk_next(&mut self, context: &'a Graph<V>) -> Option<Self::Item> {
        self.next(context)
    }
}

#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;
    use petgraph::visit::Walker;

    use super::{Bfs, BfsWithDepth, Dfs};
    use crate::graph::Graph;
    use crate::node::NodeId;

    lazy_static! {
        // 0 - 1, 0 - 2, 0 - 3, 1 - 4, 1 - 5, 5 - 6, 3 - 7, 3 - 8
        static ref TREE_DEPTH_4: (Graph<usize>, Vec<NodeId>) = {
            let mut graph = Graph::new();
            let ids: Vec<_> = (0..9).map(|v| graph.push(v)).collect();
            for &(a, b) in &[(0, 1), (0, 2), (0, 3), (1, 4), (1, 5), (5, 6), (3, 7), (3, 8)] {
                graph.add_edge(ids[a], ids[b]).unwrap();
            }
            (graph, ids)
        };
    }

    fn values(graph: &Graph<usize>, nodes: impl Iterator<Item = NodeId>) -> Vec<usize> {
        nodes.map(|node| graph[node]).collect()
    }

    #[test]
    fn bfs_with_depth_test() {
        let (graph, ids) = &*TREE_DEPTH_4;
        let visits: Vec<_> = BfsWithDepth::new(graph, ids[0])
            .iter(graph)
            .map(|(node, depth)| (graph[node], depth))
            .collect();
        assert_eq!(
            visits,
            vec![
                (0, 0),
                (1, 1),
                (2, 1),
                (3, 1),
                (4, 2),
                (5, 2),
                (7, 2),
                (8, 2),
                (6, 3)
            ]
        );
    }

    #[test]
    fn bfs_test() {
        let (graph, ids) = &*TREE_DEPTH_4;
        assert_eq!(
            values(graph, Bfs::new(graph, ids[0]).iter(graph)),
            vec![0, 1, 2, 3, 4, 5, 7, 8, 6]
        );
    }

    #[test]
    fn dfs_test() {
        let (graph, ids) = &*TREE_DEPTH_4;
        assert_eq!(
            values(graph, Dfs::new(graph, ids[0]).iter(graph)),
            vec![0, 3, 8, 7, 2, 1, 5, 6, 4]
        );
    }

    #[test]
    fn walkers_can_be_stepped() {
        let (graph, ids) = &*TREE_DEPTH_4;
        let mut dfs = Dfs::new(graph, ids[6]);
        assert_eq!(dfs.next(graph), Some(ids[6]));
        assert_eq!(dfs.next(graph), Some(ids[5]));
        assert_eq!(dfs.next(graph), Some(ids[1]));

        let mut bfs = Bfs::new(graph, ids[6]);
        assert_eq!(bfs.next(graph), Some(ids[6]));
        assert_eq!(bfs.next(graph), Some(ids[5]));
        assert_eq!(bfs.next(graph), Some(ids[1]));
        assert_eq!(bfs.next(graph), Some(ids[0]));
        assert_eq!(bfs.next(graph), Some(ids[4]));
    }

    #[test]
    fn walkers_on_isolated_node() {
        let mut graph = Graph::new();
        let a = graph.push(1usize);
        graph.push(2);

        assert_eq!(Dfs::new(&graph, a).iter(&graph).collect::<Vec<_>>(), vec![a]);
        assert_eq!(Bfs::new(&graph, a).iter(&graph).collect::<Vec<_>>(), vec![a]);
        assert_eq!(
            BfsWithDepth::new(&graph, a).iter(&graph).collect::<Vec<_>>(),
            vec![(a, 0)]
        );
    }
}
