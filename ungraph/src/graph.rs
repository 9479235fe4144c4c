//! Undirected graphs.

use std::collections::{btree_set, BTreeSet};
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::vec;

use itertools::Itertools;
use log::{debug, trace};
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::{EdgeRef, Walker};

use crate::error::GraphError;
use crate::node::{Node, NodeId};
use crate::traverse::{Bfs, BfsWithDepth, Dfs};

/// Undirected edge.
///
/// The edge weight is the creation stamp of the edge. Stamps increase
/// monotonically within a graph and determine the order in which the
/// neighbors of a node are visited.
pub type Edge = u64;

/// An undirected graph.
///
/// `Graph` stores nodes with values of type `V` and undirected edges
/// between them. Nodes are allocated by the graph and identified by
/// [`NodeId`] handles, so two nodes with the same value are still
/// different nodes.
///
/// Allocation and membership are separate: a node is only part of the
/// node set of the graph after [`Graph::add_node`], and leaves it again
/// with [`Graph::remove_node`]. Edges can connect any allocated nodes and
/// traversals follow edges regardless of membership.
///
/// This data structure is a thin wrapper around the `petgraph` `UnGraph`
/// data structure that enforces invariants such as edge symmetry and the
/// absence of parallel edges. The `into_inner`/`get_ref` methods can be
/// used to unwrap or get a reference to the wrapped graph.
#[derive(Clone, Debug)]
pub struct Graph<V> {
    graph: UnGraph<V, Edge>,
    nodes: BTreeSet<NodeIndex>,
    next_stamp: Edge,
}

impl<V> Graph<V> {
    /// Construct an empty graph.
    pub fn new() -> Self {
        Graph {
            graph: UnGraph::default(),
            nodes: BTreeSet::new(),
            next_stamp: 0,
        }
    }

    /// Allocate a node.
    ///
    /// The adjacency of `node` is added as edges. The node is not added to
    /// the node set of the graph, use [`Graph::add_node`] for that.
    ///
    /// Fails without modifying the graph when one of the neighbors was not
    /// allocated by this graph.
    pub fn create_node(&mut self, node: Node<V>) -> Result<NodeId, GraphError> {
        for &neighbor in node.adjacent() {
            self.check(neighbor)?;
        }

        let (value, adjacent) = node.into_parts();
        let id = NodeId::new(self.graph.add_node(value));
        debug!(
            "Allocated node {} with {} neighbors",
            id.index(),
            adjacent.len()
        );

        for neighbor in adjacent {
            self.connect(id, neighbor);
        }

        Ok(id)
    }

    /// Allocate a node and add it to the node set.
    pub fn push(&mut self, value: V) -> NodeId {
        let id = NodeId::new(self.graph.add_node(value));
        self.nodes.insert(id.node_index());
        debug!("Pushed node {}", id.index());
        id
    }

    /// Add an allocated node to the node set.
    ///
    /// Returns `true` if the node was not in the node set yet.
    pub fn add_node(&mut self, node: NodeId) -> Result<bool, GraphError> {
        let idx = self.check(node)?;
        let added = self.nodes.insert(idx);
        if added {
            debug!("Added node {}", node.index());
        }
        Ok(added)
    }

    /// Add allocated nodes to the node set.
    ///
    /// Either all nodes are added, or the graph is left untouched when one
    /// of the nodes was not allocated by this graph.
    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = NodeId>) -> Result<(), GraphError> {
        let nodes = nodes
            .into_iter()
            .map(|node| self.check(node))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Adding {} nodes", nodes.len());
        self.nodes.extend(nodes);
        Ok(())
    }

    /// Add an edge between `n1` and `n2`.
    ///
    /// Returns `true` if the nodes were not adjacent yet. Both nodes must be
    /// allocated by this graph, but they do not need to be in its node set.
    pub fn add_edge(&mut self, n1: NodeId, n2: NodeId) -> Result<bool, GraphError> {
        self.check(n1)?;
        self.check(n2)?;
        Ok(self.connect(n1, n2))
    }

    /// Remove the edge between `n1` and `n2`.
    ///
    /// Returns `true` if there was an edge to remove.
    pub fn remove_edge(&mut self, n1: NodeId, n2: NodeId) -> Result<bool, GraphError> {
        let idx1 = self.check(n1)?;
        let idx2 = self.check(n2)?;

        match self.graph.find_edge(idx1, idx2) {
            Some(edge) => {
                self.graph.remove_edge(edge);
                debug!("Removed edge {} - {}", n1.index(), n2.index());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a node from the node set.
    ///
    /// All edges of the node are removed, so that the node is no longer
    /// adjacent to any other node. The node itself stays allocated and can
    /// be added again, without its former edges.
    ///
    /// Returns `true` if the node was in the node set.
    pub fn remove_node(&mut self, node: NodeId) -> Result<bool, GraphError> {
        let idx = self.check(node)?;

        let mut severed = 0;
        // Edge indices are invalidated by removal, so look up the
        // first remaining edge after every removal.
        while let Some(edge) = self.first_edge(idx) {
            self.graph.remove_edge(edge);
            severed += 1;
        }

        let removed = self.nodes.remove(&idx);
        debug!(
            "Removed node {} (member: {}), severed {} edges",
            node.index(),
            removed,
            severed
        );

        Ok(removed)
    }

    /// Values of the nodes reachable from `start`, in depth-first order.
    ///
    /// See [`Dfs`] for the visiting order.
    pub fn depth_first_search(&self, start: NodeId) -> Result<Vec<&V>, GraphError> {
        self.check(start)?;
        let values: Vec<_> = Dfs::new(self, start)
            .iter(self)
            .map(|node| &self[node])
            .collect();
        trace!("DFS from {} visited {} nodes", start.index(), values.len());
        Ok(values)
    }

    /// Values of the nodes reachable from `start`, in breadth-first order.
    ///
    /// Nodes are ordered by their distance from `start`. Nodes at the same
    /// distance are ordered by the order in which they were discovered.
    pub fn breadth_first_search(&self, start: NodeId) -> Result<Vec<&V>, GraphError> {
        self.check(start)?;
        let values: Vec<_> = Bfs::new(self, start)
            .iter(self)
            .map(|node| &self[node])
            .collect();
        trace!("BFS from {} visited {} nodes", start.index(), values.len());
        Ok(values)
    }

    /// Values of the nodes reachable from `start`, grouped by level.
    ///
    /// The `i`-th level contains the nodes at distance `i` from `start`,
    /// in breadth-first order.
    pub fn breadth_first_levels(&self, start: NodeId) -> Result<Vec<Vec<&V>>, GraphError> {
        self.check(start)?;

        let mut levels = Vec::new();
        for (_, level) in &BfsWithDepth::new(self, start)
            .iter(self)
            .group_by(|&(_, depth)| depth)
        {
            levels.push(level.map(|(node, _)| &self[node]).collect());
        }

        Ok(levels)
    }

    /// Number of edges on a shortest path between `start` and `end`.
    ///
    /// Returns `None` if `end` is not reachable from `start`.
    pub fn distance_of_shortest_path(
        &self,
        start: NodeId,
        end: NodeId,
    ) -> Result<Option<usize>, GraphError> {
        self.check(start)?;
        self.check(end)?;

        let distance = BfsWithDepth::new(self, start)
            .iter(self)
            .find(|&(node, _)| node == end)
            .map(|(_, depth)| depth);
        trace!(
            "Distance {} - {}: {:?}",
            start.index(),
            end.index(),
            distance
        );

        Ok(distance)
    }

    /// Check whether `node` is in the node set.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node.node_index())
    }

    /// Get the number of nodes in the node set.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the number of allocated nodes.
    ///
    /// This includes nodes that were never added to or that were removed
    /// from the node set.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Get an iterator over the nodes in the node set, in allocation order.
    pub fn nodes(&self) -> Nodes {
        Nodes(self.nodes.iter())
    }

    /// Get the neighbors of `node`, in the order in which the edges were
    /// added.
    pub fn neighbors(&self, node: NodeId) -> Result<Neighbors, GraphError> {
        self.check(node)?;
        Ok(self.ordered_neighbors(node))
    }

    /// Check whether there is an edge between `n1` and `n2`.
    pub fn is_adjacent(&self, n1: NodeId, n2: NodeId) -> Result<bool, GraphError> {
        let idx1 = self.check(n1)?;
        let idx2 = self.check(n2)?;
        Ok(self.graph.find_edge(idx1, idx2).is_some())
    }

    /// Get the value of an allocated node.
    pub fn value(&self, node: NodeId) -> Option<&V> {
        self.graph.node_weight(node.node_index())
    }

    pub fn value_mut(&mut self, node: NodeId) -> Option<&mut V> {
        self.graph.node_weight_mut(node.node_index())
    }

    /// Get a reference to the `UnGraph` of all allocated nodes.
    pub fn get_ref(&self) -> &UnGraph<V, Edge> {
        &self.graph
    }

    /// Unwrap the `UnGraph` of all allocated nodes.
    pub fn into_inner(self) -> UnGraph<V, Edge> {
        self.graph
    }

    pub(crate) fn ordered_neighbors(&self, node: NodeId) -> Neighbors {
        let idx = node.node_index();
        let mut edges: Vec<_> = self
            .graph
            .edges(idx)
            .map(|edge| {
                let neighbor = if edge.source() == idx {
                    edge.target()
                } else {
                    edge.source()
                };
                (*edge.weight(), neighbor)
            })
            .collect();
        edges.sort_unstable_by_key(|&(stamp, _)| stamp);

        Neighbors(
            edges
                .into_iter()
                .map(|(_, neighbor)| neighbor)
                .collect::<Vec<_>>()
                .into_iter(),
        )
    }

    fn first_edge(&self, idx: NodeIndex) -> Option<EdgeIndex> {
        self.graph.edges(idx).next().map(|edge| edge.id())
    }

    fn check(&self, node: NodeId) -> Result<NodeIndex, GraphError> {
        if node.index() >= self.graph.node_count() {
            return Err(GraphError::NodeOutOfBounds {
                node: node.index(),
                node_count: self.graph.node_count(),
            });
        }

        Ok(node.node_index())
    }

    fn connect(&mut self, n1: NodeId, n2: NodeId) -> bool {
        let (idx1, idx2) = (n1.node_index(), n2.node_index());
        if self.graph.find_edge(idx1, idx2).is_some() {
            return false;
        }

        let stamp = self.next_stamp;
        self.next_stamp += 1;
        self.graph.add_edge(idx1, idx2, stamp);
        debug!("Added edge {} - {}", n1.index(), n2.index());

        true
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Graph::new()
    }
}

impl<V> FromIterator<V> for Graph<V> {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = V>,
    {
        let mut graph = Graph::new();
        for value in iter {
            graph.push(value);
        }
        graph
    }
}

impl<V> From<Graph<V>> for UnGraph<V, Edge> {
    fn from(graph: Graph<V>) -> Self {
        graph.into_inner()
    }
}

impl<V> Index<NodeId> for Graph<V> {
    type Output = V;

    fn index(&self, node: NodeId) -> &Self::Output {
        &self.graph[node.node_index()]
    }
}

impl<V> IndexMut<NodeId> for Graph<V> {
    fn index_mut(&mut self, node: NodeId) -> &mut Self::Output {
        &mut self.graph[node.node_index()]
    }
}

/// Iterator over the nodes in the node set of a graph.
pub struct Nodes<'a>(btree_set::Iter<'a, NodeIndex>);

impl<'a> Iterator for Nodes<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|&idx| NodeId::new(idx))
    }
}

/// Iterator over the neighbors of a node.
pub struct Neighbors(vec::IntoIter<NodeIndex>);

impl Iterator for Neighbors {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(NodeId::new)
    }
}
