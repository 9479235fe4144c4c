//! Graph nodes.

use petgraph::graph::NodeIndex;

/// Handle of a node in a [`Graph`](crate::graph::Graph).
///
/// Handles are handed out by the graph that allocates the node and stay
/// valid for the lifetime of that graph, also after the node is removed
/// from the graph's node set. Two handles are equal iff they refer to
/// the same node, regardless of the node values.
///
/// Passing a handle to another graph is only detected when its index is
/// out of bounds for that graph.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(NodeIndex);

impl NodeId {
    pub(crate) fn new(idx: NodeIndex) -> Self {
        NodeId(idx)
    }

    pub(crate) fn node_index(self) -> NodeIndex {
        self.0
    }

    /// Get the index of the node in the underlying `petgraph` graph.
    pub fn index(self) -> usize {
        self.0.index()
    }
}

impl From<NodeId> for NodeIndex {
    fn from(id: NodeId) -> Self {
        id.node_index()
    }
}

/// Graph node under construction.
///
/// A `Node` holds a value and the nodes that it should be adjacent to.
/// It is turned into a graph node with
/// [`Graph::create_node`](crate::graph::Graph::create_node), which
/// adds the adjacency as undirected edges:
///
/// ```
/// use ungraph::graph::Graph;
/// use ungraph::node::Node;
///
/// let mut graph = Graph::new();
/// let a = graph.push("a");
/// let b = graph.create_node(Node::with_adjacent("b", vec![a])).unwrap();
/// assert!(graph.is_adjacent(a, b).unwrap());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node<V> {
    value: V,
    adjacent: Vec<NodeId>,
}

impl<V> Node<V> {
    /// Construct a node without neighbors.
    pub fn new(value: V) -> Self {
        Node {
            value,
            adjacent: Vec::new(),
        }
    }

    /// Construct a node with the given neighbors.
    pub fn with_adjacent(value: V, adjacent: impl IntoIterator<Item = NodeId>) -> Self {
        Node {
            value,
            adjacent: adjacent.into_iter().collect(),
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Get the neighbors that the node will be connected to.
    pub fn adjacent(&self) -> &[NodeId] {
        &self.adjacent
    }

    pub fn into_value(self) -> V {
        self.value
    }

    pub(crate) fn into_parts(self) -> (V, Vec<NodeId>) {
        (self.value, self.adjacent)
    }
}
