//! Undirected graphs with ordered adjacency.
//!
//! Nodes are allocated in a [`Graph`](graph::Graph) and referred to by
//! [`NodeId`](node::NodeId) handles. The graph maintains a node set,
//! symmetric edges, and offers depth-first search, breadth-first search
//! and shortest-path distances.
//!
//! ```
//! use ungraph::graph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.push("A");
//! let b = graph.push("B");
//! let c = graph.push("C");
//! graph.add_edge(a, b).unwrap();
//! graph.add_edge(b, c).unwrap();
//!
//! assert_eq!(graph.breadth_first_search(a).unwrap(), vec![&"A", &"B", &"C"]);
//! assert_eq!(graph.distance_of_shortest_path(a, c).unwrap(), Some(2));
//! ```

mod error;
pub use crate::error::GraphError;

pub mod graph;

pub mod node;

mod traverse;
pub use crate::traverse::{Bfs, BfsWithDepth, Dfs, Walker};
