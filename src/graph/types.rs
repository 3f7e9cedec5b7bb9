use serde::Serialize;
use std::collections::HashSet;

use crate::{Error, Result};

/// A vertex of a generated graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Display label, `"node <index>"`
    pub label: String,
    /// Position of the node in creation order
    pub index: usize,
}

impl Node {
    pub(crate) fn new(index: usize) -> Self {
        Node {
            label: format!("node {}", index),
            index,
        }
    }
}

/// A connection between two node indices
///
/// Edges are undirected for every model except the balanced tree, where they
/// point from parent to child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

impl Edge {
    pub fn new(source: usize, target: usize) -> Self {
        Edge { source, target }
    }

    /// The endpoints as an unordered pair, smaller index first
    pub fn unordered(&self) -> (usize, usize) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

/// A generated graph: nodes in index order and edges in creation order
///
/// Graphs are only produced by the generators and cannot be mutated afterwards.
/// The serialized form is `{ "nodes": [{ "label", "index" }], "edges": [{ "source", "target" }] }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub(crate) fn try_with_capacity(nodes: usize, edges: usize) -> Result<Self> {
        let mut graph = Graph::default();
        graph
            .nodes
            .try_reserve_exact(nodes)
            .map_err(|err| Error::capacity("nodes", err))?;
        graph
            .edges
            .try_reserve_exact(edges)
            .map_err(|err| Error::capacity("edges", err))?;
        Ok(graph)
    }

    /// Nodes in index order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in creation order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Consumes the graph, returning its node and edge lists
    pub fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        (self.nodes, self.edges)
    }

    /// Checks the structural invariants every generator guarantees.
    ///
    /// Node indices must be exactly `0..node_count()`, every edge endpoint must
    /// be in range, and no edge may be a self-loop or repeat an unordered pair.
    pub fn validate(&self) -> Result<()> {
        for (position, node) in self.nodes.iter().enumerate() {
            if node.index != position {
                return Err(Error::InvalidVertex(node.index));
            }
        }

        let n = self.nodes.len();
        let mut seen = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            if edge.source >= n || edge.target >= n || edge.source == edge.target {
                return Err(Error::InvalidEdge(edge.source, edge.target));
            }
            if !seen.insert(edge.unordered()) {
                return Err(Error::InvalidEdge(edge.source, edge.target));
            }
        }
        Ok(())
    }

    pub(crate) fn push_node(&mut self) -> usize {
        let index = self.nodes.len();
        self.nodes.push(Node::new(index));
        index
    }

    pub(crate) fn push_edge(&mut self, edge: Edge) -> usize {
        self.edges.push(edge);
        self.edges.len() - 1
    }

    pub(crate) fn edge_mut(&mut self, position: usize) -> Option<&mut Edge> {
        self.edges.get_mut(position)
    }
}
