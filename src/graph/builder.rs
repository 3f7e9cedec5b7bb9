use crate::graph::edge_index::EdgeIndex;
use crate::graph::types::{Edge, Graph};
use crate::{Error, Result};

/// Assembles a [`Graph`] inside a single generator call.
///
/// The edge list, the ordered-pair lookup index and the per-node degree
/// counters are only ever changed together, so existence checks and degrees
/// always reflect the edges written so far.
#[derive(Debug)]
pub(crate) struct GraphBuilder {
    graph: Graph,
    index: EdgeIndex,
    degrees: Vec<usize>,
}

impl GraphBuilder {
    /// Reserves room for the final graph up front.
    ///
    /// Sizes whose storage cannot be reserved are reported as
    /// [`Error::InvalidArgument`] rather than aborting.
    pub fn with_capacity(nodes: usize, edges: usize) -> Result<Self> {
        let mut degrees = Vec::new();
        degrees
            .try_reserve_exact(nodes)
            .map_err(|err| Error::capacity("degree counters", err))?;
        let index =
            EdgeIndex::try_with_capacity(edges).map_err(|err| Error::capacity("edge index", err))?;
        Ok(GraphBuilder {
            graph: Graph::try_with_capacity(nodes, edges)?,
            index,
            degrees,
        })
    }

    /// Appends a node and returns its index
    pub fn add_node(&mut self) -> usize {
        self.degrees.push(0);
        self.graph.push_node()
    }

    pub fn add_nodes(&mut self, count: usize) {
        for _ in 0..count {
            self.add_node();
        }
    }

    pub fn node_count(&self) -> usize {
        self.degrees.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn degree(&self, node: usize) -> usize {
        self.degrees.get(node).copied().unwrap_or(0)
    }

    /// Sum of the degrees of nodes `0..end`
    pub fn degree_sum(&self, end: usize) -> usize {
        self.degrees.iter().take(end).sum()
    }

    /// True if the two nodes are joined in either orientation
    pub fn links(&self, a: usize, b: usize) -> bool {
        self.index.links(a, b)
    }

    /// Adds the edge `source -> target` and returns its position in the edge list
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<usize> {
        let n = self.node_count();
        if source >= n || target >= n || source == target || self.links(source, target) {
            return Err(Error::InvalidEdge(source, target));
        }
        let position = self.graph.push_edge(Edge::new(source, target));
        self.index.insert(source, target, position);
        self.degrees[source] += 1;
        self.degrees[target] += 1;
        Ok(position)
    }

    /// Repoints the existing edge `source -> from` to `source -> to`.
    ///
    /// The edge keeps its position in the edge list.
    pub fn retarget(&mut self, source: usize, from: usize, to: usize) -> Result<usize> {
        if to >= self.node_count() || to == source || self.links(source, to) {
            return Err(Error::InvalidEdge(source, to));
        }
        let position = self
            .index
            .retarget(source, from, to)
            .ok_or(Error::InvalidEdge(source, from))?;
        let edge = self
            .graph
            .edge_mut(position)
            .ok_or(Error::InvalidEdge(source, from))?;
        edge.target = to;
        self.degrees[from] -= 1;
        self.degrees[to] += 1;
        Ok(position)
    }

    pub fn finish(self) -> Result<Graph> {
        debug_assert_eq!(self.index.len(), self.graph.edge_count());
        if cfg!(debug_assertions) {
            self.graph.validate()?;
        }
        Ok(self.graph)
    }
}
