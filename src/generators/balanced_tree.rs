//! Complete r-ary trees.

use serde::{Deserialize, Serialize};

use crate::generators::GraphGenerator;
use crate::graph::{Graph, GraphBuilder};
use crate::random::RandomSource;
use crate::{Error, Result};

/// A complete tree where every internal node has `r` children and every leaf
/// sits at depth `h`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancedTree {
    /// Children per internal node
    pub r: usize,
    /// Height of the tree; `0` is the root alone
    pub h: usize,
}

impl BalancedTree {
    pub fn new(r: usize, h: usize) -> Self {
        BalancedTree { r, h }
    }

    /// Number of nodes in the tree, `(r^(h+1) - 1) / (r - 1)`
    pub fn node_count(&self) -> Result<usize> {
        let overflow = || {
            Error::invalid(
                "h",
                format!("tree with r={} h={} is too large", self.r, self.h),
            )
        };
        match self.r {
            0 => Err(Error::invalid("r", "a tree needs at least one child per node")),
            1 => self.h.checked_add(1).ok_or_else(overflow),
            r => {
                let mut total: usize = 0;
                let mut level: usize = 1;
                for depth in 0..=self.h {
                    total = total.checked_add(level).ok_or_else(overflow)?;
                    if depth < self.h {
                        level = level.checked_mul(r).ok_or_else(overflow)?;
                    }
                }
                Ok(total)
            }
        }
    }

    /// Builds the tree breadth-first; no randomness is involved
    pub fn build(&self) -> Result<Graph> {
        let node_count = self.node_count()?;
        log::debug!("Building balanced tree r={} h={} ({} nodes)", self.r, self.h, node_count);

        let mut builder = GraphBuilder::with_capacity(node_count, node_count - 1)?;
        let root = builder.add_node();

        let mut frontier = vec![root];
        for _ in 0..self.h {
            let mut next = Vec::with_capacity(frontier.len() * self.r);
            for &parent in &frontier {
                for _ in 0..self.r {
                    let child = builder.add_node();
                    builder.add_edge(parent, child)?;
                    next.push(child);
                }
            }
            frontier = next;
        }

        builder.finish()
    }
}

impl GraphGenerator for BalancedTree {
    fn validate(&self) -> Result<()> {
        self.node_count().map(|_| ())
    }

    fn generate<R: RandomSource + ?Sized>(&self, _rng: &mut R) -> Result<Graph> {
        self.build()
    }

    fn name(&self) -> &'static str {
        "BalancedTree"
    }
}

/// Builds a complete `r`-ary tree of height `h` rooted at node 0
pub fn balanced_tree(r: usize, h: usize) -> Result<Graph> {
    BalancedTree::new(r, h).build()
}
