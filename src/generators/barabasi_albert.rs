//! This module contains the Barabási–Albert preferential attachment model.
//!
//! Barabási, Albert-László, and Réka Albert. "Emergence of scaling in random
//! networks." Science 286.5439 (1999): 509-512.

use serde::{Deserialize, Serialize};

use crate::generators::GraphGenerator;
use crate::graph::{Graph, GraphBuilder};
use crate::random::RandomSource;
use crate::{Error, Result};

/// Barabási–Albert model parameters
///
/// Growth starts from a complete graph on `m0` seed nodes. Each of the
/// remaining `n - m0` nodes then joins with `m` edges to distinct existing
/// nodes, chosen with probability proportional to their degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarabasiAlbert {
    /// Total number of nodes, `n > 0`
    pub n: usize,
    /// Seed clique size, `0 < m0 < n`
    pub m0: usize,
    /// Edges added per new node, `0 < m <= m0`
    pub m: usize,
}

impl BarabasiAlbert {
    pub fn new(n: usize, m0: usize, m: usize) -> Self {
        BarabasiAlbert { n, m0, m }
    }

    /// Number of edges every valid run produces
    pub fn edge_count(&self) -> usize {
        let seed = self.m0.saturating_mul(self.m0.saturating_sub(1)) / 2;
        seed.saturating_add(self.n.saturating_sub(self.m0).saturating_mul(self.m))
    }

    /// Picks the node that new node `node` attaches to on attempt `attempt`.
    ///
    /// Walks the existing nodes in index order, skipping those already linked
    /// to `node`, and accumulates each one's normalised degree plus an equal
    /// share of the mass `consumed` by earlier attempts. The shares add up to
    /// one, so the first node whose running total reaches `r` is taken.
    fn pick_target(
        &self,
        builder: &GraphBuilder,
        node: usize,
        attempt: usize,
        r: f64,
        sum: f64,
        consumed: f64,
    ) -> Result<usize> {
        let share = consumed / (node - attempt) as f64;
        let mut p = 0.0;
        let mut last = None;
        for j in 0..node {
            if builder.links(node, j) {
                continue;
            }
            last = Some(j);
            // Only reachable with a single seed node, whose degree sum is zero
            if node == 1 {
                p = 1.0;
            } else {
                p += builder.degree(j) as f64 / sum + share;
            }
            if r <= p {
                return Ok(j);
            }
        }

        match last {
            Some(j) => {
                log::warn!(
                    "Attachment walk for node {} ended at p={} below r={}; taking node {}",
                    node,
                    p,
                    r,
                    j
                );
                Ok(j)
            }
            None => Err(Error::Unsatisfiable { node, attempts: attempt }),
        }
    }
}

impl GraphGenerator for BarabasiAlbert {
    fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(Error::invalid("n", "at least one node is required"));
        }
        if self.m0 == 0 || self.m0 >= self.n {
            return Err(Error::invalid(
                "m0",
                format!("seed size {} must be in 1..{}", self.m0, self.n),
            ));
        }
        if self.m == 0 || self.m > self.m0 {
            return Err(Error::invalid(
                "m",
                format!("edges per node {} must be in 1..={}", self.m, self.m0),
            ));
        }
        Ok(())
    }

    fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Graph> {
        self.validate()?;
        log::debug!(
            "Generating Barabasi-Albert n={} m0={} m={}",
            self.n,
            self.m0,
            self.m
        );

        let mut builder = GraphBuilder::with_capacity(self.n, self.edge_count())?;

        // Seed clique
        builder.add_nodes(self.m0);
        for i in 0..self.m0 {
            for j in i + 1..self.m0 {
                builder.add_edge(i, j)?;
            }
        }

        // Growth
        for i in self.m0..self.n {
            builder.add_node();
            let sum = builder.degree_sum(i) as f64;
            let mut consumed = 0.0;
            for attempt in 0..self.m {
                let r = rng.uniform();
                let target = self.pick_target(&builder, i, attempt, r, sum, consumed)?;
                if sum > 0.0 {
                    consumed += builder.degree(target) as f64 / sum;
                }
                builder.add_edge(i, target)?;
            }
        }

        builder.finish()
    }

    fn name(&self) -> &'static str {
        "BarabasiAlbert"
    }
}

/// Barabási–Albert graph with `n` nodes grown from an `m0`-clique, `m` edges
/// per new node
pub fn barabasi_albert<R: RandomSource + ?Sized>(
    n: usize,
    m0: usize,
    m: usize,
    rng: &mut R,
) -> Result<Graph> {
    BarabasiAlbert::new(n, m0, m).generate(rng)
}
