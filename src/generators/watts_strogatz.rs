//! Watts–Strogatz small-world graphs.
//!
//! A ring lattice where every node links to its `K/2` successors, followed by
//! a rewiring pass that repoints each lattice edge to a random node with
//! probability `beta`.

use serde::{Deserialize, Serialize};

use crate::generators::GraphGenerator;
use crate::graph::{Graph, GraphBuilder};
use crate::random::RandomSource;
use crate::{Error, Result};

/// Default number of target draws allowed per candidate node when rewiring
pub const DEFAULT_REWIRE_ATTEMPT_FACTOR: usize = 64;

fn default_rewire_attempt_factor() -> usize {
    DEFAULT_REWIRE_ATTEMPT_FACTOR
}

/// Watts–Strogatz model parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WattsStrogatz {
    /// Number of nodes, at least `k + 1`
    pub n: usize,
    /// Mean degree; odd values are rounded down to the nearest even one
    pub k: usize,
    /// Rewiring probability in `[0, 1]`
    pub beta: f64,
    /// A single rewire gives up after `rewire_attempt_factor * (n - 1)` target draws
    #[serde(default = "default_rewire_attempt_factor")]
    pub rewire_attempt_factor: usize,
}

impl WattsStrogatz {
    pub fn new(n: usize, k: usize, beta: f64) -> Self {
        WattsStrogatz {
            n,
            k,
            beta,
            rewire_attempt_factor: DEFAULT_REWIRE_ATTEMPT_FACTOR,
        }
    }

    /// Set the retry budget for a single rewire
    pub fn with_rewire_attempt_factor(mut self, factor: usize) -> Self {
        self.rewire_attempt_factor = factor;
        self
    }

    /// Neighbours linked on each side of the ring
    pub fn reach(&self) -> usize {
        self.k / 2
    }

    /// Draws a node that is neither `node` nor already linked to it
    fn draw_target<R: RandomSource + ?Sized>(
        &self,
        builder: &GraphBuilder,
        rng: &mut R,
        node: usize,
    ) -> Result<usize> {
        let n = self.n;
        if builder.degree(node) >= n - 1 {
            return Err(Error::Unsatisfiable { node, attempts: 0 });
        }

        let max_attempts = self.rewire_attempt_factor.saturating_mul(n - 1);
        for _ in 0..max_attempts {
            // Draw among the n - 1 other nodes, skipping over `node` itself
            let mut target = rng.random_index(n - 1);
            if target >= node {
                target += 1;
            }
            if !builder.links(node, target) {
                return Ok(target);
            }
        }
        Err(Error::Unsatisfiable {
            node,
            attempts: max_attempts,
        })
    }
}

impl GraphGenerator for WattsStrogatz {
    fn validate(&self) -> Result<()> {
        if self.n <= self.k {
            return Err(Error::invalid(
                "k",
                format!(
                    "mean degree {} needs at least {} nodes, got {}",
                    self.k,
                    self.k.saturating_add(1),
                    self.n
                ),
            ));
        }
        if !(0.0..=1.0).contains(&self.beta) {
            return Err(Error::invalid(
                "beta",
                format!("probability {} is outside [0, 1]", self.beta),
            ));
        }
        if self.rewire_attempt_factor == 0 {
            return Err(Error::invalid("rewire_attempt_factor", "must be at least 1"));
        }
        Ok(())
    }

    fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Graph> {
        self.validate()?;
        let n = self.n;
        let reach = self.reach();
        if self.k % 2 == 1 {
            log::debug!("Odd mean degree {} treated as {}", self.k, 2 * reach);
        }
        let edge_count = n.checked_mul(reach).ok_or_else(|| {
            Error::invalid("n", format!("{} nodes with reach {} overflow", n, reach))
        })?;
        log::debug!("Generating Watts-Strogatz n={} k={} beta={}", n, self.k, self.beta);

        let mut builder = GraphBuilder::with_capacity(n, edge_count)?;
        builder.add_nodes(n);

        // Ring lattice
        for i in 0..n {
            for j in 1..=reach {
                builder.add_edge(i, (i + j) % n)?;
            }
        }

        // Rewiring, in lattice order
        let mut rewired = 0;
        for i in 0..n {
            for j in 1..=reach {
                if rng.uniform() < self.beta {
                    let old = (i + j) % n;
                    let target = self.draw_target(&builder, rng, i)?;
                    builder.retarget(i, old, target)?;
                    log::trace!("Rewired {} -> {} to {} -> {}", i, old, i, target);
                    rewired += 1;
                }
            }
        }

        log::debug!("Watts-Strogatz rewired {} of {} edges", rewired, edge_count);
        builder.finish()
    }

    fn name(&self) -> &'static str {
        "WattsStrogatz"
    }
}

/// Watts–Strogatz small-world graph with `n` nodes, mean degree `k` and
/// rewiring probability `beta`
pub fn watts_strogatz<R: RandomSource + ?Sized>(
    n: usize,
    k: usize,
    beta: f64,
    rng: &mut R,
) -> Result<Graph> {
    WattsStrogatz::new(n, k, beta).generate(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use crate::random::ReplaySource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_beta_zero_is_ring_lattice() {
        let mut rng = StdRng::seed_from_u64(4);
        let graph = watts_strogatz(10, 4, 0.0, &mut rng).unwrap();
        let expected: Vec<Edge> = (0..10)
            .flat_map(|i| (1..=2).map(move |j| Edge::new(i, (i + j) % 10)))
            .collect();
        assert_eq!(graph.edges(), expected.as_slice());

        // A draw of exactly 0.0 must not rewire when beta is 0
        let mut source = ReplaySource::new(vec![0.0]).unwrap();
        let graph = watts_strogatz(10, 4, 0.0, &mut source).unwrap();
        assert_eq!(graph.edges(), expected.as_slice());
    }

    #[test]
    fn test_scripted_rewire() {
        // Node 0 rewires 0 -> 1; index 2 of the other four nodes is node 3
        let mut source = ReplaySource::new(vec![0.1, 0.5, 0.9, 0.9, 0.9, 0.9]).unwrap();
        let graph = watts_strogatz(5, 2, 0.5, &mut source).unwrap();
        assert_eq!(
            graph.edges(),
            &[
                Edge::new(0, 3),
                Edge::new(1, 2),
                Edge::new(2, 3),
                Edge::new(3, 4),
                Edge::new(4, 0),
            ]
        );
        assert_eq!(source.consumed(), 6);
    }

    #[test]
    fn test_rewire_redraws_existing_links() {
        // 0.0 lands on node 1, which 0 already links to; 0.25 lands on node 2
        let mut source = ReplaySource::new(vec![0.1, 0.0, 0.25, 0.9, 0.9, 0.9, 0.9]).unwrap();
        let graph = watts_strogatz(5, 2, 0.5, &mut source).unwrap();
        assert_eq!(graph.edges()[0], Edge::new(0, 2));
        assert_eq!(source.consumed(), 7);
    }

    #[test]
    fn test_full_rewiring_keeps_sources_and_count() {
        let mut rng = StdRng::seed_from_u64(21);
        let graph = watts_strogatz(60, 6, 1.0, &mut rng).unwrap();
        assert_eq!(graph.edge_count(), 60 * 3);
        assert!(graph.validate().is_ok());
        for (position, edge) in graph.edges().iter().enumerate() {
            assert_eq!(edge.source, position / 3);
        }
    }

    #[test]
    fn test_complete_lattice_cannot_rewire() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            watts_strogatz(3, 2, 1.0, &mut rng),
            Err(Error::Unsatisfiable { node: 0, attempts: 0 })
        ));
        // Without rewiring the complete lattice is fine
        assert_eq!(watts_strogatz(5, 4, 0.0, &mut rng).unwrap().edge_count(), 10);
    }

    #[test]
    fn test_degenerate_source_hits_retry_cap() {
        let mut source = ReplaySource::new(vec![0.0]).unwrap();
        let result = WattsStrogatz::new(5, 2, 1.0)
            .with_rewire_attempt_factor(2)
            .generate(&mut source);
        assert!(matches!(
            result,
            Err(Error::Unsatisfiable { node: 0, attempts: 8 })
        ));
    }

    #[test]
    fn test_invalid_parameters() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            watts_strogatz(4, 4, 0.1, &mut rng),
            Err(Error::InvalidArgument { name: "k", .. })
        ));
        assert!(matches!(
            watts_strogatz(10, 4, 1.1, &mut rng),
            Err(Error::InvalidArgument { name: "beta", .. })
        ));
        assert!(WattsStrogatz::new(10, 4, 0.1)
            .with_rewire_attempt_factor(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_odd_degree_rounds_down() {
        let mut rng = StdRng::seed_from_u64(0);
        let graph = watts_strogatz(9, 5, 0.0, &mut rng).unwrap();
        assert_eq!(graph.edge_count(), 9 * 2);
    }
}
