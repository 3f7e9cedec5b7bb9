//! Erdős–Rényi / Gilbert random graphs.
//!
//! [`np`] includes every pair independently with probability `p`, [`nm`]
//! samples exactly `m` distinct pairs uniformly.

use serde::{Deserialize, Serialize};

use crate::generators::GraphGenerator;
use crate::graph::{Graph, GraphBuilder};
use crate::random::RandomSource;
use crate::{Error, Result};

/// Number of unordered pairs among `n` nodes, `None` on overflow
pub(crate) fn pair_count(n: usize) -> Option<usize> {
    n.checked_mul(n.saturating_sub(1)).map(|pairs| pairs / 2)
}

/// G(n, p): `n` nodes, each pair joined independently with probability `p`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErdosRenyiNp {
    pub n: usize,
    pub p: f64,
}

impl ErdosRenyiNp {
    pub fn new(n: usize, p: f64) -> Self {
        ErdosRenyiNp { n, p }
    }
}

impl GraphGenerator for ErdosRenyiNp {
    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.p) {
            return Err(Error::invalid(
                "p",
                format!("probability {} is outside [0, 1]", self.p),
            ));
        }
        Ok(())
    }

    fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Graph> {
        self.validate()?;
        let n = self.n;
        let expected = pair_count(n).map_or(0, |pairs| (pairs as f64 * self.p) as usize);
        log::debug!("Generating G(n, p) with n={} p={} (~{} edges)", n, self.p, expected);

        let mut builder = GraphBuilder::with_capacity(n, expected)?;
        for i in 0..n {
            builder.add_node();
            for j in 0..i {
                if rng.uniform() < self.p {
                    builder.add_edge(i, j)?;
                }
            }
        }

        log::debug!("G(n, p) finished with {} edges", builder.edge_count());
        builder.finish()
    }

    fn name(&self) -> &'static str {
        "ErdosRenyi.np"
    }
}

/// G(n, m): `n` nodes and exactly `m` distinct edges chosen uniformly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErdosRenyiNm {
    pub n: usize,
    pub m: usize,
}

impl ErdosRenyiNm {
    pub fn new(n: usize, m: usize) -> Self {
        ErdosRenyiNm { n, m }
    }
}

impl GraphGenerator for ErdosRenyiNm {
    fn validate(&self) -> Result<()> {
        let pairs = pair_count(self.n)
            .ok_or_else(|| Error::invalid("n", format!("{} nodes have too many pairs", self.n)))?;
        if self.m > pairs {
            return Err(Error::invalid(
                "m",
                format!(
                    "{} edges requested but only {} pairs exist among {} nodes",
                    self.m, pairs, self.n
                ),
            ));
        }
        Ok(())
    }

    fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Graph> {
        self.validate()?;
        let n = self.n;
        log::debug!("Generating G(n, m) with n={} m={}", n, self.m);

        let mut pool = Vec::new();
        pool.try_reserve_exact(pair_count(n).unwrap_or(0))
            .map_err(|err| Error::capacity("pair pool", err))?;

        let mut builder = GraphBuilder::with_capacity(n, self.m)?;
        builder.add_nodes(n);

        for i in 0..n {
            for j in i + 1..n {
                pool.push((i, j));
            }
        }

        // Each round removes exactly one pair, so every remaining pair stays reachable
        for _ in 0..self.m {
            let pick = rng.random_index(pool.len());
            let (source, target) = pool.swap_remove(pick);
            builder.add_edge(source, target)?;
        }

        builder.finish()
    }

    fn name(&self) -> &'static str {
        "ErdosRenyi.nm"
    }
}

/// Erdős–Rényi aka Gilbert: every pair `(i, j)` with `j < i` becomes the edge
/// `i -> j` with probability `p`
pub fn np<R: RandomSource + ?Sized>(n: usize, p: f64, rng: &mut R) -> Result<Graph> {
    ErdosRenyiNp::new(n, p).generate(rng)
}

/// Erdős–Rényi with a fixed edge count: `m` pairs sampled without replacement
pub fn nm<R: RandomSource + ?Sized>(n: usize, m: usize, rng: &mut R) -> Result<Graph> {
    ErdosRenyiNm::new(n, m).generate(rng)
}
