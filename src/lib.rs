//! randomgraph - Classical random graph generators
//!
//! This library builds synthetic graphs from four models used throughout network
//! science: balanced r-ary trees, Erdős–Rényi / Gilbert random graphs (both the
//! G(n, p) and G(n, m) parameterizations), the Watts–Strogatz small-world model
//! and the Barabási–Albert preferential-attachment model.
//!
//! Every generator is a pure function of its parameters and a [`RandomSource`].
//! Any `rand` generator is a random source, so a seeded `StdRng` makes every
//! output reproducible:
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use randomgraph::watts_strogatz;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let graph = watts_strogatz(20, 4, 0.1, &mut rng).unwrap();
//! assert_eq!(graph.edge_count(), 20 * 2);
//! ```

pub mod generators;
pub mod graph;
pub mod random;

pub use generators::{
    balanced_tree, barabasi_albert, ensemble, erdos_renyi, watts_strogatz, BalancedTree,
    BarabasiAlbert, ErdosRenyiNm, ErdosRenyiNp, GraphGenerator, Model, WattsStrogatz,
};
/// Re-export main types for convenient use
pub use graph::{Edge, Graph, Node};
pub use random::RandomSource;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("No valid target for node {node} after {attempts} attempts")]
    Unsatisfiable { node: usize, attempts: usize },

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Invalid model configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn capacity(what: &str, err: std::collections::TryReserveError) -> Self {
        Error::invalid("size", format!("cannot reserve {}: {}", what, err))
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
