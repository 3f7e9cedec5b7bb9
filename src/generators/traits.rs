use crate::graph::Graph;
use crate::random::RandomSource;
use crate::Result;

/// Trait for random graph models
pub trait GraphGenerator {
    /// Checks the model parameters without generating anything
    fn validate(&self) -> Result<()>;

    /// Generates a graph, drawing all randomness from `rng`
    ///
    /// Parameters are validated first; an invalid model fails with
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) before any
    /// draw is consumed.
    fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Graph>;

    /// Get the name of the model
    fn name(&self) -> &'static str;
}
