pub mod trace;

pub use trace::{RecordingSource, ReplaySource};

use rand::{Rng, RngCore};

/// A source of independent uniform draws in `[0, 1)`
///
/// Generators consume randomness only through this trait, in a fixed order, so
/// two sources yielding the same draw sequence produce identical graphs. Every
/// `rand` generator is a random source.
pub trait RandomSource {
    /// Returns a uniform value in `[0, 1)`
    fn uniform(&mut self) -> f64;

    /// Returns `floor(uniform() * upper)`, a uniform index in `0..upper`
    fn random_index(&mut self, upper: usize) -> usize {
        debug_assert!(upper > 0, "random_index needs a non-empty range");
        let index = (self.uniform() * upper as f64).floor() as usize;
        // Rounding can reach `upper` when the draw is just below 1.0
        index.min(upper.saturating_sub(1))
    }
}

impl<R: RngCore> RandomSource for R {
    fn uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}
