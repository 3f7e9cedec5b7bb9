use crate::random::RandomSource;
use crate::{Error, Result};

/// Replays a fixed sequence of draws, starting over when it runs out
#[derive(Debug, Clone)]
pub struct ReplaySource {
    draws: Vec<f64>,
    next: usize,
    consumed: usize,
}

impl ReplaySource {
    /// Creates a replay source; every draw must lie in `[0, 1)`
    pub fn new(draws: Vec<f64>) -> Result<Self> {
        if draws.is_empty() {
            return Err(Error::invalid("draws", "replay sequence is empty"));
        }
        if let Some(bad) = draws.iter().find(|d| !(0.0..1.0).contains(*d)) {
            return Err(Error::invalid(
                "draws",
                format!("{} is outside [0, 1)", bad),
            ));
        }
        Ok(ReplaySource {
            draws,
            next: 0,
            consumed: 0,
        })
    }

    /// Number of draws handed out so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for ReplaySource {
    fn uniform(&mut self) -> f64 {
        let value = self.draws[self.next];
        self.next = (self.next + 1) % self.draws.len();
        self.consumed += 1;
        value
    }
}

/// Wraps another source and records every draw it hands out
#[derive(Debug, Clone)]
pub struct RecordingSource<S> {
    inner: S,
    trace: Vec<f64>,
}

impl<S: RandomSource> RecordingSource<S> {
    pub fn new(inner: S) -> Self {
        RecordingSource {
            inner,
            trace: Vec::new(),
        }
    }

    /// Draws recorded so far, in order
    pub fn trace(&self) -> &[f64] {
        &self.trace
    }

    /// Builds a source that replays the recorded draws
    pub fn replay(&self) -> Result<ReplaySource> {
        ReplaySource::new(self.trace.clone())
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: RandomSource> RandomSource for RecordingSource<S> {
    fn uniform(&mut self) -> f64 {
        let value = self.inner.uniform();
        self.trace.push(value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_replay_cycles() {
        let mut source = ReplaySource::new(vec![0.25, 0.75]).unwrap();
        let draws: Vec<f64> = (0..5).map(|_| source.uniform()).collect();
        assert_eq!(draws, vec![0.25, 0.75, 0.25, 0.75, 0.25]);
        assert_eq!(source.consumed(), 5);
    }

    #[test]
    fn test_replay_rejects_bad_draws() {
        assert!(ReplaySource::new(Vec::new()).is_err());
        assert!(ReplaySource::new(vec![0.5, 1.0]).is_err());
        assert!(ReplaySource::new(vec![-0.1]).is_err());
        assert!(ReplaySource::new(vec![f64::NAN]).is_err());
    }

    #[test]
    fn test_recording_replays_identically() {
        let mut recorder = RecordingSource::new(StdRng::seed_from_u64(5));
        let original: Vec<f64> = (0..16).map(|_| recorder.uniform()).collect();
        assert_eq!(recorder.trace(), original.as_slice());

        let mut replay = recorder.replay().unwrap();
        let replayed: Vec<f64> = (0..16).map(|_| replay.uniform()).collect();
        assert_eq!(original, replayed);
    }
}
