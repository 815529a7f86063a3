//! Nullable random: deterministic index selection.

use std::sync::{Arc, Mutex};
use tally_voting::RandomSource;

/// A deterministic random source for testing.
///
/// Returns pre-configured values in order, cycling when exhausted. Each value
/// is reduced modulo the requested range so it is always a valid pick.
#[derive(Clone)]
pub struct NullRandom {
    outputs: Arc<Vec<usize>>,
    index: Arc<Mutex<usize>>,
}

impl NullRandom {
    /// Create with a sequence of deterministic picks.
    pub fn new(outputs: Vec<usize>) -> Self {
        Self {
            outputs: Arc::new(outputs),
            index: Arc::new(Mutex::new(0)),
        }
    }

    /// Create with a single value that will be returned for every call.
    pub fn constant(value: usize) -> Self {
        Self::new(vec![value])
    }

    /// Number of picks made so far.
    pub fn calls(&self) -> usize {
        *self.index.lock().unwrap()
    }
}

impl RandomSource for NullRandom {
    fn pick(&self, len: usize) -> usize {
        let mut idx = self.index.lock().unwrap();
        let value = if self.outputs.is_empty() {
            0
        } else {
            self.outputs[*idx % self.outputs.len()]
        };
        *idx += 1;
        value % len.max(1)
    }

    fn name(&self) -> &str {
        "null-random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_outputs() {
        let r = NullRandom::new(vec![0, 2, 1]);
        let picks: Vec<usize> = (0..5).map(|_| r.pick(3)).collect();
        assert_eq!(picks, vec![0, 2, 1, 0, 2]);
        assert_eq!(r.calls(), 5);
    }

    #[test]
    fn values_wrap_into_range() {
        let r = NullRandom::constant(7);
        assert_eq!(r.pick(3), 1);
    }

    #[test]
    fn empty_script_picks_zero() {
        let r = NullRandom::new(Vec::new());
        assert_eq!(r.pick(4), 0);
    }
}
