//! Random sources.
//!
//! Every entry point takes a `&mut dyn UniformSource` (or a generic `S: UniformSource`)
//! instead of reaching for thread-local randomness, so tests can script the exact
//! sequence of draws and the JSON API can replay a match from its seed.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform values in `[0, 1)`.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;

    /// `floor(u * n)`, i.e. a uniform index in `0..n`. `None` for an empty range,
    /// without consuming a draw.
    fn next_index(&mut self, n: usize) -> Option<usize> {
        if n == 0 {
            return None;
        }
        let idx = (self.next_uniform() * n as f64).floor() as usize;
        Some(idx.min(n - 1))
    }
}

impl<T: UniformSource + ?Sized> UniformSource for &mut T {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<ChaCha8Rng> {
    /// Deterministic source: same seed, same match.
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> UniformSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Handy for forcing a branch: `ScriptedSource::constant(0.99)` never clears the
/// per-minute event threshold. Test builds only (or the `test-util` feature).
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(any(test, feature = "test-util"))]
impl ScriptedSource {
    /// An empty script replays `0.0`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, cursor: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

#[cfg(any(test, feature = "test-util"))]
impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
