//! Randomness source — the only place the composer touches an RNG.
//!
//! Everything else takes `&mut R where R: RandomSource + ?Sized`, so tests can
//! swap in a scripted source and the binary can pick a seeded or thread-local RNG.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Uniform choices for password composition. Not intended for key material.
pub trait RandomSource {
    /// Returns an index in `[0, n)`. `n` must be non-zero.
    fn uniform_choice(&mut self, n: usize) -> usize;

    /// Returns `true` with probability 0.5.
    fn uniform_bit(&mut self) -> bool;
}

/// Adapts any `rand::Rng` to `RandomSource`.
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        RngSource::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Deterministic source: the same seed always yields the same passwords.
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform_choice(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }

    fn uniform_bit(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Picks one character uniformly from an ASCII alphabet.
pub fn choose_char<R: RandomSource + ?Sized>(alphabet: &str, rng: &mut R) -> char {
    let bytes = alphabet.as_bytes();
    char::from(bytes[rng.uniform_choice(bytes.len())])
}

/// Replays pre-recorded choices, so tests can pin every draw.
#[cfg(test)]
pub struct ScriptedRandom {
    choices: std::collections::VecDeque<usize>,
    bits: std::collections::VecDeque<bool>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(choices: &[usize]) -> Self {
        ScriptedRandom {
            choices: choices.iter().copied().collect(),
            bits: Default::default(),
        }
    }

    pub fn with_bits(mut self, bits: &[bool]) -> Self {
        self.bits = bits.iter().copied().collect();
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.choices.is_empty() && self.bits.is_empty()
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn uniform_choice(&mut self, n: usize) -> usize {
        let choice = self.choices.pop_front().expect("scripted choices exhausted");
        assert!(choice < n, "scripted choice {choice} out of range 0..{n}");
        choice
    }

    fn uniform_bit(&mut self) -> bool {
        self.bits.pop_front().expect("scripted bits exhausted")
    }
}
