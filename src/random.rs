//! Injectable randomness for maze generation.
//!
//! Every random choice a generator makes is funnelled through a single `RandomSource`, so a
//! seeded or scripted source makes generation fully reproducible.

use rand::{Rng, SeedableRng};
use rand::rngs::ThreadRng;
use rand_xorshift::XorShiftRng;

use crate::errors::*;
use error_chain::bail;

/// A source of floating point draws that should be uniformly distributed over `[0, 1)`.
///
/// Any `FnMut() -> f64` closure is a `RandomSource`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
    where F: FnMut() -> f64
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Production source backed by the thread local generator.
#[derive(Debug)]
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> ThreadRandom {
        ThreadRandom { rng: rand::thread_rng() }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        ThreadRandom::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Reproducible source: the same seed always yields the same draws.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: XorShiftRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> SeededRandom {
        SeededRandom { rng: XorShiftRng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed sequence of draws, wrapping around at the end.
///
/// An empty sequence always draws `0.0`.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    position: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> SequenceRandom {
        SequenceRandom {
            values,
            position: 0,
        }
    }

    /// How many draws have been taken so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        let value = if self.values.is_empty() {
            0.0
        } else {
            self.values[self.position % self.values.len()]
        };
        self.position += 1;
        value
    }
}

/// Draw an index uniformly from `0..len` as `floor(draw * len)`.
///
/// A draw outside of `[0, 1)` (NaN included) is rejected with `RandomSourceError`.
/// `len` must be non zero.
pub fn random_index<R>(random: &mut R, len: usize) -> Result<usize>
    where R: RandomSource + ?Sized
{
    debug_assert!(len > 0, "cannot draw an index from an empty range");

    let value = random.next_unit();
    if !(0.0..1.0).contains(&value) {
        bail!(ErrorKind::RandomSourceError(value));
    }

    // floating point rounding of value * len must never reach len
    let index = (value * len as f64).floor() as usize;
    Ok(index.min(len.saturating_sub(1)))
}

/// Fisher-Yates shuffle in place, from the last index down to 1, one draw per step.
pub fn shuffle<R, T>(random: &mut R, items: &mut [T]) -> Result<()>
    where R: RandomSource + ?Sized
{
    for i in (1..items.len()).rev() {
        let j = random_index(random, i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}
