//! Game-facing random engine
//!
//! Wraps an [`Xorshift64Star`] bit source and exposes the convenience
//! distributions used by gameplay code: half-open and closed integer
//! ranges, stochastic rounding, odds checks, Gaussian deviates, taper and
//! triangular offsets, uniform item picks and weighted choices.
//!
//! # Determinism
//!
//! Every method advances the engine state. Two engines built from the same
//! seed and driven through the same sequence of calls produce identical
//! results on every platform.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::weighted::WeightedChoice;
use super::xorshift::Xorshift64Star;
use crate::config::RandomConfig;

/// Errors reported by the random engine
#[derive(Debug, Error, PartialEq)]
pub enum RandomError {
    #[error("Invalid argument: {name} must be non-negative, got {value}")]
    InvalidArgument { name: &'static str, value: i64 },
}

/// Seeded random engine
///
/// # Example
/// ```
/// use gamekit_core::RandomEngine;
///
/// let mut rng = RandomEngine::new(12345);
/// let roll = rng.inclusive_between(1, 6);
/// assert!((1..=6).contains(&roll));
///
/// let damage = rng.float_between(10.0, 20.0);
/// assert!(damage >= 10.0 && damage < 20.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomEngine {
    /// Seed most recently applied via `new`/`set_seed`
    seed: u64,
    bits: Xorshift64Star,
}

impl RandomEngine {
    /// Create an engine with an explicit seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            bits: Xorshift64Star::new(seed),
        }
    }

    /// Create an engine seeded from the wall clock
    ///
    /// Not reproducible. Use [`RandomEngine::new`] when runs must replay.
    pub fn from_time() -> Self {
        let seed = time_seed();
        debug!(seed, "seeding random engine from wall clock");
        Self::new(seed)
    }

    /// Create an engine from configuration (explicit seed or wall clock)
    pub fn from_config(config: &RandomConfig) -> Self {
        match config.seed {
            Some(seed) => Self::new(seed),
            None => Self::from_time(),
        }
    }

    /// Reseed, discarding all prior state
    pub fn set_seed(&mut self, seed: u64) {
        debug!(seed, previous = self.seed, "reseeding random engine");
        self.seed = seed;
        self.bits = Xorshift64Star::new(seed);
    }

    /// Seed most recently applied
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Raw generator state (for checkpointing/replay)
    pub fn state(&self) -> u64 {
        self.bits.state()
    }

    /// Next raw 64-bit output
    pub fn next_u64(&mut self) -> u64 {
        self.bits.next_u64()
    }

    // ------------------------------------------------------------------
    // Floats
    // ------------------------------------------------------------------

    /// Uniform float in [0, 1)
    pub fn float(&mut self) -> f64 {
        self.bits.next_f64()
    }

    /// Uniform float in [0, max)
    pub fn float_to(&mut self, max: f64) -> f64 {
        self.float_between(0.0, max)
    }

    /// Uniform float in [min, max)
    pub fn float_between(&mut self, min: f64, max: f64) -> f64 {
        let u = self.float();
        min + u * (max - min)
    }

    // ------------------------------------------------------------------
    // Integers
    // ------------------------------------------------------------------

    /// Integer in [0, |n|)
    ///
    /// The lower bound is always 0 and the magnitude of `n` is the
    /// exclusive upper bound, so `range(-5)` yields values in `0..5`.
    /// `range(0)` returns 0.
    pub fn range(&mut self, n: i64) -> i64 {
        self.bits.below(n.unsigned_abs()) as i64
    }

    /// Integer in [min, max)
    ///
    /// When `max < min` the bounds are swapped and the result is drawn from
    /// `[max, min)`. Equal bounds return `min`.
    ///
    /// # Example
    /// ```
    /// use gamekit_core::RandomEngine;
    ///
    /// let mut rng = RandomEngine::new(7);
    /// let v = rng.range_between(10, 3);
    /// assert!((3..10).contains(&v));
    /// ```
    pub fn range_between(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if max < min { (max, min) } else { (min, max) };
        let span = (hi as i128 - lo as i128) as u64;
        lo.wrapping_add(self.bits.below(span) as i64)
    }

    /// Integer in [0, n] (upper bound reachable)
    ///
    /// Negative `n` yields values in `[n, 0]`.
    pub fn inclusive(&mut self, n: i64) -> i64 {
        self.inclusive_between(0, n)
    }

    /// Integer in the closed interval between `min` and `max`
    ///
    /// The bounds may be given in either order.
    pub fn inclusive_between(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if max < min { (max, min) } else { (min, max) };
        let span = (hi as i128 - lo as i128 + 1) as u128;
        if span > u64::MAX as u128 {
            // Full i64 domain
            return self.bits.next_u64() as i64;
        }
        lo.wrapping_add(self.bits.below(span as u64) as i64)
    }

    // ------------------------------------------------------------------
    // Stochastic rounding
    // ------------------------------------------------------------------

    /// Stochastically round `value`, keeping the result as a float
    ///
    /// Returns `floor(value)`, plus one with probability equal to the
    /// fractional part, so the expected result equals `value` exactly.
    pub fn count_from_float(&mut self, value: f64) -> f64 {
        let base = value.floor();
        let fraction = value - base;
        if self.float() < fraction {
            base + 1.0
        } else {
            base
        }
    }

    /// Stochastically round `value` to an integer
    pub fn round(&mut self, value: f64) -> i64 {
        self.count_from_float(value) as i64
    }

    // ------------------------------------------------------------------
    // Gaussian
    // ------------------------------------------------------------------

    /// Standard normal deviate (mean 0, standard deviation 1)
    ///
    /// Marsaglia polar method. Pairs `(u, v)` are drawn uniformly from the
    /// square `[-1, 1)²` until they fall strictly inside the unit circle
    /// (excluding the origin). Only `u` is transformed; the second deviate
    /// the method could produce from `v` is discarded, so every call consumes
    /// a fresh pair.
    pub fn normal(&mut self) -> f64 {
        loop {
            let u = 2.0 * self.float() - 1.0;
            let v = 2.0 * self.float() - 1.0;
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                return u * (-2.0 * s.ln() / s).sqrt();
            }
        }
    }

    /// Normal deviate with the given mean and standard deviation
    pub fn normal_with(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.normal()
    }

    // ------------------------------------------------------------------
    // Odds
    // ------------------------------------------------------------------

    /// True with probability 1/n
    ///
    /// Computed as `range(n) == 0`, so `n` is taken by magnitude and
    /// `one_in(0)` is always true.
    pub fn one_in(&mut self, n: i64) -> bool {
        self.range(n) == 0
    }

    /// True with probability `percent / 100`
    pub fn percent(&mut self, percent: i64) -> bool {
        self.range(100) < percent
    }

    /// Geometric growth above `start`
    ///
    /// Increments while `one_in(chance_of_increment)` keeps succeeding and
    /// returns once it fails. A chance whose magnitude is 0 or 1 would
    /// succeed forever; `start` is returned unchanged in that case.
    pub fn taper(&mut self, start: i64, chance_of_increment: i64) -> i64 {
        if chance_of_increment.unsigned_abs() <= 1 {
            warn!(
                chance_of_increment,
                "taper chance never fails; returning start unchanged"
            );
            return start;
        }

        let mut value = start;
        while self.one_in(chance_of_increment) {
            value = value.saturating_add(1);
        }
        value
    }

    /// Triangular integer distribution peaking at `center`
    ///
    /// Results fall in `[center - range, center + range]`, with the center
    /// the most likely value. The offset is computed in `i128` and the result
    /// saturates at the `i64` range, so a center near `i64::MIN` or
    /// `i64::MAX` piles the clipped tail onto the boundary value.
    ///
    /// # Errors
    /// [`RandomError::InvalidArgument`] if `range` is negative.
    ///
    /// # Example
    /// ```
    /// use gamekit_core::{RandomEngine, RandomError};
    ///
    /// let mut rng = RandomEngine::new(3);
    /// let v = rng.triangle_int(10, 2).unwrap();
    /// assert!((8..=12).contains(&v));
    /// assert!(matches!(rng.triangle_int(0, -1), Err(RandomError::InvalidArgument { .. })));
    /// ```
    pub fn triangle_int(&mut self, center: i64, range: i64) -> Result<i64, RandomError> {
        if range < 0 {
            return Err(RandomError::InvalidArgument {
                name: "range",
                value: range,
            });
        }

        let x = self.inclusive(range) as i128;
        let y = self.inclusive(range) as i128;
        let value = if x <= y {
            center as i128 + x
        } else {
            center as i128 - range as i128 - 1 + x
        };
        Ok(value.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    // ------------------------------------------------------------------
    // Sequences
    // ------------------------------------------------------------------

    /// Uniformly pick one element, `None` for an empty slice
    pub fn item<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.range(items.len() as i64) as usize;
        items.get(index)
    }

    /// Pick a value according to its weight
    ///
    /// Draws uniformly in `[0, total_weight)` and walks the choices until the
    /// running weight exceeds the draw. If float rounding lets the walk run
    /// off the end, the last choice is returned. `None` for an empty slice.
    ///
    /// # Example
    /// ```
    /// use gamekit_core::{RandomEngine, WeightedChoice};
    ///
    /// let mut rng = RandomEngine::new(42);
    /// let loot = [
    ///     WeightedChoice::with_weight("copper", 90.0),
    ///     WeightedChoice::with_weight("gold", 10.0),
    /// ];
    /// let pick = rng.chance(&loot).unwrap();
    /// assert!(*pick == "copper" || *pick == "gold");
    /// ```
    pub fn chance<'a, T>(&mut self, choices: &'a [WeightedChoice<T>]) -> Option<&'a T> {
        let last = choices.last()?;

        let total: f64 = choices.iter().map(|choice| choice.weight).sum();
        let target = self.float_to(total);

        let mut running = 0.0;
        for choice in choices {
            running += choice.weight;
            if running > target {
                return Some(&choice.value);
            }
        }

        Some(&last.value)
    }

    /// Fisher-Yates shuffle in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.range_between(0, i as i64 + 1) as usize;
            items.swap(i, j);
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::from_time()
    }
}

/// Seed derived from the current wall-clock time in nanoseconds
pub(crate) fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
