//! Per-thread default engine
//!
//! Each thread lazily gets its own [`RandomEngine`], seeded from the wall
//! clock the first time it is touched. There is no cross-thread sharing
//! and therefore no locking; threads that need a common sequence must pass
//! an explicit engine around instead.

use std::cell::RefCell;

use tracing::debug;

use super::engine::{time_seed, RandomEngine};

thread_local! {
    static DEFAULT_ENGINE: RefCell<RandomEngine> = RefCell::new({
        let seed = time_seed();
        debug!(seed, "initialising thread default random engine");
        RandomEngine::new(seed)
    });
}

/// Run `f` against this thread's default engine
///
/// # Example
/// ```
/// use gamekit_core::rng::{set_default_seed, with_default};
///
/// set_default_seed(42);
/// let roll = with_default(|rng| rng.inclusive_between(1, 6));
/// assert!((1..=6).contains(&roll));
/// ```
///
/// # Panics
/// Panics if called re-entrantly from inside `f`.
pub fn with_default<R>(f: impl FnOnce(&mut RandomEngine) -> R) -> R {
    DEFAULT_ENGINE.with(|engine| f(&mut engine.borrow_mut()))
}

/// Reseed this thread's default engine
pub fn set_default_seed(seed: u64) {
    with_default(|engine| engine.set_seed(seed));
}

/// Seed of this thread's default engine
pub fn default_seed() -> u64 {
    with_default(|engine| engine.seed())
}
