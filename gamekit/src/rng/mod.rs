//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm as the bit source. `RandomEngine` layers
//! the game-facing distributions (ranges, odds, Gaussian, weighted choice)
//! on top of it.
//!
//! Prefer holding an explicit [`RandomEngine`]. The thread-local default
//! instance exists for call sites where threading an engine through is
//! impractical.

mod default;
mod engine;
mod weighted;
mod xorshift;

pub use default::{default_seed, set_default_seed, with_default};
pub use engine::{RandomEngine, RandomError};
pub use weighted::{WeightedChoice, DEFAULT_WEIGHT};
pub use xorshift::Xorshift64Star;
