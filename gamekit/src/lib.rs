//! Gamekit Core - small game-utility building blocks
//!
//! Deterministic randomness, a flattened 2D grid and scalar math helpers.
//!
//! # Architecture
//!
//! - **rng**: Seeded random engine with convenience distributions
//! - **grid**: Fixed-size 2D container over a single linear buffer
//! - **math**: Clamp / lerp / remap style extension methods for floats
//! - **config**: JSON-loadable construction parameters
//!
//! # Critical Invariants
//!
//! 1. Same seed + same calls → same random sequence, on every platform
//! 2. A grid's buffer length is always `width * height`
//! 3. Cell (x, y) lives at linear index `x + y * width`

// Module declarations
pub mod config;
pub mod grid;
pub mod math;
pub mod rng;

// Re-exports for convenience
pub use config::{ConfigError, GamekitConfig, GridConfig, RandomConfig};
pub use grid::{Cells, Grid, GridError, Occupancy};
pub use math::{round_half_up_to_int, Scalar};
pub use rng::{RandomEngine, RandomError, WeightedChoice, Xorshift64Star};
