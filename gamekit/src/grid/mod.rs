//! Flattened 2D container
//!
//! [`Grid<T>`] stores a fixed `width × height` rectangle in one `Vec<T>`.
//! Cell `(x, y)` lives at linear index `x + y * width` for the grid's whole
//! lifetime.
//!
//! # Key Principles
//!
//! 1. **Fixed shape**: dimensions never change after construction
//! 2. **Checked by default**: strict mode reports out-of-range access as
//!    [`GridError::OutOfBounds`]
//! 3. **Deterministic traversal**: coordinate visits run x-outer, y-inner

mod container;
mod iter;
mod occupancy;
mod parallel;

pub use container::Grid;
pub use iter::Cells;
pub use occupancy::Occupancy;

use thiserror::Error;

/// Errors that can occur during grid operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },

    #[error("Buffer of length {len} does not fit a {width}x{height} grid")]
    LengthMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
}
