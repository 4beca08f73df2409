//! Data-parallel traversal
//!
//! Fans per-cell work out over rayon's global pool. Visits are unordered and
//! nothing is aggregated; the visitor must not rely on shared mutable state.

use rayon::prelude::*;
use tracing::trace;

use super::container::Grid;

impl<T: Sync> Grid<T> {
    /// Visit every cell with its linear index, in parallel
    ///
    /// # Example
    /// ```
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use gamekit_core::Grid;
    ///
    /// let grid = Grid::from_vec(2, 2, vec![1usize, 2, 3, 4]).unwrap();
    /// let total = AtomicUsize::new(0);
    /// grid.par_for_each(|_, v| {
    ///     total.fetch_add(*v, Ordering::Relaxed);
    /// });
    /// assert_eq!(total.into_inner(), 10);
    /// ```
    pub fn par_for_each<F>(&self, visit: F)
    where
        F: Fn(usize, &T) + Sync + Send,
    {
        trace!(cells = self.len(), "parallel visit");
        self.as_slice()
            .par_iter()
            .enumerate()
            .for_each(|(index, cell)| visit(index, cell));
    }
}

impl<T: Send> Grid<T> {
    /// Transform every cell in place with its linear index, in parallel
    pub fn par_for_each_mut<F>(&mut self, visit: F)
    where
        F: Fn(usize, &mut T) + Sync + Send,
    {
        trace!(cells = self.len(), "parallel mutable visit");
        self.as_mut_slice()
            .par_iter_mut()
            .enumerate()
            .for_each(|(index, cell)| visit(index, cell));
    }
}
