//! Lazy coordinate traversal

use std::iter::FusedIterator;

use super::container::Grid;

/// Iterator over `((x, y), &value)`, x-outer and y-inner
///
/// Created by [`Grid::cells`].
///
/// # Example
/// ```
/// use gamekit_core::Grid;
///
/// let grid = Grid::from_vec(2, 2, vec!['a', 'b', 'c', 'd']).unwrap();
/// let visited: Vec<_> = grid.cells().collect();
/// assert_eq!(
///     visited,
///     vec![((0, 0), &'a'), ((0, 1), &'c'), ((1, 0), &'b'), ((1, 1), &'d')]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Cells<'a, T> {
    grid: &'a Grid<T>,
    x: usize,
    y: usize,
    remaining: usize,
}

impl<'a, T> Cells<'a, T> {
    pub(super) fn new(grid: &'a Grid<T>) -> Self {
        Self {
            grid,
            x: 0,
            y: 0,
            remaining: grid.len(),
        }
    }
}

impl<'a, T> Iterator for Cells<'a, T> {
    type Item = ((usize, usize), &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let (x, y) = (self.x, self.y);
        let value = &self.grid.as_slice()[x + y * self.grid.width()];

        self.y += 1;
        if self.y == self.grid.height() {
            self.y = 0;
            self.x += 1;
        }
        self.remaining -= 1;

        Some(((x, y), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Cells<'_, T> {}

impl<T> FusedIterator for Cells<'_, T> {}
