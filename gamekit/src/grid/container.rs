//! Grid storage and indexed access

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::iter::Cells;
use super::occupancy::Occupancy;
use super::GridError;
use crate::config::{ConfigError, GridConfig};

/// Fixed-size 2D grid backed by a single linear buffer
///
/// Coordinates are signed so that callers can probe neighbours with
/// negative offsets; anything outside `[0, width) × [0, height)` is out of
/// bounds.
///
/// `Clone` produces an independent deep copy of the buffer.
///
/// # Example
/// ```
/// use gamekit_core::{Grid, GridError};
///
/// let mut grid: Grid<i32> = Grid::new(3, 2);
/// grid.set(2, 1, 7).unwrap();
/// assert_eq!(grid.get(2, 1), Ok(&7));
/// assert!(matches!(grid.get(3, 0), Err(GridError::OutOfBounds { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid<T>")]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
    strict: bool,
}

/// Unvalidated serialized form
#[derive(Deserialize)]
struct RawGrid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
    #[serde(default = "default_strict")]
    strict: bool,
}

fn default_strict() -> bool {
    true
}

impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, Self::Error> {
        let strict = raw.strict;
        Grid::from_vec(raw.width, raw.height, raw.cells).map(|grid| grid.with_strict(strict))
    }
}

impl<T: Default + Clone> Grid<T> {
    /// Create a grid with every cell set to `T::default()`
    ///
    /// # Panics
    /// Panics if `width * height` overflows `usize`. Use
    /// [`Grid::from_config`] to get an error instead.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, T::default())
    }

    /// Create a grid from configured dimensions and strictness
    ///
    /// # Errors
    /// [`ConfigError::InvalidDimensions`] if the cell count overflows.
    pub fn from_config(config: &GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.width, config.height).with_strict(config.strict))
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`
    ///
    /// # Panics
    /// Panics if `width * height` overflows `usize`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        let Some(len) = width.checked_mul(height) else {
            panic!("grid dimensions overflow usize");
        };
        trace!(width, height, "allocating grid");
        Self {
            width,
            height,
            cells: vec![value; len],
            strict: true,
        }
    }

    /// Copy a column-major nested source, `source[x][y]`
    ///
    /// The result addresses cells exactly like the source:
    /// `grid.get(x, y) == source[x][y]`. The copy walks the destination
    /// buffer in linear order so writes stay contiguous.
    ///
    /// # Errors
    /// [`GridError::LengthMismatch`] if the columns are ragged.
    pub fn from_columns(source: &[Vec<T>]) -> Result<Self, GridError> {
        let width = source.len();
        let height = source.first().map_or(0, Vec::len);

        if source.iter().any(|column| column.len() != height) {
            return Err(GridError::LengthMismatch {
                width,
                height,
                len: source.iter().map(Vec::len).sum(),
            });
        }

        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for column in source {
                cells.push(column[y].clone());
            }
        }

        trace!(width, height, "copied grid from nested columns");
        Ok(Self {
            width,
            height,
            cells,
            strict: true,
        })
    }

    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Value at `(x, y)`, or `fallback` when out of bounds
    pub fn get_or(&self, x: isize, y: isize, fallback: T) -> T {
        self.try_get(x, y).cloned().unwrap_or(fallback)
    }
}

impl<T> Grid<T> {
    /// Wrap an existing linear buffer
    ///
    /// # Errors
    /// [`GridError::LengthMismatch`] unless `cells.len() == width * height`.
    ///
    /// # Example
    /// ```
    /// use gamekit_core::Grid;
    ///
    /// let grid = Grid::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(grid.get(1, 1), Ok(&4));
    /// assert!(Grid::from_vec(2, 2, vec![1, 2, 3]).is_err());
    /// ```
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> Result<Self, GridError> {
        match width.checked_mul(height) {
            Some(len) if len == cells.len() => Ok(Self {
                width,
                height,
                cells,
                strict: true,
            }),
            _ => Err(GridError::LengthMismatch {
                width,
                height,
                len: cells.len(),
            }),
        }
    }

    /// Builder-style strictness toggle
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enable or disable strict bounds checking
    ///
    /// With strict mode off, `get`/`get_mut`/`set` skip the 2D range test
    /// and use `x + y * width` directly. Coordinates outside the grid may
    /// then alias a different cell. The linear buffer access itself stays
    /// checked, so this never reads or writes outside the buffer.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Whether out-of-range access is reported as an error
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `(x, y)` lies inside the grid
    ///
    /// Negative coordinates wrap to huge unsigned values, so one unsigned
    /// comparison per axis covers both ends.
    #[inline]
    pub fn is_in_bounds(&self, x: isize, y: isize) -> bool {
        (x as usize) < self.width && (y as usize) < self.height
    }

    /// Linear index of an in-bounds cell
    pub fn index_of(&self, x: isize, y: isize) -> Option<usize> {
        self.is_in_bounds(x, y)
            .then(|| x as usize + y as usize * self.width)
    }

    /// Coordinates of a linear index
    pub fn coordinates_of(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.cells.len()).then(|| (index % self.width, index / self.width))
    }

    fn out_of_bounds(&self, x: isize, y: isize) -> GridError {
        GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Resolve `(x, y)` to a buffer index, honouring strict mode
    fn resolve(&self, x: isize, y: isize) -> Result<usize, GridError> {
        if self.strict {
            return self.index_of(x, y).ok_or_else(|| self.out_of_bounds(x, y));
        }

        let index = x.wrapping_add(y.wrapping_mul(self.width as isize)) as usize;
        if index < self.cells.len() {
            Ok(index)
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }

    /// Value at `(x, y)`
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] in strict mode when `(x, y)` is outside the
    /// grid. See [`Grid::set_strict`] for the unchecked behaviour.
    pub fn get(&self, x: isize, y: isize) -> Result<&T, GridError> {
        let index = self.resolve(x, y)?;
        Ok(&self.cells[index])
    }

    /// Mutable value at `(x, y)`
    pub fn get_mut(&mut self, x: isize, y: isize) -> Result<&mut T, GridError> {
        let index = self.resolve(x, y)?;
        Ok(&mut self.cells[index])
    }

    /// Store `value` at `(x, y)`
    pub fn set(&mut self, x: isize, y: isize, value: T) -> Result<(), GridError> {
        *self.get_mut(x, y)? = value;
        Ok(())
    }

    /// Value at `(x, y)`, `None` when out of bounds
    ///
    /// Always range-checked, regardless of strict mode.
    pub fn try_get(&self, x: isize, y: isize) -> Option<&T> {
        self.index_of(x, y).map(|index| &self.cells[index])
    }

    /// True if any cell satisfies `predicate`
    pub fn exists(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.cells.iter().any(predicate)
    }

    /// Visit every value in buffer order
    pub fn for_each(&self, visit: impl FnMut(&T)) {
        self.cells.iter().for_each(visit);
    }

    /// Visit every value mutably in buffer order
    pub fn for_each_mut(&mut self, visit: impl FnMut(&mut T)) {
        self.cells.iter_mut().for_each(visit);
    }

    /// Visit every cell with its coordinates, x-outer and y-inner
    ///
    /// For a 2×2 grid the order is (0,0), (0,1), (1,0), (1,1).
    pub fn for_each_with_coordinates(&self, mut visit: impl FnMut(usize, usize, &T)) {
        for x in 0..self.width {
            for y in 0..self.height {
                visit(x, y, &self.cells[x + y * self.width]);
            }
        }
    }

    /// Lazy `((x, y), &value)` iterator in the same order as
    /// [`Grid::for_each_with_coordinates`]
    ///
    /// Every call starts a fresh traversal.
    pub fn cells(&self) -> Cells<'_, T> {
        Cells::new(self)
    }

    /// Backing buffer, borrowed
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Backing buffer, mutably borrowed (length is fixed)
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Consume the grid and return its backing buffer
    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }

    /// New grid of the same shape with `f` applied to every cell
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
            strict: self.strict,
        }
    }
}

impl<T: Occupancy> Grid<T> {
    /// In bounds and not vacant
    pub fn exists_at(&self, x: isize, y: isize) -> bool {
        self.try_get(x, y).is_some_and(|cell| !cell.is_vacant())
    }

    /// First non-vacant cell in buffer order
    pub fn first(&self) -> Option<&T> {
        self.cells.iter().find(|cell| !cell.is_vacant())
    }

    /// Last non-vacant cell in buffer order
    pub fn last(&self) -> Option<&T> {
        self.cells.iter().rev().find(|cell| !cell.is_vacant())
    }
}
