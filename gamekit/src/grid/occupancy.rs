//! Empty-cell marker for grid elements

/// Lets an element type mark a cell as empty
///
/// [`Grid::first`](super::Grid::first), [`Grid::last`](super::Grid::last) and
/// [`Grid::exists_at`](super::Grid::exists_at) skip vacant cells. Types with
/// no natural empty value keep the default `false`, so those operations fall
/// back to plain slot access.
///
/// # Example
/// ```
/// use gamekit_core::{Grid, Occupancy};
///
/// #[derive(Clone, Default)]
/// struct Tile(u8);
///
/// impl Occupancy for Tile {
///     fn is_vacant(&self) -> bool {
///         self.0 == 0
///     }
/// }
///
/// let mut grid: Grid<Tile> = Grid::new(2, 2);
/// grid.set(1, 1, Tile(4)).unwrap();
/// assert!(grid.exists_at(1, 1));
/// assert!(!grid.exists_at(0, 0));
/// ```
pub trait Occupancy {
    /// True when the cell holds nothing
    fn is_vacant(&self) -> bool {
        false
    }
}

impl<T> Occupancy for Option<T> {
    fn is_vacant(&self) -> bool {
        self.is_none()
    }
}

macro_rules! never_vacant {
    ($($ty:ty),* $(,)?) => {
        $(impl Occupancy for $ty {})*
    };
}

never_vacant!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String,
);

impl Occupancy for &str {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_vacancy() {
        assert!(None::<u8>.is_vacant());
        assert!(!Some(0u8).is_vacant());
    }

    #[test]
    fn test_value_types_never_vacant() {
        assert!(!0i32.is_vacant());
        assert!(!String::new().is_vacant());
        assert!(!false.is_vacant());
    }
}
