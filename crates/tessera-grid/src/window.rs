//! The rectangular block of cells scanned by a radius query.

/// An inclusive, grid-clamped range of cells `[min_x, max_x] × [min_y, max_y]`.
///
/// Produced by [`SpatialGrid2D::query_window`](crate::SpatialGrid2D::query_window).
/// The window is sized so that it covers every cell a circle of the query
/// radius can touch; it never wraps around the grid edges.
///
/// # Examples
///
/// ```
/// use tessera_grid::{Position, Rect, SpatialGrid2D};
///
/// let grid = SpatialGrid2D::<u32>::new(4, Rect::new(0.0, 0.0, 4.0, 4.0)).unwrap();
/// let window = grid.query_window(Position::new(0.5, 0.5), 1.0);
/// assert_eq!((window.min_x, window.max_x), (0, 1));
/// assert_eq!(window.cell_count(), 4);
/// assert_eq!(window.cell_indices().collect::<Vec<_>>(), vec![0, 1, 4, 5]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellWindow {
    /// First column scanned.
    pub min_x: u32,
    /// Last column scanned (inclusive).
    pub max_x: u32,
    /// First row scanned.
    pub min_y: u32,
    /// Last row scanned (inclusive).
    pub max_y: u32,
    stride: u32,
}

impl CellWindow {
    /// Window around the cell `(x, y)` reaching `reach` cells in every
    /// direction, clamped to a grid with `size` cells per side.
    ///
    /// `size` must be at least 1 and `(x, y)` must lie inside the grid.
    pub fn around(x: u32, y: u32, reach: u32, size: u32) -> Self {
        let last = size.saturating_sub(1);
        Self {
            min_x: x.saturating_sub(reach),
            max_x: x.saturating_add(reach).min(last),
            min_y: y.saturating_sub(reach),
            max_y: y.saturating_add(reach).min(last),
            stride: size,
        }
    }

    /// Number of columns in the window.
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Number of rows in the window.
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Number of cells in the window.
    pub fn cell_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Whether the cell `(x, y)` lies inside the window.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }

    /// Flat cell indices in row-major order (rows outer, columns inner).
    pub fn cell_indices(self) -> impl Iterator<Item = usize> {
        let stride = self.stride as usize;
        (self.min_y..=self.max_y).flat_map(move |y| {
            (self.min_x..=self.max_x).map(move |x| x as usize + y as usize * stride)
        })
    }
}
