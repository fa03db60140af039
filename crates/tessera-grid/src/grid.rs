//! [`SpatialGrid2D`]: a fixed uniform grid over a square area.

use crate::config::GridConfig;
use crate::results::QueryResults;
use crate::window::CellWindow;
use indexmap::{Equivalent, IndexMap};
use std::hash::Hash;
use tessera_core::{GridError, Position, Rect};
use tracing::{debug, trace};

/// Objects in one cell, with their exact positions.
type Bucket<T> = IndexMap<T, Position>;

/// A spatial grid for partitioning dynamically moving objects in a 2D area.
///
/// The grid covers a square [`Rect`] split into `size × size` square cells
/// of side [`cell_size`](Self::cell_size). Each tracked object lives in
/// exactly one cell bucket, so a radius query only has to look at the
/// handful of buckets around the query point. This works best when
/// objects are spread somewhat uniformly over the area.
///
/// Objects positioned outside the area are kept in the nearest edge cell.
/// They remain findable, but crowding the edge cells slows down queries
/// near the edge of the grid.
///
/// Object identity is `Eq + Hash`: two equal values are the same tracked
/// object.
///
/// # Thread Safety
///
/// The grid has no internal locking. Mutation takes `&mut self`; share it
/// across threads behind your own lock.
///
/// # Examples
///
/// ```
/// use tessera_grid::{Position, Rect, SpatialGrid2D};
///
/// let mut grid = SpatialGrid2D::new(2, Rect::new(-1.0, -1.0, 2.0, 2.0)).unwrap();
/// assert_eq!(grid.cell_size(), 1.0);
///
/// assert!(grid.add(1, Position::new(-0.5, -0.5)));
/// assert!(grid.add(2, Position::new(0.5, 0.5)));
///
/// assert_eq!(grid.find_nearest(Position::new(-0.4, -0.4), 1.0), Some(1));
/// assert_eq!(grid.find_nearest(Position::ZERO, 0.1), None);
///
/// let mut hits = Vec::new();
/// grid.find_within(Position::ZERO, 1.0, &mut hits);
/// hits.sort();
/// assert_eq!(hits, vec![1, 2]);
/// ```
#[derive(Clone, Debug)]
pub struct SpatialGrid2D<T> {
    size: u32,
    area: Rect,
    cell_size: f32,
    cells: Vec<Bucket<T>>,
    cell_of: IndexMap<T, usize>,
}

impl<T> SpatialGrid2D<T>
where
    T: Eq + Hash + Clone,
{
    /// Create a grid of `size × size` cells covering `area`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidArgument`] if `area` is not square, if
    /// `size` is zero, or if the rounded cell size is not positive. See
    /// [`GridConfig::validate`].
    pub fn new(size: u32, area: Rect) -> Result<Self, GridError> {
        Self::from_config(&GridConfig::new(size, area))
    }

    /// Create a grid from a [`GridConfig`].
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        Self::with_capacity(config, 0)
    }

    /// Create a grid with room for `objects` tracked objects before the
    /// object index reallocates.
    pub fn with_capacity(config: &GridConfig, objects: usize) -> Result<Self, GridError> {
        config.validate()?;
        let size = config.size;
        let cell_size = config.cell_size();
        let cell_count = size as usize * size as usize;
        debug!(
            "Spatial grid created: {size}x{size} cells of {cell_size} over ({}, {}) side {}",
            config.area.origin.x,
            config.area.origin.y,
            config.area.width()
        );
        Ok(Self {
            size,
            area: config.area,
            cell_size,
            cells: (0..cell_count).map(|_| Bucket::new()).collect(),
            cell_of: IndexMap::with_capacity(objects),
        })
    }

    /// Number of cells in each dimension.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Area covered by the grid.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Side length of one (square) cell.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Total number of cells, `size * size`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of tracked objects.
    pub fn len(&self) -> usize {
        self.cell_of.len()
    }

    /// Whether no objects are tracked.
    pub fn is_empty(&self) -> bool {
        self.cell_of.is_empty()
    }

    /// Reconstruct the [`GridConfig`] this grid was built from.
    pub fn config(&self) -> GridConfig {
        GridConfig::new(self.size, self.area)
    }

    // ── Cell addressing ─────────────────────────────────────────

    /// Column of the cell containing `pos`, clamped into `0..size`.
    pub fn cell_x(&self, pos: Position) -> u32 {
        self.axis_cell(pos.x - self.area.origin.x)
    }

    /// Row of the cell containing `pos`, clamped into `0..size`.
    pub fn cell_y(&self, pos: Position) -> u32 {
        self.axis_cell(pos.y - self.area.origin.y)
    }

    /// Flat index of the cell `(x, y)`: `x + y * size`.
    pub fn cell_index(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.size as usize
    }

    /// Flat index of the cell containing `pos`.
    pub fn cell_index_at(&self, pos: Position) -> usize {
        self.cell_index(self.cell_x(pos), self.cell_y(pos))
    }

    /// Whether `pos` falls outside the span of the cells and was clamped
    /// into an edge cell.
    ///
    /// The cells cover `size * cell_size`, which can differ from the area
    /// side because the cell size is rounded.
    pub fn is_clamped(&self, pos: Position) -> bool {
        let last = i64::from(self.size) - 1;
        let outside = |cell: i64| !(0..=last).contains(&cell);
        outside(self.raw_axis_cell(pos.x - self.area.origin.x))
            || outside(self.raw_axis_cell(pos.y - self.area.origin.y))
    }

    // NaN casts to 0 and infinities saturate.
    fn raw_axis_cell(&self, offset: f32) -> i64 {
        (offset / self.cell_size).floor() as i64
    }

    // Outside positions bunch up in the edge cells.
    fn axis_cell(&self, offset: f32) -> u32 {
        self.raw_axis_cell(offset).clamp(0, i64::from(self.size) - 1) as u32
    }

    /// The block of cells a query of `distance` around `pos` scans.
    ///
    /// Reaches `ceil(|distance| / cell_size)` cells out from the home cell
    /// in each direction, clamped to the grid.
    pub fn query_window(&self, pos: Position, distance: f32) -> CellWindow {
        let reach = (distance.abs() / self.cell_size).ceil() as u32;
        CellWindow::around(self.cell_x(pos), self.cell_y(pos), reach, self.size)
    }

    // ── Membership ──────────────────────────────────────────────

    /// Whether `obj` is tracked.
    pub fn contains<Q>(&self, obj: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.cell_of.contains_key(obj)
    }

    /// Cell index currently recorded for `obj`.
    pub fn cell_of<Q>(&self, obj: &Q) -> Option<usize>
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.cell_of.get(obj).copied()
    }

    /// Position currently recorded for `obj`.
    pub fn position_of<Q>(&self, obj: &Q) -> Option<Position>
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        let cell = *self.cell_of.get(obj)?;
        self.cells[cell].get(obj).copied()
    }

    /// Objects in cell `index` with their positions, in bucket order.
    ///
    /// Empty for out-of-range indices.
    pub fn cell_entries(&self, index: usize) -> impl Iterator<Item = (&T, Position)> + '_ {
        self.cells
            .get(index)
            .into_iter()
            .flat_map(|bucket| bucket.iter().map(|(obj, pos)| (obj, *pos)))
    }

    /// All tracked objects with their positions, cell by cell.
    pub fn iter(&self) -> impl Iterator<Item = (&T, Position)> + '_ {
        self.cells
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(obj, pos)| (obj, *pos)))
    }

    // ── Mutation ────────────────────────────────────────────────

    /// Add `obj` at `pos`.
    ///
    /// If `obj` is already tracked it is moved to `pos` instead (see
    /// [`move_to`](Self::move_to)) and `false` is returned.
    pub fn add(&mut self, obj: T, pos: Position) -> bool {
        if self.cell_of.contains_key(&obj) {
            self.move_to(obj, pos);
            return false;
        }
        self.insert_untracked(obj, pos);
        true
    }

    /// Stop tracking `obj`. Returns `false` if it was not tracked.
    pub fn remove<Q>(&mut self, obj: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        match self.cell_of.swap_remove(obj) {
            Some(cell) => {
                self.cells[cell].swap_remove(obj);
                true
            }
            None => false,
        }
    }

    /// Update the position of `obj`, moving it between buckets if it
    /// crossed into another cell.
    ///
    /// An untracked `obj` is added, so this doubles as an insert. Moves
    /// that stay inside the current cell only overwrite the stored
    /// position.
    pub fn move_to(&mut self, obj: T, pos: Position) {
        let new_cell = self.cell_index_at(pos);
        let Some(cell) = self.cell_of.get_mut(&obj) else {
            self.insert_untracked(obj, pos);
            return;
        };
        let old_cell = *cell;
        if old_cell == new_cell {
            if let Some(stored) = self.cells[old_cell].get_mut(&obj) {
                *stored = pos;
            }
            return;
        }
        *cell = new_cell;
        self.cells[old_cell].swap_remove(&obj);
        self.log_if_clamped(pos);
        trace!("Object moved from cell {old_cell} to cell {new_cell}");
        self.cells[new_cell].insert(obj, pos);
    }

    /// Remove every object. Geometry is unchanged and the grid can be
    /// reused immediately.
    pub fn clear(&mut self) {
        let dropped = self.cell_of.len();
        for bucket in &mut self.cells {
            bucket.clear();
        }
        self.cell_of.clear();
        debug!("Spatial grid cleared, dropped {dropped} objects");
    }

    fn insert_untracked(&mut self, obj: T, pos: Position) {
        let cell = self.cell_index_at(pos);
        self.log_if_clamped(pos);
        self.cells[cell].insert(obj.clone(), pos);
        self.cell_of.insert(obj, cell);
    }

    fn log_if_clamped(&self, pos: Position) {
        if self.is_clamped(pos) {
            trace!(
                "Position ({}, {}) outside grid cells, clamped to edge cell",
                pos.x,
                pos.y
            );
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// The closest object within `distance` of `pos`, if any.
    ///
    /// `distance` is used as its absolute value. An object exactly
    /// `distance` away still qualifies. Among objects at the same
    /// distance the winner depends on scan order and is unspecified. A NaN
    /// `distance` finds nothing.
    pub fn find_nearest(&self, pos: Position, distance: f32) -> Option<T> {
        let distance = distance.abs();
        if distance.is_nan() {
            return None;
        }
        let max_dsq = distance * distance;

        let mut best: Option<(&T, f32)> = None;
        for index in self.query_window(pos, distance).cell_indices() {
            for (obj, obj_pos) in &self.cells[index] {
                let dsq = obj_pos.distance_squared(pos);
                if dsq > max_dsq {
                    // outside the circle, inside the window
                    continue;
                }
                if best.is_none_or(|(_, best_dsq)| dsq < best_dsq) {
                    best = Some((obj, dsq));
                }
            }
        }
        best.map(|(obj, _)| obj.clone())
    }

    /// Write every object strictly closer than `distance` to `pos` into
    /// `out`.
    ///
    /// `out` is cleared first. Unlike [`find_nearest`](Self::find_nearest),
    /// an object exactly `distance` away is excluded. Results come in scan
    /// order (window rows, then columns, then bucket order), not sorted
    /// by distance. Reuse `out` across calls to avoid reallocating.
    pub fn find_within<R>(&self, pos: Position, distance: f32, out: &mut R)
    where
        R: QueryResults<T> + ?Sized,
    {
        out.clear();
        let distance = distance.abs();
        let max_dsq = distance * distance;

        for index in self.query_window(pos, distance).cell_indices() {
            for (obj, obj_pos) in &self.cells[index] {
                if obj_pos.distance_squared(pos) < max_dsq {
                    out.push(obj.clone());
                }
            }
        }
    }

    /// Allocating convenience wrapper around [`find_within`](Self::find_within).
    pub fn collect_within(&self, pos: Position, distance: f32) -> Vec<T> {
        let mut out = Vec::new();
        self.find_within(pos, distance, &mut out);
        out
    }
}
