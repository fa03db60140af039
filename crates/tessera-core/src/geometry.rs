//! Planar value types: [`Position`] and [`Rect`].

use serde::{Deserialize, Serialize};

/// A 2D position with `f32` coordinates.
pub type Position = glam::Vec2;

/// An axis-aligned rectangle given by its minimum corner and its extent.
///
/// Grids only accept square rectangles, but `Rect` itself is general so
/// that the squareness check happens where the grid is built and can be
/// reported as an error.
///
/// # Examples
///
/// ```
/// use tessera_core::{Position, Rect};
///
/// let area = Rect::new(-1.0, -1.0, 2.0, 2.0);
/// assert!(area.is_square());
/// assert_eq!(area.end(), Position::new(1.0, 1.0));
/// assert!(area.contains(Position::ZERO));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum corner.
    pub origin: Position,
    /// Width (`x`) and height (`y`).
    pub size: Position,
}

impl Rect {
    /// Build a rectangle from its minimum corner and extent.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Position::new(x, y),
            size: Position::new(width, height),
        }
    }

    /// Build a square with the given minimum corner and side length.
    pub fn square(origin: Position, side: f32) -> Self {
        Self {
            origin,
            size: Position::splat(side),
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Width divided by height.
    ///
    /// A zero-height rectangle yields an infinite or NaN ratio, neither of
    /// which compares equal to `1.0`.
    pub fn aspect(&self) -> f32 {
        self.size.x / self.size.y
    }

    /// Whether the aspect ratio is exactly 1.
    pub fn is_square(&self) -> bool {
        self.aspect() == 1.0
    }

    /// Maximum corner (`origin + size`).
    pub fn end(&self) -> Position {
        self.origin + self.size
    }

    /// Whether `pos` lies inside the half-open box `[origin, end)`.
    pub fn contains(&self, pos: Position) -> bool {
        let end = self.end();
        pos.x >= self.origin.x && pos.y >= self.origin.y && pos.x < end.x && pos.y < end.y
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::square(Position::ZERO, 1.0)
    }
}
