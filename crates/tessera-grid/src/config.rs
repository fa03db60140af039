//! Grid construction parameters and their validation.

use serde::{Deserialize, Serialize};
use tessera_core::{GridError, Position, Rect};

/// Construction parameters for a [`SpatialGrid2D`](crate::SpatialGrid2D).
///
/// Validated when the grid is built; geometry is immutable afterwards.
/// Implements serde traits so hosts can keep grid settings alongside the
/// rest of their configuration.
///
/// # Examples
///
/// ```
/// use tessera_grid::{GridConfig, Rect};
///
/// let config = GridConfig::new(16, Rect::new(0.0, 0.0, 512.0, 512.0));
/// assert!(config.validate().is_ok());
/// assert_eq!(config.cell_size(), 32.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Cells per dimension. The grid holds `size * size` cells.
    ///
    /// Must be in `1..=MAX_SIZE`.
    pub size: u32,

    /// Region covered by the grid. Must be square.
    pub area: Rect,
}

impl GridConfig {
    /// Default cells per dimension.
    pub const DEFAULT_SIZE: u32 = 8;

    /// Default side length of the covered area.
    pub const DEFAULT_SIDE: f32 = 256.0;

    /// Largest accepted `size`.
    ///
    /// Every cell owns a bucket allocated up front, so `size * size`
    /// buckets exist before any object is added. At this cap that is
    /// about 4M empty maps (a few hundred MB).
    pub const MAX_SIZE: u32 = 1 << 11;

    /// Create a config for `size × size` cells over `area`.
    pub fn new(size: u32, area: Rect) -> Self {
        Self { size, area }
    }

    /// Side length of one cell: `area.width / size`, rounded half to even.
    pub fn cell_size(&self) -> f32 {
        (self.area.width() / self.size as f32).round_ties_even()
    }

    /// Check the config without building a grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidArgument`] if:
    /// - `area` is not square (aspect ratio other than exactly 1)
    /// - `size` is zero or larger than [`MAX_SIZE`](Self::MAX_SIZE)
    /// - the rounded cell size is not a positive finite number
    pub fn validate(&self) -> Result<(), GridError> {
        if !self.area.is_square() {
            return Err(GridError::invalid_argument(
                "area",
                format!(
                    "grid area must be square (aspect ratio 1:1), got {}x{}",
                    self.area.width(),
                    self.area.height()
                ),
            ));
        }
        if self.size == 0 || self.size > Self::MAX_SIZE {
            return Err(GridError::invalid_argument(
                "size",
                format!("must be in 1..={}, got {}", Self::MAX_SIZE, self.size),
            ));
        }
        let cell_size = self.cell_size();
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::invalid_argument(
                "size",
                format!(
                    "side {} split into {} cells rounds to cell size {cell_size}",
                    self.area.width(),
                    self.size
                ),
            ));
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_SIZE,
            Rect::square(Position::ZERO, Self::DEFAULT_SIDE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GridConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cell_size(), 32.0);
    }

    #[test]
    fn cell_size_is_rounded() {
        let config = GridConfig::new(3, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(config.cell_size(), 3.0);
        // Ties go to the even neighbour.
        let config = GridConfig::new(4, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(config.cell_size(), 2.0);
        let config = GridConfig::new(4, Rect::new(0.0, 0.0, 14.0, 14.0));
        assert_eq!(config.cell_size(), 4.0);
    }

    #[test]
    fn rejects_non_square_area() {
        let config = GridConfig::new(2, Rect::new(-1.0, -1.0, 2.0, 3.0));
        assert!(matches!(
            config.validate(),
            Err(GridError::InvalidArgument {
                argument: "area",
                ..
            })
        ));
    }

    #[test]
    fn rejects_zero_size() {
        let config = GridConfig::new(0, Rect::new(0.0, 0.0, 4.0, 4.0));
        assert!(matches!(
            config.validate(),
            Err(GridError::InvalidArgument {
                argument: "size",
                ..
            })
        ));
    }

    #[test]
    fn rejects_size_above_max() {
        let side = GridConfig::MAX_SIZE as f32 * 4.0;
        let at_cap = GridConfig::new(GridConfig::MAX_SIZE, Rect::new(0.0, 0.0, side, side));
        assert!(at_cap.validate().is_ok());
        let config = GridConfig::new(GridConfig::MAX_SIZE + 1, Rect::new(0.0, 0.0, 1e9, 1e9));
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_cell_size_rounding_to_zero() {
        // 1 / 4 = 0.25 rounds to 0.
        let config = GridConfig::new(4, Rect::new(0.0, 0.0, 1.0, 1.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_degenerate_area() {
        let config = GridConfig::new(2, Rect::new(0.0, 0.0, 0.0, 0.0));
        assert!(config.validate().is_err());
        let config = GridConfig::new(2, Rect::new(0.0, 0.0, -4.0, -4.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn loads_from_json() {
        let config: GridConfig = serde_json::from_str(
            r#"{ "size": 2, "area": { "origin": [-1.0, -1.0], "size": [2.0, 2.0] } }"#,
        )
        .unwrap();
        assert_eq!(config, GridConfig::new(2, Rect::new(-1.0, -1.0, 2.0, 2.0)));
        assert_eq!(config.cell_size(), 1.0);
    }
}
