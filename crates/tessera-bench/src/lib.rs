//! Benchmark profiles for the Tessera spatial grid.
//!
//! Provides pre-populated grids for benchmarks and examples:
//!
//! - [`reference_profile`]: 64x64 cells over a 4096-unit square, 10K objects
//! - [`stress_profile`]: 256x256 cells over a 16384-unit square, 100K objects
//! - [`probe_points`]: deterministic query positions inside a profile's area

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessera_core::{GridError, Position, Rect};
use tessera_grid::{GridConfig, SpatialGrid2D};
use tessera_test_utils::fixtures::{populated_grid, scatter};

/// Objects in the [`reference_profile`].
pub const REFERENCE_OBJECTS: u32 = 10_000;

/// Objects in the [`stress_profile`].
pub const STRESS_OBJECTS: u32 = 100_000;

/// Grid layout used by [`reference_profile`]: 64x64 cells, 64 units wide.
pub fn reference_config() -> GridConfig {
    GridConfig::new(64, Rect::square(Position::ZERO, 4096.0))
}

/// Grid layout used by [`stress_profile`].
pub fn stress_config() -> GridConfig {
    GridConfig::new(256, Rect::square(Position::ZERO, 16384.0))
}

/// A populated reference grid (~2.4 objects per cell) and the object
/// positions, indexed by id.
pub fn reference_profile(seed: u64) -> Result<(SpatialGrid2D<u32>, Vec<Position>), GridError> {
    populated_grid(&reference_config(), seed, REFERENCE_OBJECTS)
}

/// Same density as [`reference_profile`] at 10x the object count.
pub fn stress_profile(seed: u64) -> Result<(SpatialGrid2D<u32>, Vec<Position>), GridError> {
    populated_grid(&stress_config(), seed, STRESS_OBJECTS)
}

/// `count` query positions spread over `config.area`.
///
/// Seeded independently of the object positions so probes do not sit on
/// top of objects.
pub fn probe_points(config: &GridConfig, seed: u64, count: usize) -> Vec<Position> {
    scatter(seed ^ 0x9e37_79b9_7f4a_7c15, count, config.area)
}
