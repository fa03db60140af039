//! Seeded position fixtures.
//!
//! Everything here is deterministic for a given seed (ChaCha8), so
//! failing tests and benchmark runs reproduce exactly.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessera_core::{Position, Rect};
use tessera_grid::{GridConfig, GridError, SpatialGrid2D};

/// Uniform sample in `[0, 1)` with 24 bits of precision.
fn unit(rng: &mut ChaCha8Rng) -> f32 {
    (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32
}

/// `count` positions spread uniformly over `area`.
pub fn scatter(seed: u64, count: usize, area: Rect) -> Vec<Position> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = area.origin.x + unit(&mut rng) * area.width();
            let y = area.origin.y + unit(&mut rng) * area.height();
            Position::new(x, y)
        })
        .collect()
}

/// Offset every position by a random step of at most `max_step` per axis.
///
/// Models one tick of object movement. Positions may leave the area.
pub fn jitter(seed: u64, positions: &[Position], max_step: f32) -> Vec<Position> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    positions
        .iter()
        .map(|p| {
            let dx = (unit(&mut rng) * 2.0 - 1.0) * max_step;
            let dy = (unit(&mut rng) * 2.0 - 1.0) * max_step;
            *p + Position::new(dx, dy)
        })
        .collect()
}

/// A grid holding objects `0..count` at [`scatter`]ed positions.
///
/// Returns the grid together with the positions, indexed by object id.
pub fn populated_grid(
    config: &GridConfig,
    seed: u64,
    count: u32,
) -> Result<(SpatialGrid2D<u32>, Vec<Position>), GridError> {
    let mut grid = SpatialGrid2D::with_capacity(config, count as usize)?;
    let positions = scatter(seed, count as usize, config.area);
    for (id, pos) in (0..count).zip(&positions) {
        grid.add(id, *pos);
    }
    Ok((grid, positions))
}
