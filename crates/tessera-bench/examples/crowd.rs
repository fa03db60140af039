//! Crowd simulation example.
//!
//! Demonstrates: build a grid from a profile → move objects each tick →
//! query neighbours → remove objects that drift out of the area.

use tessera_bench::{probe_points, reference_config, reference_profile};
use tessera_test_utils::fixtures::jitter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Tessera Crowd Example ===\n");

    let config = reference_config();
    let (mut grid, mut positions) = reference_profile(42)?;
    println!(
        "grid: {}x{} cells of {} units, {} objects\n",
        grid.size(),
        grid.size(),
        grid.cell_size(),
        grid.len()
    );

    let radius = grid.cell_size();
    let mut neighbours = Vec::new();

    for tick in 0..50u64 {
        positions = jitter(tick, &positions, grid.cell_size() * 0.5);
        for (id, pos) in (0u32..).zip(&positions) {
            // Objects that leave the area are dropped for good.
            if !config.area.contains(*pos) {
                grid.remove(&id);
            } else if grid.contains(&id) {
                grid.move_to(id, *pos);
            }
        }

        if tick % 10 == 0 || tick == 49 {
            let mut total = 0usize;
            for (id, pos) in grid.iter() {
                grid.find_within(pos, radius, &mut neighbours);
                // Every object finds itself.
                debug_assert!(neighbours.contains(id));
                total += neighbours.len() - 1;
            }
            let mean = total as f32 / grid.len().max(1) as f32;
            println!(
                "  tick {:>2}: objects={:>5}, mean neighbours={:>6.3}",
                tick + 1,
                grid.len(),
                mean
            );
        }
    }

    println!("\nNearest object to a few probe points:");
    for probe in probe_points(&config, 7, 5) {
        match grid.find_nearest(probe, radius * 2.0) {
            Some(id) => println!("  ({:>7.1}, {:>7.1}) -> #{id}", probe.x, probe.y),
            None => println!("  ({:>7.1}, {:>7.1}) -> nothing in range", probe.x, probe.y),
        }
    }

    Ok(())
}
