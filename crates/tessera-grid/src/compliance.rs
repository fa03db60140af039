//! Index invariant checks for [`SpatialGrid2D`].
//!
//! Reused by the grid test modules after every mutation: every tracked
//! object sits in exactly one bucket, that bucket matches its recorded
//! cell, and the recorded cell matches its recorded position.

use crate::grid::SpatialGrid2D;
use indexmap::IndexSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that bucket contents and the object index agree.
pub fn assert_index_consistent<T>(grid: &SpatialGrid2D<T>)
where
    T: Eq + Hash + Clone + Debug,
{
    let mut seen: IndexSet<&T> = IndexSet::new();
    for index in 0..grid.cell_count() {
        for (obj, pos) in grid.cell_entries(index) {
            assert!(seen.insert(obj), "{obj:?} appears in more than one bucket");
            assert_eq!(
                grid.cell_of(obj),
                Some(index),
                "{obj:?} found in bucket {index} but indexed elsewhere"
            );
            assert_eq!(
                grid.cell_index_at(pos),
                index,
                "{obj:?} at {pos:?} is stored in the wrong bucket"
            );
            assert_eq!(grid.position_of(obj), Some(pos));
        }
    }
    assert_eq!(
        seen.len(),
        grid.len(),
        "bucket population ({}) != tracked objects ({})",
        seen.len(),
        grid.len()
    );
    assert_eq!(grid.iter().count(), grid.len());
}
