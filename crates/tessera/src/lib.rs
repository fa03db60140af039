//! Tessera: a uniform 2D spatial grid index for moving objects.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tessera sub-crates. For most users, adding `tessera` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! // 8x8 cells over a 256-unit square centred on the origin.
//! let area = Rect::square(Position::new(-128.0, -128.0), 256.0);
//! let mut grid = SpatialGrid2D::new(8, area).unwrap();
//! assert_eq!(grid.cell_size(), 32.0);
//!
//! grid.add("scout", Position::new(10.0, 10.0));
//! grid.add("tank", Position::new(40.0, 10.0));
//! grid.move_to("tank", Position::new(-60.0, 0.0));
//!
//! assert_eq!(grid.find_nearest(Position::ZERO, 20.0), Some("scout"));
//! assert_eq!(grid.collect_within(Position::ZERO, 100.0).len(), 2);
//! assert!(grid.remove(&"scout"));
//! assert_eq!(grid.find_nearest(Position::ZERO, 20.0), None);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | `Position`, `Rect`, error types |
//! | [`grid`] | `tessera-grid` | `SpatialGrid2D`, `GridConfig`, query sinks |
//! | [`tree`] | `tessera-tree` | `Hierarchy` trait and traversal cursors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Geometry and error types (`tessera-core`).
///
/// [`types::Position`] is a `glam::Vec2`; [`types::Rect`] is the square
/// area a grid covers.
pub use tessera_core as types;

/// The spatial grid (`tessera-grid`).
///
/// [`grid::SpatialGrid2D`] is the index itself. Radius queries write into
/// any [`grid::QueryResults`] sink.
pub use tessera_grid as grid;

/// Hierarchy traversal (`tessera-tree`).
///
/// Implement [`tree::Hierarchy`] for a scene graph, then walk it with
/// [`tree::ancestors`], [`tree::children`] and their `_matching` variants.
pub use tessera_tree as tree;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    // Geometry and errors
    pub use tessera_core::{CursorError, GridError, Position, Rect};

    // Grid
    pub use tessera_grid::{GridConfig, QueryResults, SpatialGrid2D};

    // Traversal
    pub use tessera_tree::{
        ancestors, ancestors_matching, children, children_matching, find_ancestor, Hierarchy,
    };
}
