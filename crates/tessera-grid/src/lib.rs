//! Uniform spatial partitioning for moving 2D point objects.
//!
//! [`SpatialGrid2D`] divides a square [`Rect`] into `size × size` equal
//! cells and keeps every tracked object in the bucket of the cell that
//! contains it. Radius queries only scan the [`CellWindow`] of cells that
//! can overlap the query circle, so lookups stay cheap as long as objects
//! are spread roughly uniformly over the area.
//!
//! Positions outside the area are clamped into the nearest edge cell.
//! They stay queryable, but piling many objects into edge cells degrades
//! query locality.
//!
//! # Modules
//!
//! - [`grid`]: the index itself
//! - [`config`]: [`GridConfig`], the serializable construction parameters
//! - [`window`]: [`CellWindow`], the block of cells a query scans
//! - [`results`]: [`QueryResults`], output sinks for radius queries

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod grid;
pub mod results;
pub mod window;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::GridConfig;
pub use grid::SpatialGrid2D;
pub use results::QueryResults;
pub use tessera_core::{GridError, Position, Rect};
pub use window::CellWindow;
