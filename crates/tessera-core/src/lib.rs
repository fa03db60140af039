//! Core types for the Tessera spatial index.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared by the rest of the workspace (positions and
//! axis-aligned regions) along with the error enums raised by the grid
//! and traversal crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;

pub use error::{CursorError, GridError};
pub use geometry::{Position, Rect};
