//! Ancestor and child traversal over a hierarchy owned by someone else.
//!
//! The host supplies a [`Hierarchy`] (how to get a node's parent and its
//! children by index); this crate supplies restartable cursors over it.
//! Cursors borrow the hierarchy and never own or mutate it. Mutating the
//! hierarchy while a cursor is live is the host's problem: the child
//! cursor snapshots the child count when it is created.
//!
//! Filtering ("ancestors that are cameras") is expressed as a matcher
//! closure `FnMut(&Node) -> Option<M>` that both tests and converts a
//! node.
//!
//! # Cursor states
//!
//! Each cursor is a small state machine: not started → active →
//! exhausted. [`current`](AncestorCursor::current) is only valid while
//! active, and `reset` returns the cursor to not started.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod hierarchy;

pub use cursor::{
    ancestors, ancestors_matching, children, children_matching, find_ancestor, AncestorCursor,
    ChildCursor,
};
pub use hierarchy::Hierarchy;
pub use tessera_core::CursorError;
