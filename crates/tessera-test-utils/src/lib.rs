//! Test utilities and mock types for Tessera development.
//!
//! Provides a linear-scan [`BruteForceIndex`] to check grid queries
//! against, a [`MockTree`] implementing [`Hierarchy`], and seeded
//! position fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use indexmap::IndexMap;
use std::hash::Hash;
use tessera_core::Position;
use tessera_tree::Hierarchy;

/// Reference spatial index that scans every object on every query.
///
/// Uses the same boundary rules as the grid: `nearest` accepts objects
/// exactly `distance` away, `within` does not.
pub struct BruteForceIndex<T> {
    positions: IndexMap<T, Position>,
}

impl<T: Eq + Hash + Clone> BruteForceIndex<T> {
    pub fn new() -> Self {
        Self {
            positions: IndexMap::new(),
        }
    }

    /// Insert or reposition. Returns `true` if `obj` was new.
    pub fn upsert(&mut self, obj: T, pos: Position) -> bool {
        self.positions.insert(obj, pos).is_none()
    }

    pub fn remove(&mut self, obj: &T) -> bool {
        self.positions.swap_remove(obj).is_some()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position_of(&self, obj: &T) -> Option<Position> {
        self.positions.get(obj).copied()
    }

    /// Smallest squared distance to `pos` among objects within
    /// `distance` (inclusive), or `None`.
    pub fn nearest_distance_sq(&self, pos: Position, distance: f32) -> Option<f32> {
        let max_dsq = distance * distance;
        self.positions
            .values()
            .map(|p| p.distance_squared(pos))
            .filter(|dsq| *dsq <= max_dsq)
            .reduce(f32::min)
    }

    /// Every object strictly closer than `distance` to `pos`, in
    /// insertion order.
    pub fn within(&self, pos: Position, distance: f32) -> Vec<T> {
        let max_dsq = distance * distance;
        self.positions
            .iter()
            .filter(|(_, p)| p.distance_squared(pos) < max_dsq)
            .map(|(obj, _)| obj.clone())
            .collect()
    }
}

impl<T: Eq + Hash + Clone> Default for BruteForceIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind tag carried by every [`MockTree`] node, standing in for the
/// node's runtime type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Plain,
    Camera,
    Light,
}

/// Handle to a node in a [`MockTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Arena-backed hierarchy for traversal tests.
///
/// Supports detaching children so tests can mutate the tree while a
/// cursor is live.
pub struct MockTree {
    kinds: Vec<NodeKind>,
    parents: Vec<Option<NodeId>>,
    children: Vec<Vec<NodeId>>,
}

impl MockTree {
    /// A tree holding only a root of the given kind ([`NodeId(0)`](NodeId)).
    pub fn new(root: NodeKind) -> Self {
        Self {
            kinds: vec![root],
            parents: vec![None],
            children: vec![Vec::new()],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child of `kind` under `parent` and return its id.
    pub fn add_child(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.kinds.len());
        self.kinds.push(kind);
        self.parents.push(Some(parent));
        self.children.push(Vec::new());
        self.children[parent.0].push(id);
        id
    }

    /// Remove `node` from its parent's child list. The node keeps its own
    /// subtree but becomes a root.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.parents[node.0].take() {
            self.children[parent.0].retain(|c| *c != node);
        }
    }

    pub fn kind(&self, node: NodeId) -> NodeKind {
        self.kinds[node.0]
    }

    /// Matcher accepting nodes of `kind`.
    pub fn of_kind(&self, kind: NodeKind) -> impl Fn(&NodeId) -> Option<NodeId> + '_ {
        move |node| (self.kind(*node) == kind).then_some(*node)
    }
}

impl Hierarchy for MockTree {
    type Node = NodeId;

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.parents[node.0]
    }

    fn child_count(&self, node: &NodeId) -> usize {
        self.children[node.0].len()
    }

    fn child(&self, node: &NodeId, index: usize) -> Option<NodeId> {
        self.children[node.0].get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brute_force_boundary_rules() {
        let mut index = BruteForceIndex::new();
        index.upsert(1u8, Position::new(1.0, 0.0));
        assert_eq!(index.nearest_distance_sq(Position::ZERO, 1.0), Some(1.0));
        assert!(index.within(Position::ZERO, 1.0).is_empty());
        assert_eq!(index.within(Position::ZERO, 1.5), vec![1]);
    }

    #[test]
    fn mock_tree_links() {
        let mut tree = MockTree::new(NodeKind::Plain);
        let cam = tree.add_child(tree.root(), NodeKind::Camera);
        let light = tree.add_child(cam, NodeKind::Light);
        assert_eq!(tree.parent(&light), Some(cam));
        assert_eq!(tree.child_count(&tree.root()), 1);
        tree.detach(cam);
        assert_eq!(tree.parent(&cam), None);
        assert_eq!(tree.child_count(&tree.root()), 0);
    }
}
