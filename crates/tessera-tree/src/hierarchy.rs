//! The [`Hierarchy`] capability trait.

/// Parent/child relationships supplied by the host application.
///
/// Implementations are usually thin adapters over a scene graph, a DOM,
/// or an arena of nodes. `Node` is a cheap handle (an index, an id, an
/// `Rc`), not the node data itself.
pub trait Hierarchy {
    /// Handle to a node in the hierarchy.
    type Node: Clone + PartialEq;

    /// Parent of `node`, or `None` for a root.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Number of children of `node`.
    fn child_count(&self, node: &Self::Node) -> usize;

    /// Child of `node` at `index`, or `None` if out of range.
    fn child(&self, node: &Self::Node, index: usize) -> Option<Self::Node>;
}

impl<H: Hierarchy + ?Sized> Hierarchy for &H {
    type Node = H::Node;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node> {
        (**self).parent(node)
    }

    fn child_count(&self, node: &Self::Node) -> usize {
        (**self).child_count(node)
    }

    fn child(&self, node: &Self::Node, index: usize) -> Option<Self::Node> {
        (**self).child(node, index)
    }
}
