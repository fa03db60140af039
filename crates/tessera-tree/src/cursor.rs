//! [`AncestorCursor`] and [`ChildCursor`], plus constructor helpers.

use crate::hierarchy::Hierarchy;
use std::iter::FusedIterator;
use std::mem;
use tessera_core::CursorError;

/// Matcher that accepts every node unchanged.
pub type Identity<N> = fn(&N) -> Option<N>;

fn identity<N: Clone>(node: &N) -> Option<N> {
    Some(node.clone())
}

/// Cursor state. `P` is where the scan stopped (a node or a child index).
#[derive(Clone, Debug)]
enum Phase<P, M> {
    NotStarted,
    Active { at: P, current: M },
    Exhausted,
}

impl<P, M> Phase<P, M> {
    fn current(&self) -> Result<&M, CursorError> {
        match self {
            Self::NotStarted => Err(CursorError::NotStarted),
            Self::Active { current, .. } => Ok(current),
            Self::Exhausted => Err(CursorError::Exhausted),
        }
    }

    fn into_current(self) -> Result<M, CursorError> {
        match self {
            Self::NotStarted => Err(CursorError::NotStarted),
            Self::Active { current, .. } => Ok(current),
            Self::Exhausted => Err(CursorError::Exhausted),
        }
    }
}

// ── AncestorCursor ─────────────────────────────────────────────────

/// Walks from a node towards the root, stopping at each ancestor the
/// matcher accepts.
///
/// The starting node itself is never visited. A hierarchy with a parent
/// cycle makes `advance` loop forever.
///
/// # Examples
///
/// ```
/// use tessera_tree::{ancestors, Hierarchy};
///
/// /// Parent links only: node `i` has parent `parents[i]`.
/// struct Chain(Vec<Option<usize>>);
///
/// impl Hierarchy for Chain {
///     type Node = usize;
///     fn parent(&self, node: &usize) -> Option<usize> { self.0[*node] }
///     fn child_count(&self, _: &usize) -> usize { 0 }
///     fn child(&self, _: &usize, _: usize) -> Option<usize> { None }
/// }
///
/// let chain = Chain(vec![None, Some(0), Some(1)]);
/// let mut cursor = ancestors(&chain, 2);
/// assert!(cursor.current().is_err());
/// assert!(cursor.advance());
/// assert_eq!(cursor.current(), Ok(&1));
/// assert_eq!(cursor.collect::<Vec<_>>(), vec![0]);
/// ```
pub struct AncestorCursor<'a, H: Hierarchy + ?Sized, M, F> {
    tree: &'a H,
    start: H::Node,
    matcher: F,
    phase: Phase<H::Node, M>,
}

impl<'a, H, M, F> AncestorCursor<'a, H, M, F>
where
    H: Hierarchy + ?Sized,
    F: FnMut(&H::Node) -> Option<M>,
{
    /// Create a cursor over the ancestors of `node`.
    pub fn new(tree: &'a H, node: H::Node, matcher: F) -> Self {
        Self {
            tree,
            start: node,
            matcher,
            phase: Phase::NotStarted,
        }
    }

    /// The node whose ancestors are being walked.
    pub fn start(&self) -> &H::Node {
        &self.start
    }

    /// Move to the next matching ancestor. Returns `false` once the root
    /// has been passed; further calls keep returning `false`.
    pub fn advance(&mut self) -> bool {
        let mut at = match mem::replace(&mut self.phase, Phase::Exhausted) {
            Phase::NotStarted => self.start.clone(),
            Phase::Active { at, .. } => at,
            Phase::Exhausted => return false,
        };
        while let Some(parent) = self.tree.parent(&at) {
            if let Some(current) = (self.matcher)(&parent) {
                self.phase = Phase::Active {
                    at: parent,
                    current,
                };
                return true;
            }
            at = parent;
        }
        false
    }

    /// The ancestor the cursor points at.
    ///
    /// # Errors
    ///
    /// [`CursorError::NotStarted`] before the first `advance`,
    /// [`CursorError::Exhausted`] after `advance` returned `false`.
    pub fn current(&self) -> Result<&M, CursorError> {
        self.phase.current()
    }

    /// Consume the cursor, returning the ancestor it points at.
    pub fn into_current(self) -> Result<M, CursorError> {
        self.phase.into_current()
    }

    /// Return to the not-started state.
    pub fn reset(&mut self) {
        self.phase = Phase::NotStarted;
    }
}

impl<H, M, F> Iterator for AncestorCursor<'_, H, M, F>
where
    H: Hierarchy + ?Sized,
    M: Clone,
    F: FnMut(&H::Node) -> Option<M>,
{
    type Item = M;

    fn next(&mut self) -> Option<M> {
        if self.advance() {
            self.current().ok().cloned()
        } else {
            None
        }
    }
}

impl<H, M, F> FusedIterator for AncestorCursor<'_, H, M, F>
where
    H: Hierarchy + ?Sized,
    M: Clone,
    F: FnMut(&H::Node) -> Option<M>,
{
}

// ── ChildCursor ────────────────────────────────────────────────────

/// Walks the direct children of a node in index order, stopping at each
/// child the matcher accepts.
///
/// The child count is read once, at construction. Adding or removing
/// children while the cursor is live is not detected.
pub struct ChildCursor<'a, H: Hierarchy + ?Sized, M, F> {
    tree: &'a H,
    parent: H::Node,
    count: usize,
    matcher: F,
    phase: Phase<usize, M>,
}

impl<'a, H, M, F> ChildCursor<'a, H, M, F>
where
    H: Hierarchy + ?Sized,
    F: FnMut(&H::Node) -> Option<M>,
{
    /// Create a cursor over the children of `node`.
    pub fn new(tree: &'a H, node: H::Node, matcher: F) -> Self {
        let count = tree.child_count(&node);
        Self {
            tree,
            parent: node,
            count,
            matcher,
            phase: Phase::NotStarted,
        }
    }

    /// The node whose children are being walked.
    pub fn parent(&self) -> &H::Node {
        &self.parent
    }

    /// Child count captured at construction.
    pub fn child_count(&self) -> usize {
        self.count
    }

    /// Index of the child the cursor points at, while active.
    pub fn index(&self) -> Option<usize> {
        match self.phase {
            Phase::Active { at, .. } => Some(at),
            _ => None,
        }
    }

    /// Move to the next matching child. Returns `false` once the children
    /// are used up; further calls keep returning `false`.
    pub fn advance(&mut self) -> bool {
        let first = match mem::replace(&mut self.phase, Phase::Exhausted) {
            Phase::NotStarted => 0,
            Phase::Active { at, .. } => at + 1,
            Phase::Exhausted => return false,
        };
        for index in first..self.count {
            let Some(child) = self.tree.child(&self.parent, index) else {
                continue;
            };
            if let Some(current) = (self.matcher)(&child) {
                self.phase = Phase::Active { at: index, current };
                return true;
            }
        }
        false
    }

    /// The child the cursor points at.
    ///
    /// # Errors
    ///
    /// [`CursorError::NotStarted`] before the first `advance`,
    /// [`CursorError::Exhausted`] after `advance` returned `false`.
    pub fn current(&self) -> Result<&M, CursorError> {
        self.phase.current()
    }

    /// Consume the cursor, returning the child it points at.
    pub fn into_current(self) -> Result<M, CursorError> {
        self.phase.into_current()
    }

    /// Return to the not-started state. The child count is not re-read.
    pub fn reset(&mut self) {
        self.phase = Phase::NotStarted;
    }
}

impl<H, M, F> Iterator for ChildCursor<'_, H, M, F>
where
    H: Hierarchy + ?Sized,
    M: Clone,
    F: FnMut(&H::Node) -> Option<M>,
{
    type Item = M;

    fn next(&mut self) -> Option<M> {
        if self.advance() {
            self.current().ok().cloned()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.phase {
            Phase::NotStarted => self.count,
            Phase::Active { at, .. } => self.count.saturating_sub(at + 1),
            Phase::Exhausted => 0,
        };
        (0, Some(remaining))
    }
}

impl<H, M, F> FusedIterator for ChildCursor<'_, H, M, F>
where
    H: Hierarchy + ?Sized,
    M: Clone,
    F: FnMut(&H::Node) -> Option<M>,
{
}

// ── Constructors ───────────────────────────────────────────────────

/// Cursor over every ancestor of `node`, nearest first.
pub fn ancestors<H>(tree: &H, node: H::Node) -> AncestorCursor<'_, H, H::Node, Identity<H::Node>>
where
    H: Hierarchy + ?Sized,
{
    AncestorCursor::new(tree, node, identity::<H::Node> as Identity<H::Node>)
}

/// Cursor over the ancestors of `node` accepted by `matcher`.
pub fn ancestors_matching<H, M, F>(tree: &H, node: H::Node, matcher: F) -> AncestorCursor<'_, H, M, F>
where
    H: Hierarchy + ?Sized,
    F: FnMut(&H::Node) -> Option<M>,
{
    AncestorCursor::new(tree, node, matcher)
}

/// Cursor over every child of `node`, in index order.
pub fn children<H>(tree: &H, node: H::Node) -> ChildCursor<'_, H, H::Node, Identity<H::Node>>
where
    H: Hierarchy + ?Sized,
{
    ChildCursor::new(tree, node, identity::<H::Node> as Identity<H::Node>)
}

/// Cursor over the children of `node` accepted by `matcher`.
pub fn children_matching<H, M, F>(tree: &H, node: H::Node, matcher: F) -> ChildCursor<'_, H, M, F>
where
    H: Hierarchy + ?Sized,
    F: FnMut(&H::Node) -> Option<M>,
{
    ChildCursor::new(tree, node, matcher)
}

/// Nearest ancestor of `node` accepted by `matcher`.
pub fn find_ancestor<H, M, F>(tree: &H, node: H::Node, matcher: F) -> Option<M>
where
    H: Hierarchy + ?Sized,
    F: FnMut(&H::Node) -> Option<M>,
{
    let mut cursor = AncestorCursor::new(tree, node, matcher);
    if cursor.advance() {
        cursor.into_current().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Arena tree: node `i` has `parents[i]` and `kids[i]`.
    struct Arena {
        parents: Vec<Option<usize>>,
        kids: Vec<Vec<usize>>,
    }

    impl Arena {
        /// 0 ─┬─ 1 ── 3 ── 4
        ///    └─ 2
        fn sample() -> Self {
            Self {
                parents: vec![None, Some(0), Some(0), Some(1), Some(3)],
                kids: vec![vec![1, 2], vec![3], vec![], vec![4], vec![]],
            }
        }
    }

    impl Hierarchy for Arena {
        type Node = usize;

        fn parent(&self, node: &usize) -> Option<usize> {
            self.parents[*node]
        }

        fn child_count(&self, node: &usize) -> usize {
            self.kids[*node].len()
        }

        fn child(&self, node: &usize, index: usize) -> Option<usize> {
            self.kids[*node].get(index).copied()
        }
    }

    fn odd(node: &usize) -> Option<usize> {
        (node % 2 == 1).then_some(*node)
    }

    // ── Ancestor cursor ─────────────────────────────────────────

    #[test]
    fn ancestors_nearest_first() {
        let tree = Arena::sample();
        assert_eq!(ancestors(&tree, 4).collect::<Vec<_>>(), vec![3, 1, 0]);
    }

    #[test]
    fn root_has_no_ancestors() {
        let tree = Arena::sample();
        let mut cursor = ancestors(&tree, 0);
        assert!(!cursor.advance());
        assert_eq!(cursor.current(), Err(CursorError::Exhausted));
    }

    #[test]
    fn ancestor_states() {
        let tree = Arena::sample();
        let mut cursor = ancestors(&tree, 3);
        assert_eq!(cursor.current(), Err(CursorError::NotStarted));
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Ok(&1));
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Ok(&0));
        assert!(!cursor.advance());
        assert_eq!(cursor.current(), Err(CursorError::Exhausted));
        assert!(!cursor.advance());
    }

    #[test]
    fn ancestor_reset_restarts() {
        let tree = Arena::sample();
        let mut cursor = ancestors(&tree, 4);
        let first: Vec<_> = cursor.by_ref().collect();
        cursor.reset();
        assert_eq!(cursor.current(), Err(CursorError::NotStarted));
        let second: Vec<_> = cursor.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn ancestors_matching_skips_rejected() {
        let tree = Arena::sample();
        assert_eq!(ancestors_matching(&tree, 4, odd).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn find_ancestor_nearest_match() {
        let tree = Arena::sample();
        assert_eq!(find_ancestor(&tree, 4, odd), Some(3));
        assert_eq!(find_ancestor(&tree, 3, odd), Some(1));
        assert_eq!(find_ancestor(&tree, 1, odd), None);
        assert_eq!(find_ancestor(&tree, 4, |n: &usize| (*n == 0).then_some("root")), Some("root"));
    }

    // ── Child cursor ────────────────────────────────────────────

    #[test]
    fn children_in_index_order() {
        let tree = Arena::sample();
        assert_eq!(children(&tree, 0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(children(&tree, 2).count(), 0);
    }

    #[test]
    fn child_states() {
        let tree = Arena::sample();
        let mut cursor = children(&tree, 0);
        assert_eq!(cursor.child_count(), 2);
        assert_eq!(cursor.current(), Err(CursorError::NotStarted));
        assert_eq!(cursor.index(), None);
        assert!(cursor.advance());
        assert_eq!(cursor.index(), Some(0));
        assert_eq!(cursor.current(), Ok(&1));
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Ok(&2));
        assert!(!cursor.advance());
        assert_eq!(cursor.current(), Err(CursorError::Exhausted));
        cursor.reset();
        assert!(cursor.advance());
        assert_eq!(cursor.into_current(), Ok(1));
    }

    #[test]
    fn children_matching_filters() {
        let tree = Arena::sample();
        let evens: Vec<_> = children_matching(&tree, 0, |n: &usize| (n % 2 == 0).then_some(*n)).collect();
        assert_eq!(evens, vec![2]);
    }

    #[test]
    fn child_size_hint_shrinks() {
        let tree = Arena::sample();
        let mut cursor = children(&tree, 0);
        assert_eq!(cursor.size_hint(), (0, Some(2)));
        cursor.next();
        assert_eq!(cursor.size_hint(), (0, Some(1)));
        cursor.next();
        cursor.next();
        assert_eq!(cursor.size_hint(), (0, Some(0)));
    }
}
