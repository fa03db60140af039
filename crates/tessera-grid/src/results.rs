//! Output sinks for [`SpatialGrid2D::find_within`](crate::SpatialGrid2D::find_within).

use indexmap::IndexSet;
use smallvec::{Array, SmallVec};
use std::hash::{BuildHasher, Hash};

/// A caller-owned collection that a radius query writes into.
///
/// The query calls [`clear`](Self::clear) once, then [`push`](Self::push)
/// for each hit. Reusing the same sink across queries keeps its
/// allocation, and a `SmallVec` sink avoids the heap entirely for small
/// result sets.
pub trait QueryResults<T> {
    /// Discard any previous contents.
    fn clear(&mut self);

    /// Record one hit.
    fn push(&mut self, item: T);
}

impl<T> QueryResults<T> for Vec<T> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }
}

impl<A: Array> QueryResults<A::Item> for SmallVec<A> {
    fn clear(&mut self) {
        SmallVec::clear(self);
    }

    fn push(&mut self, item: A::Item) {
        SmallVec::push(self, item);
    }
}

impl<T: Hash + Eq, S: BuildHasher> QueryResults<T> for IndexSet<T, S> {
    fn clear(&mut self) {
        IndexSet::clear(self);
    }

    fn push(&mut self, item: T) {
        self.insert(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill<R: QueryResults<u32>>(out: &mut R) {
        out.clear();
        out.push(7);
        out.push(9);
    }

    #[test]
    fn vec_sink_discards_previous_contents() {
        let mut out = vec![1, 2, 3];
        fill(&mut out);
        assert_eq!(out, vec![7, 9]);
    }

    #[test]
    fn smallvec_sink_stays_inline() {
        let mut out: SmallVec<[u32; 4]> = SmallVec::new();
        fill(&mut out);
        assert_eq!(out.as_slice(), &[7, 9]);
        assert!(!out.spilled());
    }

    #[test]
    fn index_set_sink_keeps_insertion_order() {
        let mut out: IndexSet<u32> = [4, 5].into_iter().collect();
        fill(&mut out);
        assert_eq!(out.iter().copied().collect::<Vec<_>>(), vec![7, 9]);
    }
}
