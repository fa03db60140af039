//! Cursor output against direct parent/child walks over random trees.

use proptest::prelude::*;
use tessera_test_utils::{MockTree, NodeId, NodeKind};
use tessera_tree::{ancestors, ancestors_matching, children_matching, find_ancestor, Hierarchy};

const KINDS: [NodeKind; 3] = [NodeKind::Plain, NodeKind::Camera, NodeKind::Light];

/// Each entry `(p, k)` adds a node of kind `KINDS[k]` under an existing
/// node picked by `p`.
fn build(shape: &[(usize, usize)]) -> MockTree {
    let mut tree = MockTree::new(NodeKind::Plain);
    for (i, (p, k)) in shape.iter().enumerate() {
        let parent = NodeId(p % (i + 1));
        tree.add_child(parent, KINDS[k % KINDS.len()]);
    }
    tree
}

fn parent_chain(tree: &MockTree, node: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut at = tree.parent(&node);
    while let Some(p) = at {
        out.push(p);
        at = tree.parent(&p);
    }
    out
}

proptest! {
    #[test]
    fn ancestors_follow_parent_links(
        shape in prop::collection::vec((0usize..64, 0usize..3), 0..48),
        pick in 0usize..64,
    ) {
        let tree = build(&shape);
        let node = NodeId(pick % (shape.len() + 1));
        let chain = parent_chain(&tree, node);
        prop_assert_eq!(ancestors(&tree, node).collect::<Vec<_>>(), chain.clone());

        let lights: Vec<_> = chain
            .iter()
            .copied()
            .filter(|n| tree.kind(*n) == NodeKind::Light)
            .collect();
        prop_assert_eq!(
            ancestors_matching(&tree, node, tree.of_kind(NodeKind::Light)).collect::<Vec<_>>(),
            lights.clone()
        );
        prop_assert_eq!(
            find_ancestor(&tree, node, tree.of_kind(NodeKind::Light)),
            lights.first().copied()
        );
    }

    #[test]
    fn children_match_index_walk(
        shape in prop::collection::vec((0usize..64, 0usize..3), 0..48),
        pick in 0usize..64,
    ) {
        let tree = build(&shape);
        let node = NodeId(pick % (shape.len() + 1));
        let expected: Vec<_> = (0..tree.child_count(&node))
            .filter_map(|i| tree.child(&node, i))
            .filter(|c| tree.kind(*c) == NodeKind::Camera)
            .collect();
        let mut cursor = children_matching(&tree, node, tree.of_kind(NodeKind::Camera));
        let first: Vec<_> = cursor.by_ref().collect();
        prop_assert_eq!(&first, &expected);

        cursor.reset();
        prop_assert_eq!(cursor.collect::<Vec<_>>(), expected);
    }
}
