//! Property tests for sylva-bintree
//!
//! Structural relations between the traversals and the path-length metrics.

use proptest::prelude::*;
use sylva_bintree::BinaryTree;

fn tree_strategy() -> impl Strategy<Value = BinaryTree> {
    let base = prop_oneof![
        Just(BinaryTree::empty()),
        (-100..100i32).prop_map(BinaryTree::leaf),
    ];
    base.prop_recursive(8, 128, 2, |inner| {
        (-100..100i32, inner.clone(), inner)
            .prop_map(|(value, left, right)| BinaryTree::node(value, left, right))
    })
}

fn internal_count(tree: &BinaryTree) -> usize {
    match tree.root() {
        None => 0,
        Some(_) if tree.is_leaf() => 0,
        Some(n) => 1 + internal_count(&n.left) + internal_count(&n.right),
    }
}

proptest! {
    /// Every traversal visits each node exactly once
    #[test]
    fn prop_traversal_lengths_match_size(tree in tree_strategy()) {
        let size = tree.size();
        prop_assert_eq!(tree.prefix().len(), size);
        prop_assert_eq!(tree.infix().len(), size);
        prop_assert_eq!(tree.postfix().len(), size);
    }

    /// Nodes split into leaves and internal nodes
    #[test]
    fn prop_leaves_plus_internal_is_size(tree in tree_strategy()) {
        prop_assert_eq!(tree.count_leaves() + internal_count(&tree), tree.size());
    }

    /// A non-empty tree always has at least one leaf
    #[test]
    fn prop_nonempty_has_leaf(tree in tree_strategy()) {
        prop_assert_eq!(tree.is_empty(), tree.count_leaves() == 0);
    }

    /// Size is bounded by the complete tree of the same height
    #[test]
    fn prop_size_bounded_by_height(tree in tree_strategy()) {
        let h = tree.height();
        prop_assert!(h >= -1);
        prop_assert!(tree.size() <= (1usize << (h + 1)) - 1);
        prop_assert!(tree.size() as i64 > i64::from(h));
    }

    /// The aggregated metrics agree with the individual measurements
    #[test]
    fn prop_metrics_consistent(tree in tree_strategy()) {
        let m = tree.metrics();
        prop_assert_eq!(m.lc, m.lce + m.lci);
        prop_assert_eq!(m.lc, tree.path_length());
        if m.leaves == 0 {
            prop_assert_eq!(m.pe, 0.0);
        } else {
            let back = m.pe * m.leaves as f64;
            prop_assert!((back - m.lce as f64).abs() < 1e-9);
        }
    }

    /// A lone leaf has height 0 and its size equals its leaf count
    #[test]
    fn prop_leaf_only_tree(value in any::<i32>()) {
        let tree = BinaryTree::leaf(value);
        prop_assert_eq!(tree.height(), 0);
        prop_assert_eq!(tree.size(), tree.count_leaves());
    }

    /// The notation written by Display reads back to the same tree
    #[test]
    fn prop_notation_reads_back(tree in tree_strategy()) {
        let text = tree.to_string();
        let parsed: BinaryTree = text.parse().unwrap();
        prop_assert_eq!(parsed, tree);
    }
}
