//! Plain binary trees for sylva.
//!
//! Trees are built explicitly with [`BinaryTree::node`]; there is no
//! insertion policy and no ordering between values. Besides the three
//! classic traversals the crate computes structural measurements: size,
//! height, leaf count and the path-length sums LCE (leaf depths), LCI
//! (internal-node depths), LC = LCE + LCI and PE = LCE / leaves.

use serde::{Deserialize, Serialize};

mod notation;

pub use sylva_parse::ParseError;

/// Value stored at each node.
pub type Element = i32;

/// A node: a value and two owned subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNode {
    pub value: Element,
    pub left: BinaryTree,
    pub right: BinaryTree,
}

/// An optional owning reference to a root node. `None` is the empty tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryTree {
    root: Option<Box<BinaryNode>>,
}

impl BinaryTree {
    /// Returns the empty tree.
    pub fn empty() -> Self {
        Self { root: None }
    }

    /// Builds `<value, left, right>`.
    pub fn node(value: Element, left: BinaryTree, right: BinaryTree) -> Self {
        Self {
            root: Some(Box::new(BinaryNode { value, left, right })),
        }
    }

    pub fn leaf(value: Element) -> Self {
        Self::node(value, Self::empty(), Self::empty())
    }

    pub fn root(&self) -> Option<&BinaryNode> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Non-empty with two empty children.
    pub fn is_leaf(&self) -> bool {
        self.root().is_some_and(|n| n.left.is_empty() && n.right.is_empty())
    }

    pub fn prefix(&self) -> Vec<Element> {
        let mut out = Vec::new();
        self.walk_prefix(&mut out);
        out
    }

    pub fn infix(&self) -> Vec<Element> {
        let mut out = Vec::new();
        self.walk_infix(&mut out);
        out
    }

    pub fn postfix(&self) -> Vec<Element> {
        let mut out = Vec::new();
        self.walk_postfix(&mut out);
        out
    }

    fn walk_prefix(&self, out: &mut Vec<Element>) {
        if let Some(n) = self.root() {
            out.push(n.value);
            n.left.walk_prefix(out);
            n.right.walk_prefix(out);
        }
    }

    fn walk_infix(&self, out: &mut Vec<Element>) {
        if let Some(n) = self.root() {
            n.left.walk_infix(out);
            out.push(n.value);
            n.right.walk_infix(out);
        }
    }

    fn walk_postfix(&self, out: &mut Vec<Element>) {
        if let Some(n) = self.root() {
            n.left.walk_postfix(out);
            n.right.walk_postfix(out);
            out.push(n.value);
        }
    }

    /// Node count.
    pub fn size(&self) -> usize {
        match self.root() {
            None => 0,
            Some(n) => 1 + n.left.size() + n.right.size(),
        }
    }

    /// Longest root-to-leaf path in edges. The empty tree has height -1 so
    /// that a single leaf has height 0.
    pub fn height(&self) -> i32 {
        match self.root() {
            None => -1,
            Some(n) => 1 + n.left.height().max(n.right.height()),
        }
    }

    pub fn count_leaves(&self) -> usize {
        match self.root() {
            None => 0,
            Some(_) if self.is_leaf() => 1,
            Some(n) => n.left.count_leaves() + n.right.count_leaves(),
        }
    }

    /// LCE: the sum of the depths of all leaves.
    pub fn sum_leaf_depths(&self) -> usize {
        self.leaf_depths_from(0)
    }

    /// LCE for a tree whose root sits at `depth`.
    pub fn leaf_depths_from(&self, depth: usize) -> usize {
        match self.root() {
            None => 0,
            Some(_) if self.is_leaf() => depth,
            Some(n) => n.left.leaf_depths_from(depth + 1) + n.right.leaf_depths_from(depth + 1),
        }
    }

    /// LCI: the sum of the depths of all internal nodes.
    pub fn sum_internal_depths(&self) -> usize {
        self.internal_depths_from(0)
    }

    /// LCI for a tree whose root sits at `depth`.
    pub fn internal_depths_from(&self, depth: usize) -> usize {
        match self.root() {
            None => 0,
            Some(_) if self.is_leaf() => 0,
            Some(n) => {
                depth
                    + n.left.internal_depths_from(depth + 1)
                    + n.right.internal_depths_from(depth + 1)
            }
        }
    }

    /// LC = LCE + LCI.
    pub fn path_length(&self) -> usize {
        self.sum_leaf_depths() + self.sum_internal_depths()
    }

    /// PE = LCE / leaf count, and exactly 0.0 when there are no leaves.
    pub fn average_external_path_length(&self) -> f64 {
        let leaves = self.count_leaves();
        if leaves == 0 {
            return 0.0;
        }
        self.sum_leaf_depths() as f64 / leaves as f64
    }

    pub fn metrics(&self) -> Metrics {
        let lce = self.sum_leaf_depths();
        let lci = self.sum_internal_depths();
        Metrics {
            size: self.size(),
            height: self.height(),
            leaves: self.count_leaves(),
            lce,
            lci,
            lc: lce + lci,
            pe: self.average_external_path_length(),
        }
    }

    /// Releases every node, leaving the empty tree.
    ///
    /// Nodes are detached onto an explicit stack, so a degenerate tree is
    /// released without recursion.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<BinaryNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.root.take());
            pending.extend(node.right.root.take());
        }
    }
}

impl Drop for BinaryTree {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Every measurement of a tree, computed in one call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub size: usize,
    pub height: i32,
    pub leaves: usize,
    pub lce: usize,
    pub lci: usize,
    pub lc: usize,
    pub pe: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1(2, 3(4, -))
    fn sample() -> BinaryTree {
        BinaryTree::node(
            1,
            BinaryTree::leaf(2),
            BinaryTree::node(3, BinaryTree::leaf(4), BinaryTree::empty()),
        )
    }

    #[test]
    fn test_binary_tree_empty() {
        let t = BinaryTree::empty();
        assert!(t.is_empty());
        assert!(!t.is_leaf());
        assert_eq!(t.size(), 0);
        assert_eq!(t.height(), -1);
        assert_eq!(t.count_leaves(), 0);
        assert_eq!(t.average_external_path_length(), 0.0);
    }

    #[test]
    fn test_binary_tree_single_leaf() {
        let t = BinaryTree::leaf(9);
        assert!(t.is_leaf());
        assert_eq!(t.height(), 0);
        assert_eq!(t.size(), 1);
        assert_eq!(t.count_leaves(), 1);
        assert_eq!(t.sum_leaf_depths(), 0);
        assert_eq!(t.sum_internal_depths(), 0);
    }

    #[test]
    fn test_traversals() {
        let t = sample();
        assert_eq!(t.prefix(), vec![1, 2, 3, 4]);
        assert_eq!(t.infix(), vec![2, 1, 4, 3]);
        assert_eq!(t.postfix(), vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_sample_metrics() {
        let m = sample().metrics();
        assert_eq!(
            m,
            Metrics {
                size: 4,
                height: 2,
                leaves: 2,
                lce: 3,
                lci: 1,
                lc: 4,
                pe: 1.5,
            }
        );
    }

    #[test]
    fn test_depth_offset() {
        let t = sample();
        assert_eq!(t.leaf_depths_from(2), 3 + 2 * 2);
        assert_eq!(t.internal_depths_from(1), 1 + 2);
    }

    #[test]
    fn test_metrics_json() {
        let json = serde_json::to_string(&sample().metrics()).unwrap();
        insta::assert_snapshot!(json, @r#"{"size":4,"height":2,"leaves":2,"lce":3,"lci":1,"lc":4,"pe":1.5}"#);
    }

    #[test]
    fn test_clear() {
        let mut t = sample();
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t, BinaryTree::default());
    }

    #[test]
    fn test_drop_degenerate_chain() {
        let mut t = BinaryTree::leaf(0);
        for i in 1..200_000 {
            t = BinaryTree::node(i, t, BinaryTree::empty());
        }
        drop(t);
    }
}
