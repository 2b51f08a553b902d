//! General trees and forests for sylva.
//!
//! A [`GenTree`] is a value plus an owned [`Forest`] of children. A forest is
//! an ordered, 1-indexed sequence of trees. Forests only grow, through
//! [`Forest::insert`], which consumes the old forest and returns the new one,
//! so no earlier forest value can observe the change.
//!
//! Trees are walked with [`traverse`], driven by a [`Visitor`] with four
//! optional hooks. [`ExpressionPrinter`] is the stock visitor that renders a
//! fully parenthesised prefix expression such as `(1(2)(3(4)))`.

use std::collections::TryReserveError;

use thiserror::Error;

mod notation;
mod traverse;

pub use sylva_parse::ParseError;
pub use traverse::{
    ExpressionPrinter, Treatments, Visitor, render_expression, render_forest_expression, traverse,
    traverse_forest,
};

/// Value held at the root of a general tree.
pub type Value = i32;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForestError {
    #[error("could not grow forest to {requested} trees: {source}")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("invalid tree notation: {0}")]
    Parse(#[from] ParseError),
}

/// Ordered, 1-indexed sequence of trees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    trees: Vec<GenTree>,
}

impl Forest {
    /// The empty forest.
    pub fn new() -> Self {
        Self { trees: Vec::new() }
    }

    /// Number of trees.
    pub fn count(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// The `i`-th tree, counting from 1. `None` when `i` is 0 or past the end.
    pub fn ith(&self, i: usize) -> Option<&GenTree> {
        i.checked_sub(1).and_then(|index| self.trees.get(index))
    }

    /// Returns a forest of `count() + 1` trees with `tree` at position `i`.
    ///
    /// `i` is clamped into `[1, count() + 1]`. Trees before `i` keep their
    /// position and trees from `i` onward shift right by one. This is the
    /// only way a forest grows.
    pub fn insert(mut self, i: usize, tree: GenTree) -> Result<Forest, ForestError> {
        let requested = self.count() + 1;
        self.trees
            .try_reserve(1)
            .map_err(|source| ForestError::Allocation { requested, source })?;
        let position = i.clamp(1, requested);
        self.trees.insert(position - 1, tree);
        Ok(self)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GenTree> {
        self.trees.iter()
    }
}

impl<'a> IntoIterator for &'a Forest {
    type Item = &'a GenTree;
    type IntoIter = std::slice::Iter<'a, GenTree>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A general tree: a root value and its ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenTree {
    value: Value,
    children: Forest,
}

impl GenTree {
    /// Builds a tree owning `children`.
    pub fn new(value: Value, children: Forest) -> Self {
        Self { value, children }
    }

    pub fn leaf(value: Value) -> Self {
        Self::new(value, Forest::new())
    }

    pub fn root(&self) -> Value {
        self.value
    }

    pub fn children(&self) -> &Forest {
        &self.children
    }

    /// A tree is a leaf when its child forest is empty.
    pub fn is_leaf(&self) -> bool {
        self.children.count() == 0
    }
}

impl Drop for GenTree {
    fn drop(&mut self) {
        // Flatten descendants so a deep tree is released without recursion.
        let mut pending = std::mem::take(&mut self.children.trees);
        while let Some(mut tree) = pending.pop() {
            pending.append(&mut tree.children.trees);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest_of(values: &[Value]) -> Forest {
        values.iter().fold(Forest::new(), |f, &v| {
            let at = f.count() + 1;
            f.insert(at, GenTree::leaf(v)).unwrap()
        })
    }

    fn roots(forest: &Forest) -> Vec<Value> {
        forest.iter().map(GenTree::root).collect()
    }

    #[test]
    fn test_empty_forest() {
        let f = Forest::new();
        assert_eq!(f.count(), 0);
        assert!(f.is_empty());
        assert!(f.ith(0).is_none());
        assert!(f.ith(1).is_none());
    }

    #[test]
    fn test_ith_is_one_based() {
        let f = forest_of(&[10, 20, 30]);
        assert_eq!(f.ith(1).map(GenTree::root), Some(10));
        assert_eq!(f.ith(3).map(GenTree::root), Some(30));
        assert!(f.ith(0).is_none());
        assert!(f.ith(4).is_none());
    }

    #[test]
    fn test_insert_in_middle_shifts_right() {
        let f = forest_of(&[1, 2, 3]).insert(2, GenTree::leaf(9)).unwrap();
        assert_eq!(f.count(), 4);
        assert_eq!(roots(&f), vec![1, 9, 2, 3]);
    }

    #[test]
    fn test_insert_position_is_clamped() {
        let f = forest_of(&[1, 2]).insert(0, GenTree::leaf(0)).unwrap();
        assert_eq!(roots(&f), vec![0, 1, 2]);
        let f = f.insert(100, GenTree::leaf(7)).unwrap();
        assert_eq!(roots(&f), vec![0, 1, 2, 7]);
    }

    #[test]
    fn test_insert_keeps_order() {
        let f = forest_of(&[1, 3]).insert(2, GenTree::leaf(2)).unwrap();
        assert_eq!(roots(&f), vec![1, 2, 3]);
    }

    #[test]
    fn test_wide_forest_grows_amortised() {
        let f = (0..10_000).try_fold(Forest::new(), |f, v| {
            let at = f.count() + 1;
            f.insert(at, GenTree::leaf(v))
        });
        let f = f.unwrap();
        assert_eq!(f.count(), 10_000);
        assert_eq!(f.ith(10_000).map(GenTree::root), Some(9_999));
        assert!(f.trees.capacity() > f.count());
    }

    #[test]
    fn test_drop_degenerate_chain() {
        let mut t = GenTree::leaf(0);
        for v in 1..200_000 {
            t = GenTree::new(v, Forest::new().insert(1, t).unwrap());
        }
        drop(t);
    }

    #[test]
    fn test_gen_tree_accessors() {
        let t = GenTree::new(5, forest_of(&[6, 7]));
        assert_eq!(t.root(), 5);
        assert!(!t.is_leaf());
        assert_eq!(t.children().count(), 2);
        assert!(GenTree::leaf(1).is_leaf());
        assert_eq!(roots(t.children()), vec![6, 7]);
    }

    #[test]
    fn test_error_display() {
        let err = ForestError::from(ParseError::TrailingInput { offset: 3 });
        assert_eq!(
            err.to_string(),
            "invalid tree notation: trailing input at offset 3"
        );
    }
}
