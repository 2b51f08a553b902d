//! Binary search tree over integers.
//!
//! Ordering rule: every value in a node's left subtree is `<=` the node's
//! value and every value in its right subtree is `>`. Duplicates therefore
//! always go left. The tree is never rebalanced.

/// Value stored in the tree.
pub type Element = i32;

/// Owning link to an optional subtree.
pub type Link = Option<Box<BstNode>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BstNode {
    pub value: Element,
    pub left: Link,
    pub right: Link,
}

impl BstNode {
    pub fn new(value: Element) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Bst {
    root: Link,
    size: usize,
}

impl Bst {
    /// Returns the empty tree.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Adds `value` as a new leaf. Equal values descend to the left.
    pub fn insert(&mut self, value: Element) {
        self.root = insert_node(self.root.take(), value);
        self.size += 1;
    }

    /// Iterative lookup in O(height).
    pub fn contains(&self, value: Element) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            if value == node.value {
                return true;
            }
            cursor = if value <= node.value {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }

    /// Removes one occurrence of `value`. Returns `false` and leaves the tree
    /// untouched when the value is absent.
    pub fn delete(&mut self, value: Element) -> bool {
        let mut removed = false;
        self.root = delete_node(self.root.take(), value, &mut removed);
        if removed {
            self.size -= 1;
        }
        removed
    }

    /// Leftmost node, or `None` for the empty tree.
    pub fn min_node(&self) -> Option<&BstNode> {
        self.root.as_deref().map(min_of)
    }

    pub fn min(&self) -> Option<Element> {
        self.min_node().map(|node| node.value)
    }

    pub fn max(&self) -> Option<Element> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(node.value)
    }

    pub fn root(&self) -> Option<&BstNode> {
        self.root.as_deref()
    }

    /// Edge count of the longest root-to-leaf path; `-1` when empty.
    pub fn height(&self) -> i32 {
        height_of(&self.root)
    }

    /// Values in node, left, right order.
    pub fn prefix(&self) -> Vec<Element> {
        let mut out = Vec::with_capacity(self.size);
        walk_prefix(&self.root, &mut out);
        out
    }

    /// Values in left, node, right order. Always non-decreasing.
    pub fn infix(&self) -> Vec<Element> {
        let mut out = Vec::with_capacity(self.size);
        walk_infix(&self.root, &mut out);
        out
    }

    /// Values in left, right, node order.
    pub fn postfix(&self) -> Vec<Element> {
        let mut out = Vec::with_capacity(self.size);
        walk_postfix(&self.root, &mut out);
        out
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Releases every node. Uses an explicit stack so that a degenerate
    /// (list-shaped) tree cannot exhaust the call stack.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<BstNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.size = 0;
    }
}

impl Drop for Bst {
    fn drop(&mut self) {
        self.clear();
    }
}

impl FromIterator<Element> for Bst {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut tree = Bst::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Element> for Bst {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

fn insert_node(link: Link, value: Element) -> Link {
    match link {
        None => Some(Box::new(BstNode::new(value))),
        Some(mut node) => {
            if value <= node.value {
                node.left = insert_node(node.left.take(), value);
            } else {
                node.right = insert_node(node.right.take(), value);
            }
            Some(node)
        }
    }
}

fn delete_node(link: Link, value: Element, removed: &mut bool) -> Link {
    let mut node = link?;
    if value < node.value {
        node.left = delete_node(node.left.take(), value, removed);
        return Some(node);
    }
    if value > node.value {
        node.right = delete_node(node.right.take(), value, removed);
        return Some(node);
    }

    *removed = true;
    match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (None, Some(right)) => Some(right),
        (Some(left), None) => Some(left),
        (Some(left), Some(right)) => {
            // Two children: take the in-order successor's value, then remove
            // that value from the right subtree.
            let successor = min_of(&right).value;
            node.value = successor;
            node.left = Some(left);
            let mut ignored = false;
            node.right = delete_node(Some(right), successor, &mut ignored);
            Some(node)
        }
    }
}

fn min_of(mut node: &BstNode) -> &BstNode {
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    node
}

fn height_of(link: &Link) -> i32 {
    match link {
        None => -1,
        Some(node) => 1 + height_of(&node.left).max(height_of(&node.right)),
    }
}

fn walk_prefix(link: &Link, out: &mut Vec<Element>) {
    if let Some(node) = link {
        out.push(node.value);
        walk_prefix(&node.left, out);
        walk_prefix(&node.right, out);
    }
}

fn walk_infix(link: &Link, out: &mut Vec<Element>) {
    if let Some(node) = link {
        walk_infix(&node.left, out);
        out.push(node.value);
        walk_infix(&node.right, out);
    }
}

fn walk_postfix(link: &Link, out: &mut Vec<Element>) {
    if let Some(node) = link {
        walk_postfix(&node.left, out);
        walk_postfix(&node.right, out);
        out.push(node.value);
    }
}
