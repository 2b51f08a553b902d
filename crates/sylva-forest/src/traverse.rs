use crate::{Forest, GenTree};

/// Hooks invoked by [`traverse`]. Every hook defaults to doing nothing.
pub trait Visitor {
    /// Called for a leaf, in place of descending.
    fn on_leaf(&mut self, _tree: &GenTree) {}

    /// Called once for an internal node, before its first child.
    fn on_before_children(&mut self, _tree: &GenTree) {}

    /// Called after child `i` (1-based) and before child `i + 1`.
    fn on_between_children(&mut self, _tree: &GenTree, _i: usize) {}

    /// Called once for an internal node, after its last child.
    fn on_after_children(&mut self, _tree: &GenTree) {}
}

/// Depth-first walk of `tree`.
///
/// For an internal node with `n` children the order is: `on_before_children`,
/// then for each child `i` in `1..=n` the recursive walk of that child
/// followed, when `i < n`, by `on_between_children(node, i)`, and finally
/// `on_after_children`.
pub fn traverse<V: Visitor + ?Sized>(tree: &GenTree, visitor: &mut V) {
    if tree.is_leaf() {
        visitor.on_leaf(tree);
        return;
    }
    let count = tree.children().count();
    visitor.on_before_children(tree);
    for (index, child) in tree.children().iter().enumerate() {
        let i = index + 1;
        traverse(child, visitor);
        if i < count {
            visitor.on_between_children(tree, i);
        }
    }
    visitor.on_after_children(tree);
}

/// Walks each tree of `forest` in order.
pub fn traverse_forest<V: Visitor + ?Sized>(forest: &Forest, visitor: &mut V) {
    for tree in forest {
        traverse(tree, visitor);
    }
}

type TreeHook<'a> = Box<dyn FnMut(&GenTree) + 'a>;
type IndexHook<'a> = Box<dyn FnMut(&GenTree, usize) + 'a>;

/// A visitor assembled from optional closures. Missing hooks are no-ops.
///
/// ```
/// use sylva_forest::{GenTree, Treatments, traverse};
///
/// let tree: GenTree = "1(2,3)".parse().unwrap();
/// let mut leaves = Vec::new();
/// traverse(&tree, &mut Treatments::new().leaf(|t| leaves.push(t.root())));
/// assert_eq!(leaves, vec![2, 3]);
/// ```
#[derive(Default)]
pub struct Treatments<'a> {
    leaf: Option<TreeHook<'a>>,
    before: Option<TreeHook<'a>>,
    between: Option<IndexHook<'a>>,
    after: Option<TreeHook<'a>>,
}

impl<'a> Treatments<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leaf(mut self, hook: impl FnMut(&GenTree) + 'a) -> Self {
        self.leaf = Some(Box::new(hook));
        self
    }

    pub fn before(mut self, hook: impl FnMut(&GenTree) + 'a) -> Self {
        self.before = Some(Box::new(hook));
        self
    }

    pub fn between(mut self, hook: impl FnMut(&GenTree, usize) + 'a) -> Self {
        self.between = Some(Box::new(hook));
        self
    }

    pub fn after(mut self, hook: impl FnMut(&GenTree) + 'a) -> Self {
        self.after = Some(Box::new(hook));
        self
    }
}

impl Visitor for Treatments<'_> {
    fn on_leaf(&mut self, tree: &GenTree) {
        if let Some(hook) = self.leaf.as_mut() {
            hook(tree);
        }
    }

    fn on_before_children(&mut self, tree: &GenTree) {
        if let Some(hook) = self.before.as_mut() {
            hook(tree);
        }
    }

    fn on_between_children(&mut self, tree: &GenTree, i: usize) {
        if let Some(hook) = self.between.as_mut() {
            hook(tree, i);
        }
    }

    fn on_after_children(&mut self, tree: &GenTree) {
        if let Some(hook) = self.after.as_mut() {
            hook(tree);
        }
    }
}

/// Renders `(v` before children, `)` after them and `(v)` for a leaf.
/// Nothing is written between children.
#[derive(Debug, Default, Clone)]
pub struct ExpressionPrinter {
    out: String,
}

impl ExpressionPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl Visitor for ExpressionPrinter {
    fn on_leaf(&mut self, tree: &GenTree) {
        self.out.push('(');
        self.out.push_str(&tree.root().to_string());
        self.out.push(')');
    }

    fn on_before_children(&mut self, tree: &GenTree) {
        self.out.push('(');
        self.out.push_str(&tree.root().to_string());
    }

    fn on_after_children(&mut self, _tree: &GenTree) {
        self.out.push(')');
    }
}

pub fn render_expression(tree: &GenTree) -> String {
    let mut printer = ExpressionPrinter::new();
    traverse(tree, &mut printer);
    printer.finish()
}

pub fn render_forest_expression(forest: &Forest) -> String {
    let mut printer = ExpressionPrinter::new();
    traverse_forest(forest, &mut printer);
    printer.finish()
}
