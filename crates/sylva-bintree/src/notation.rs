//! Compact text form: `tree := '-' | INT | INT '(' tree ',' tree ')'`.
//!
//! `-` is the empty tree and a bare integer is a leaf, so the tree with
//! root 1, leaf child 2 and right child 3 holding a single left leaf 4 reads
//! `1(2,3(4,-))`.
//!
//! Parsing stops with [`ParseError::TooDeep`] past
//! [`sylva_parse::DEFAULT_MAX_DEPTH`] nested parentheses. Display walks an
//! explicit stack, so trees built directly may be arbitrarily deep.

use std::fmt;
use std::str::FromStr;

use sylva_parse::{Cursor, ParseError};

use crate::BinaryTree;

impl FromStr for BinaryTree {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cursor = Cursor::new(s);
        let tree = parse_tree(&mut cursor)?;
        cursor.finish()?;
        Ok(tree)
    }
}

fn parse_tree(cursor: &mut Cursor<'_>) -> Result<BinaryTree, ParseError> {
    if !cursor.at_integer() {
        if cursor.eat('-') {
            return Ok(BinaryTree::empty());
        }
        return Err(cursor.unexpected("integer or '-'"));
    }
    let value = cursor.integer()?;
    if !cursor.open('(')? {
        return Ok(BinaryTree::leaf(value));
    }
    let left = parse_tree(cursor)?;
    cursor.expect(',', "','")?;
    let right = parse_tree(cursor)?;
    cursor.close(')', "')'")?;
    Ok(BinaryTree::node(value, left, right))
}

enum Piece<'a> {
    Tree(&'a BinaryTree),
    Text(&'static str),
}

impl fmt::Display for BinaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Tree(self)];
        while let Some(piece) = pending.pop() {
            let tree = match piece {
                Piece::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Piece::Tree(tree) => tree,
            };
            match tree.root() {
                None => f.write_str("-")?,
                Some(n) if tree.is_leaf() => write!(f, "{}", n.value)?,
                Some(n) => {
                    write!(f, "{}(", n.value)?;
                    pending.extend([
                        Piece::Text(")"),
                        Piece::Tree(&n.right),
                        Piece::Text(","),
                        Piece::Tree(&n.left),
                    ]);
                }
            }
        }
        Ok(())
    }
}
