//! Compact text form for general trees and forests.
//!
//! ```text
//! tree   := INT | INT '(' tree (',' tree)* ')'
//! forest := [ tree (',' tree)* ]
//! ```
//!
//! Children are appended with [`Forest::insert`], so parsing grows forests
//! exactly the way callers do. Nesting is limited to
//! [`sylva_parse::DEFAULT_MAX_DEPTH`] levels; deeper input fails with
//! [`sylva_parse::ParseError::TooDeep`].

use std::fmt;
use std::str::FromStr;

use sylva_parse::Cursor;

use crate::{Forest, ForestError, GenTree};

impl FromStr for GenTree {
    type Err = ForestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cursor = Cursor::new(s);
        let tree = parse_tree(&mut cursor)?;
        cursor.finish()?;
        Ok(tree)
    }
}

impl FromStr for Forest {
    type Err = ForestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cursor = Cursor::new(s);
        let forest = match cursor.peek() {
            Some(_) => parse_siblings(&mut cursor)?,
            None => Forest::new(),
        };
        cursor.finish()?;
        Ok(forest)
    }
}

fn parse_tree(cursor: &mut Cursor<'_>) -> Result<GenTree, ForestError> {
    let value = cursor.integer()?;
    if !cursor.open('(')? {
        return Ok(GenTree::leaf(value));
    }
    let children = parse_siblings(cursor)?;
    cursor.close(')', "',' or ')'")?;
    Ok(GenTree::new(value, children))
}

fn parse_siblings(cursor: &mut Cursor<'_>) -> Result<Forest, ForestError> {
    let mut forest = Forest::new();
    loop {
        let tree = parse_tree(cursor)?;
        let at = forest.count() + 1;
        forest = forest.insert(at, tree)?;
        if !cursor.eat(',') {
            return Ok(forest);
        }
    }
}

enum Piece<'a> {
    Tree(&'a GenTree),
    Text(&'static str),
}

/// Queues the trees of `forest` comma-separated, first tree on top.
fn push_forest<'a>(pending: &mut Vec<Piece<'a>>, forest: &'a Forest) {
    for (index, tree) in forest.iter().enumerate().rev() {
        pending.push(Piece::Tree(tree));
        if index > 0 {
            pending.push(Piece::Text(","));
        }
    }
}

fn write_pieces(f: &mut fmt::Formatter<'_>, mut pending: Vec<Piece<'_>>) -> fmt::Result {
    while let Some(piece) = pending.pop() {
        match piece {
            Piece::Text(text) => f.write_str(text)?,
            Piece::Tree(tree) => {
                write!(f, "{}", tree.root())?;
                if !tree.is_leaf() {
                    f.write_str("(")?;
                    pending.push(Piece::Text(")"));
                    push_forest(&mut pending, tree.children());
                }
            }
        }
    }
    Ok(())
}

impl fmt::Display for GenTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pieces(f, vec![Piece::Tree(self)])
    }
}

impl fmt::Display for Forest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = Vec::new();
        push_forest(&mut pending, self);
        write_pieces(f, pending)
    }
}
