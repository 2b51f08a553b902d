//! Parsing utilities for sylva.
//!
//! This crate provides the byte cursor and error type shared by the compact
//! tree notations, plus parsing of comma-separated integer lists.

use thiserror::Error;

/// Deepest parenthesis nesting a [`Cursor`] accepts unless told otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Errors produced while reading tree notation or integer lists.
///
/// Every variant carries the byte offset into the input where the problem
/// was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected {found:?} at offset {offset}, expected {expected}")]
    Unexpected {
        found: char,
        offset: usize,
        expected: &'static str,
    },
    #[error("unexpected end of input at offset {offset}, expected {expected}")]
    UnexpectedEnd {
        offset: usize,
        expected: &'static str,
    },
    #[error("invalid integer {text:?} at offset {offset}")]
    InvalidInteger { text: String, offset: usize },
    #[error("trailing input at offset {offset}")]
    TrailingInput { offset: usize },
    #[error("nesting deeper than {limit} levels at offset {offset}")]
    TooDeep { limit: usize, offset: usize },
}

impl ParseError {
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Unexpected { offset, .. }
            | ParseError::UnexpectedEnd { offset, .. }
            | ParseError::InvalidInteger { offset, .. }
            | ParseError::TrailingInput { offset }
            | ParseError::TooDeep { offset, .. } => *offset,
        }
    }
}

/// A whitespace-skipping cursor over notation text.
///
/// The cursor also tracks parenthesis nesting through [`Cursor::open`] and
/// [`Cursor::close`], so recursive-descent parsers built on it fail with
/// [`ParseError::TooDeep`] instead of exhausting the stack.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self::with_max_depth(src, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(src: &'a str, max_depth: usize) -> Self {
        Self {
            src,
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.pos
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Next non-whitespace character, without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.rest().chars().next()
    }

    /// True if the next token is an integer literal (digit, or `-` then digit).
    pub fn at_integer(&mut self) -> bool {
        self.skip_whitespace();
        let mut chars = self.rest().chars();
        match chars.next() {
            Some(c) if c.is_ascii_digit() => true,
            Some('-') => chars.next().is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    /// Consumes `ch` if it is next.
    pub fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.pos += ch.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes `ch` or reports what was found instead.
    pub fn expect(&mut self, ch: char, expected: &'static str) -> Result<(), ParseError> {
        if self.eat(ch) {
            return Ok(());
        }
        Err(self.unexpected(expected))
    }

    /// Consumes an opening `ch` if it is next and descends one level.
    ///
    /// Returns `Ok(false)` when `ch` is not next. The error offset is that of
    /// the opening character that would exceed the limit.
    pub fn open(&mut self, ch: char) -> Result<bool, ParseError> {
        if self.peek() != Some(ch) {
            return Ok(false);
        }
        if self.depth >= self.max_depth {
            return Err(ParseError::TooDeep {
                limit: self.max_depth,
                offset: self.pos,
            });
        }
        self.pos += ch.len_utf8();
        self.depth += 1;
        Ok(true)
    }

    /// Consumes the closing `ch` matching an earlier [`Cursor::open`].
    pub fn close(&mut self, ch: char, expected: &'static str) -> Result<(), ParseError> {
        self.expect(ch, expected)?;
        self.depth = self.depth.saturating_sub(1);
        Ok(())
    }

    /// Error describing the current position, for use when no alternative matched.
    pub fn unexpected(&mut self, expected: &'static str) -> ParseError {
        match self.peek() {
            Some(found) => ParseError::Unexpected {
                found,
                offset: self.pos,
                expected,
            },
            None => ParseError::UnexpectedEnd {
                offset: self.pos,
                expected,
            },
        }
    }

    /// Reads an optionally negative decimal `i32`.
    pub fn integer(&mut self) -> Result<i32, ParseError> {
        if !self.at_integer() {
            return Err(self.unexpected("integer"));
        }
        let start = self.pos;
        let rest = self.rest();
        let sign = usize::from(rest.starts_with('-'));
        let digits = rest[sign..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        let text = &rest[..sign + digits];
        self.pos += text.len();
        text.parse().map_err(|_| ParseError::InvalidInteger {
            text: text.to_string(),
            offset: start,
        })
    }

    /// Succeeds only if nothing but whitespace remains.
    pub fn finish(mut self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(_) => Err(ParseError::TrailingInput { offset: self.pos }),
        }
    }
}

/// Parses a comma-separated list of integers such as `"25, 60,35"`.
///
/// Blank input yields an empty list; empty items are rejected.
pub fn parse_int_list(input: &str) -> Result<Vec<i32>, ParseError> {
    let mut cursor = Cursor::new(input);
    let mut values = Vec::new();
    if cursor.peek().is_none() {
        return Ok(values);
    }
    loop {
        values.push(cursor.integer()?);
        if !cursor.eat(',') {
            break;
        }
    }
    cursor.finish()?;
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_list() {
        assert_eq!(parse_int_list("25,60, 35").unwrap(), vec![25, 60, 35]);
        assert_eq!(parse_int_list("-4,7").unwrap(), vec![-4, 7]);
        assert_eq!(parse_int_list("  ").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_parse_int_list_rejects_empty_item() {
        let err = parse_int_list("1,,2").unwrap_err();
        assert_eq!(
            err,
            ParseError::Unexpected {
                found: ',',
                offset: 2,
                expected: "integer"
            }
        );
    }

    #[test]
    fn test_parse_int_list_trailing() {
        let err = parse_int_list("1 2").unwrap_err();
        assert_eq!(err, ParseError::TrailingInput { offset: 2 });
    }

    #[test]
    fn test_integer_overflow() {
        let err = Cursor::new("99999999999").integer().unwrap_err();
        assert!(matches!(err, ParseError::InvalidInteger { offset: 0, .. }));
    }

    #[test]
    fn test_lone_minus_is_not_an_integer() {
        let mut cursor = Cursor::new("-");
        assert!(!cursor.at_integer());
        assert!(cursor.eat('-'));
        assert!(cursor.finish().is_ok());
    }

    #[test]
    fn test_unexpected_end() {
        let mut cursor = Cursor::new("(");
        assert!(cursor.eat('('));
        let err = cursor.expect(')', "')'").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedEnd {
                offset: 1,
                expected: "')'"
            }
        );
        assert_eq!(err.offset(), 1);
    }

    #[test]
    fn test_nesting_limit() {
        let mut cursor = Cursor::with_max_depth("(( (", 2);
        assert!(cursor.open('(').unwrap());
        assert!(cursor.open('(').unwrap());
        let err = cursor.open('(').unwrap_err();
        assert_eq!(err, ParseError::TooDeep { limit: 2, offset: 3 });
        assert_eq!(err.offset(), 3);
    }

    #[test]
    fn test_close_restores_depth() {
        let mut cursor = Cursor::with_max_depth("()()", 1);
        for _ in 0..2 {
            assert!(cursor.open('(').unwrap());
            cursor.close(')', "')'").unwrap();
        }
        assert!(!cursor.open('(').unwrap());
        assert!(cursor.finish().is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = ParseError::TrailingInput { offset: 4 };
        assert_eq!(err.to_string(), "trailing input at offset 4");
        let err = ParseError::TooDeep { limit: 8, offset: 9 };
        assert_eq!(err.to_string(), "nesting deeper than 8 levels at offset 9");
    }
}
