//! Source position types for location tracking.
//!
//! Positions are tracked live by the lexer as it walks the source text,
//! and are carried on tokens and diagnostics to point at where things
//! originate in the source code.

use std::fmt;

/// A position in source text as a 1-based line and column pair.
///
/// Columns count characters, not bytes, and are recorded at the start of
/// a token rather than its end. A newline moves to the start of the next
/// line; every other character advances the column by one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

impl Position {
    /// Create a position at the given line and column.
    #[inline]
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The position of the first character of any source text.
    #[inline]
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }

    /// Advance this position past a single character.
    #[inline]
    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
