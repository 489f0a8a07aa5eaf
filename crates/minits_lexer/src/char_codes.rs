//! Character classification helpers used by the lexer.

/// Check if a character is whitespace (including line breaks).
#[inline]
pub fn is_white_space(ch: char) -> bool {
    ch.is_whitespace()
}

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character can start an identifier or keyword.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Check if a character can continue an identifier or keyword.
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}
