//! minits_lexer: lexer/tokenizer for minits source text.
//!
//! Converts source text into tokens one at a time: each call to
//! [`Lexer::next_token`] skips trivia, scans exactly one token, and
//! advances the cursor. Past end of input it keeps returning the
//! end-of-input token.

mod char_codes;
mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::Token;
