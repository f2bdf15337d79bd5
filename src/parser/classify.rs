//! Character classification used by the scanner to pick a lexing rule.
//!
//! Every predicate is pure. A character that matches none of them is not an
//! error here; the scanner turns it into a [`Category::Error`] token.
//!
//! [`Category::Error`]: super::lexer::Category::Error

/// Characters that may start (or continue) an operator lexeme.
pub const OPERATOR_SYMBOLS: &str = "+-*/:=<>;()$";

/// Leading characters that may combine with a following operator symbol
/// into a two-character lexeme (`:=`, `<>`, `<=`, `>=`).
pub const TWO_CHAR_LEADERS: [char; 3] = [':', '<', '>'];

pub fn is_letter(ch: char) -> bool {
    ch.is_alphabetic()
}

/// Decimal digits only; numbers in the language are plain `[0-9]+` runs.
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_letter_or_digit(ch: char) -> bool {
    is_letter(ch) || is_digit(ch)
}

pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

pub fn is_operator_symbol(ch: char) -> bool {
    OPERATOR_SYMBOLS.contains(ch)
}

/// True for `:`, `<` and `>`, which take a one-character lookahead.
pub fn starts_two_char_operator(ch: char) -> bool {
    TWO_CHAR_LEADERS.contains(&ch)
}
