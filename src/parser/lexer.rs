//! Lexer (scanner) for the begin/end assignment language
//!
//! [`scan`] turns the character at an offset into exactly one [`Token`] using
//! maximal munch: identifiers and numbers take the longest run, and `:`, `<`,
//! `>` take a one-character lookahead for `:=`, `<>`, `<=`, `>=`. Input that
//! fits no rule becomes a [`Category::Error`] token instead of aborting, so
//! scanning always makes progress.
//!
//! [`Tokens`] is the lexical-mode entry point: a lazy iterator over the
//! significant (non-whitespace) tokens of one line.

use super::classify::{
    is_digit, is_letter, is_letter_or_digit, is_operator_symbol, is_whitespace,
    starts_two_char_operator,
};
use super::cursor::TokenCursor;
use super::symbols::SymbolTable;
use std::fmt;

/// Token categories, each with the numeric code used when printing tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    // Keywords
    Begin,
    End,
    If,
    Then,
    While,
    Do,

    // Fallback classes
    Ident,
    Number,
    Space,

    // Operators
    Plus,      // +
    Minus,     // -
    Star,      // *
    Slash,     // /
    Colon,     // :
    Assign,    // :=
    Lt,        // <
    Ne,        // <>
    Le,        // <=
    Gt,        // >
    Ge,        // >=
    Eq,        // =
    Semicolon, // ;
    LParen,    // (
    RParen,    // )

    /// The `$` that terminates a program.
    EndMarker,

    /// Malformed input: an unknown character or an unknown two-character
    /// operator.
    Error,

    /// Returned when scanning at or past the end of the buffer. Never stored
    /// in a symbol table.
    #[default]
    Eof,
}

impl Category {
    pub const fn code(self) -> i32 {
        match self {
            Category::EndMarker => -1,
            Category::Begin => 0,
            Category::End => 1,
            Category::Ident => 2,
            Category::Number => 3,
            Category::Space => 4,
            Category::If => 10,
            Category::Then => 11,
            Category::While => 12,
            Category::Do => 13,
            Category::Plus => 20,
            Category::Minus => 21,
            Category::Star => 22,
            Category::Slash => 23,
            Category::Colon => 24,
            Category::Assign => 25,
            Category::Lt => 26,
            Category::Ne => 27,
            Category::Le => 28,
            Category::Gt => 29,
            Category::Ge => 30,
            Category::Eq => 31,
            Category::Semicolon => 32,
            Category::LParen => 33,
            Category::RParen => 34,
            Category::Error => 99,
            Category::Eof => -2,
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Category::Begin
                | Category::End
                | Category::If
                | Category::Then
                | Category::While
                | Category::Do
        )
    }
}

/// A single scanned lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Token {
    /// Character offset where the token starts.
    pub offset: usize,
    /// Number of characters consumed. Zero only for [`Category::Eof`].
    pub length: usize,
    pub category: Category,
    /// The exact lexeme; empty for whitespace and end of input.
    pub text: String,
}

impl Token {
    pub fn new(offset: usize, length: usize, category: Category, text: impl Into<String>) -> Self {
        Self {
            offset,
            length,
            category,
            text: text.into(),
        }
    }

    pub fn eof(offset: usize) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    pub fn is_eof(&self) -> bool {
        self.category == Category::Eof
    }

    /// Short human-readable form for diagnostics.
    pub fn describe(&self) -> String {
        match self.category {
            Category::Eof => "end of input".to_string(),
            Category::Ident => format!("identifier '{}'", self.text),
            Category::Number => format!("number {}", self.text),
            Category::Error => format!("invalid input '{}'", self.text),
            _ => format!("'{}'", self.text),
        }
    }
}

/// Renders `(code, text)`, quoting the text of identifiers.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            Category::Ident => write!(f, "({}, '{}')", self.category.code(), self.text),
            _ => write!(f, "({}, {})", self.category.code(), self.text),
        }
    }
}

/// Scan exactly one token starting at `offset`.
///
/// Past the end of `input` this returns a zero-length [`Category::Eof`]
/// token; callers must check bounds to avoid looping.
pub fn scan(input: &[char], offset: usize, symbols: &SymbolTable) -> Token {
    let Some(&ch) = input.get(offset) else {
        return Token::eof(offset);
    };

    let (length, category) = match ch {
        c if is_letter(c) => {
            let length = run_length(input, offset, is_letter_or_digit);
            let word = lexeme(input, offset, length);
            (length, symbols.keyword_or_ident(&word))
        }
        c if is_digit(c) => (run_length(input, offset, is_digit), Category::Number),
        c if is_operator_symbol(c) => {
            // `:`, `<` and `>` swallow any following operator symbol, even
            // when the pair is not a known operator (`:+` is one error token).
            let length = match input.get(offset + 1) {
                Some(&next) if starts_two_char_operator(c) && is_operator_symbol(next) => 2,
                _ => 1,
            };
            // Single symbols always resolve in a validated table.
            let category = symbols.operator_or_error(&lexeme(input, offset, length));
            (length, category)
        }
        c if is_whitespace(c) => (1, Category::Space),
        _ => (1, Category::Error),
    };

    let text = match category {
        Category::Space => String::new(),
        _ => lexeme(input, offset, length),
    };

    log::trace!(
        "scan: offset {} length {} {:?} {:?}",
        offset,
        length,
        category,
        text
    );

    Token::new(offset, length, category, text)
}

/// Length of the run starting at `offset` whose characters satisfy `pred`.
fn run_length(input: &[char], offset: usize, pred: impl Fn(char) -> bool) -> usize {
    input[offset..].iter().take_while(|&&c| pred(c)).count()
}

fn lexeme(input: &[char], offset: usize, length: usize) -> String {
    input[offset..offset + length].iter().collect()
}

/// Lazy iterator over the significant tokens of one line.
///
/// Cloning a fresh `Tokens` (or building another) restarts from the first
/// token.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    cursor: TokenCursor<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(source: &str, symbols: &'a SymbolTable) -> Self {
        Self {
            cursor: TokenCursor::new(source, symbols),
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.cursor.is_exhausted() {
            return None;
        }

        // Trailing whitespace runs into end of input.
        let token = self.cursor.advance();
        if token.is_eof() {
            None
        } else {
            Some(token.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn scan_str(s: &str, offset: usize) -> Token {
        scan(&chars(s), offset, SymbolTable::shared())
    }

    #[test]
    fn test_identifier_maximal_munch() {
        let token = scan_str("ab12 c", 0);
        assert_eq!(token.length, 4);
        assert_eq!(token.category, Category::Ident);
        assert_eq!(token.text, "ab12");
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(scan_str("begin", 0).category, Category::Begin);
        assert_eq!(scan_str("end;", 0).category, Category::End);
        assert_eq!(scan_str("while", 0).category, Category::While);
        assert_eq!(scan_str("ending", 0).category, Category::Ident);
        assert!(Category::While.is_keyword());
        assert!(!Category::Ident.is_keyword());
    }

    #[test]
    fn test_number_keeps_text() {
        let token = scan_str("0042abc", 0);
        assert_eq!(token.length, 4);
        assert_eq!(token.category, Category::Number);
        assert_eq!(token.text, "0042");
    }

    #[test]
    fn test_two_char_operators() {
        for (src, category) in [
            (":=", Category::Assign),
            ("<>", Category::Ne),
            ("<=", Category::Le),
            (">=", Category::Ge),
        ] {
            let token = scan_str(src, 0);
            assert_eq!(token.length, 2, "{src}");
            assert_eq!(token.category, category, "{src}");
            assert_eq!(token.text, src);
        }
    }

    #[test]
    fn test_leader_without_operator_follower() {
        let token = scan_str(":x", 0);
        assert_eq!(token.length, 1);
        assert_eq!(token.category, Category::Colon);

        let token = scan_str("<", 0);
        assert_eq!(token.length, 1);
        assert_eq!(token.category, Category::Lt);

        let token = scan_str("> 1", 0);
        assert_eq!(token.category, Category::Gt);
    }

    #[test]
    fn test_unknown_pair_is_single_error_token() {
        let token = scan_str(":+1", 0);
        assert_eq!(token.length, 2);
        assert_eq!(token.category, Category::Error);
        assert_eq!(token.text, ":+");

        let token = scan_str(">(", 0);
        assert_eq!(token.length, 2);
        assert_eq!(token.category, Category::Error);
    }

    #[test]
    fn test_single_char_operators() {
        for (src, category) in [
            ("+", Category::Plus),
            ("-", Category::Minus),
            ("*", Category::Star),
            ("/", Category::Slash),
            ("=", Category::Eq),
            (";", Category::Semicolon),
            ("(", Category::LParen),
            (")", Category::RParen),
            ("$", Category::EndMarker),
        ] {
            let token = scan_str(src, 0);
            assert_eq!(token.length, 1);
            assert_eq!(token.category, category, "{src}");
        }
        // `=` never looks ahead
        assert_eq!(scan_str("==", 0).length, 1);
    }

    #[test]
    fn test_whitespace_and_errors() {
        let token = scan_str(" x", 0);
        assert_eq!(token.length, 1);
        assert_eq!(token.category, Category::Space);
        assert!(token.text.is_empty());

        let token = scan_str("#x", 0);
        assert_eq!(token.length, 1);
        assert_eq!(token.category, Category::Error);
        assert_eq!(token.text, "#");
    }

    #[test]
    fn test_end_of_buffer() {
        let token = scan_str("ab", 2);
        assert_eq!(token.length, 0);
        assert_eq!(token.category, Category::Eof);
        assert_eq!(scan_str("", 0), Token::eof(0));
        assert_eq!(scan_str("a", 9).offset, 9);
    }

    #[test]
    fn test_offset_is_recorded() {
        let token = scan_str("x := 1", 2);
        assert_eq!(token.offset, 2);
        assert_eq!(token.category, Category::Assign);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::new(0, 1, Category::Ident, "x").to_string(), "(2, 'x')");
        assert_eq!(Token::new(0, 2, Category::Number, "12").to_string(), "(3, 12)");
        assert_eq!(Token::new(0, 2, Category::Assign, ":=").to_string(), "(25, :=)");
        assert_eq!(Token::new(0, 1, Category::EndMarker, "$").to_string(), "(-1, $)");
        assert_eq!(Token::new(0, 5, Category::Begin, "begin").to_string(), "(0, begin)");
    }

    #[test]
    fn test_tokens_skip_whitespace() {
        let texts: Vec<String> = Tokens::new("  a  := 1 ", SymbolTable::shared())
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["a", ":=", "1"]);
    }

    #[test]
    fn test_tokens_restart_by_clone() {
        let tokens = Tokens::new("begin x end", SymbolTable::shared());
        let first: Vec<Token> = tokens.clone().collect();
        let second: Vec<Token> = tokens.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
