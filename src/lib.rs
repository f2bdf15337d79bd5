//! # Introduction
//!
//! rdcheck decides whether one line of a tiny imperative language is
//! lexically and syntactically well formed.
//!
//! ```text
//! begin x:=1+2;y:=x*3 end $
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! Line → Classifier → Scanner → Token cursor → Recursive descent parser
//! ```
//!
//! 1. [`parser::classify`] — character categories the scanner dispatches on.
//! 2. [`parser::lexer`] — maximal-munch scanning against a
//!    [`parser::symbols::SymbolTable`].
//! 3. [`parser::cursor`] — yields the next non-whitespace token on demand.
//! 4. [`parser::parser`] — accepts the line or reports the first
//!    [`SyntaxError`].
//!
//! Lexical problems never abort scanning: unknown input becomes an error
//! token and the parser rejects it like any other unexpected token.

pub mod parser;

pub use parser::lexer::{scan, Category, Token, Tokens};
pub use parser::parser::{Parser, SyntaxError, SyntaxErrorKind};
pub use parser::symbols::{SymbolTable, SymbolTableError};

/// Significant tokens of `line`, using the shared symbol table.
pub fn tokenize(line: &str) -> Tokens<'static> {
    Tokens::new(line, SymbolTable::shared())
}

/// Check `line` against the grammar, using the shared symbol table.
pub fn check(line: &str) -> Result<(), SyntaxError> {
    Parser::new(line, SymbolTable::shared()).parse()
}
