//! Scanner and recognizer for the begin/end assignment language
//!
//! Data flows one token at a time, left to right:
//! - [`classify`]: character predicates (letter, digit, whitespace, operator)
//! - [`symbols`]: the immutable lexeme → [`Category`] table
//! - [`lexer`]: maximal-munch scanner and the lexical-mode [`Tokens`] iterator
//! - [`cursor`]: whitespace-skipping token cursor
//! - [`parser`]: recursive descent recognizer reporting the first error
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent with one token of lookahead and no
//! backtracking. No syntax tree is built.
//!
//! [`Category`]: lexer::Category
//! [`Tokens`]: lexer::Tokens

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod parser;
pub mod symbols;
