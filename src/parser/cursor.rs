//! Token cursor over one line of input.
//!
//! The cursor owns the character buffer and repeatedly calls [`scan`],
//! dropping whitespace tokens so that neither the parser nor [`Tokens`] ever
//! sees them.
//!
//! [`Tokens`]: super::lexer::Tokens

use super::lexer::{scan, Category, Token};
use super::symbols::SymbolTable;

#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    input: Vec<char>,
    symbols: &'a SymbolTable,
    offset: usize,
    current: Token,
}

impl<'a> TokenCursor<'a> {
    pub fn new(source: &str, symbols: &'a SymbolTable) -> Self {
        Self {
            input: source.chars().collect(),
            symbols,
            offset: 0,
            current: Token::eof(0),
        }
    }

    /// Move to the next non-whitespace token, or to end of input.
    pub fn advance(&mut self) -> &Token {
        loop {
            let token = scan(&self.input, self.offset, self.symbols);
            self.offset += token.length;
            let is_space = token.category == Category::Space;
            self.current = token;
            if !is_space {
                break;
            }
        }

        log::trace!("cursor: {:?} now at offset {}", self.current, self.offset);
        &self.current
    }

    /// The latest significant token.
    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn category(&self) -> Category {
        self.current.category
    }

    /// Offset just past the current token.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// True once every input character has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.input.len()
    }

    pub fn input_len(&self) -> usize {
        self.input.len()
    }
}
