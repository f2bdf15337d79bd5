//! Recursive descent recognizer
//!
//! Grammar:
//!
//! ```text
//! program         := "begin" multi_statements "end" "$"
//! multi_statements := statement (";" statement)*
//! statement       := ID ":=" expression
//! expression      := term (("+" | "-") term)*
//! term            := factor (("*" | "/") factor)*
//! factor          := ID | NUM | "(" expression ")"
//! ```
//!
//! Each rule consumes the tokens it recognizes and returns `Ok(())`, or
//! returns the first [`SyntaxError`] which `?` carries straight back to
//! [`Parser::parse`]. Nothing is built; the parser only accepts or rejects.

use crate::parser::cursor::TokenCursor;
use crate::parser::lexer::{Category, Token};
use crate::parser::symbols::SymbolTable;
use std::fmt;
use thiserror::Error;

/// Which grammar rule rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SyntaxErrorKind {
    #[error("no begin")]
    NoBegin,
    #[error("no end")]
    NoEnd,
    #[error("no $")]
    NoEndMarker,
    #[error("statement error")]
    Statement,
    #[error("assignment error")]
    Assignment,
    #[error("no )")]
    NoRightParen,
    #[error("expression error")]
    Expression,
}

impl SyntaxErrorKind {
    /// The diagnostic tag reported for this failure.
    pub fn tag(self) -> &'static str {
        match self {
            SyntaxErrorKind::NoBegin => "no begin",
            SyntaxErrorKind::NoEnd => "no end",
            SyntaxErrorKind::NoEndMarker => "no $",
            SyntaxErrorKind::Statement => "statement error",
            SyntaxErrorKind::Assignment => "assignment error",
            SyntaxErrorKind::NoRightParen => "no )",
            SyntaxErrorKind::Expression => "expression error",
        }
    }
}

/// First grammar violation found in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// 1-based column of the offending token.
    pub column: usize,
    /// The token the failing rule was looking at.
    pub found: Token,
}

impl SyntaxError {
    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at column {}, found {}",
            self.kind,
            self.column,
            self.found.describe()
        )
    }
}

impl std::error::Error for SyntaxError {}

/// Recognizer state for a single line.
pub struct Parser<'a> {
    cursor: TokenCursor<'a>,
    valid: bool,
    finished: bool,
    error: Option<SyntaxError>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &str, symbols: &'a SymbolTable) -> Self {
        Self {
            cursor: TokenCursor::new(source, symbols),
            valid: true,
            finished: false,
            error: None,
        }
    }

    /// Check the whole line against the grammar.
    ///
    /// Calling this again returns the recorded outcome without rescanning.
    pub fn parse(&mut self) -> Result<(), SyntaxError> {
        if self.finished {
            return self.error.clone().map_or(Ok(()), Err);
        }

        let result = self.program();
        self.finished = true;
        if let Err(err) = &result {
            log::debug!("syntax error: {}", err);
            self.valid = false;
            self.error = Some(err.clone());
        }
        result
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Diagnostic tag of the recorded failure, if any.
    pub fn tag(&self) -> Option<&'static str> {
        self.error.as_ref().map(SyntaxError::tag)
    }

    pub fn error(&self) -> Option<&SyntaxError> {
        self.error.as_ref()
    }

    // ===== Grammar rules =====

    fn program(&mut self) -> Result<(), SyntaxError> {
        log::debug!("program");
        self.advance();
        self.expect(Category::Begin, SyntaxErrorKind::NoBegin)?;
        self.advance();
        self.multi_statements()?;
        self.expect(Category::End, SyntaxErrorKind::NoEnd)?;
        self.advance();
        self.expect(Category::EndMarker, SyntaxErrorKind::NoEndMarker)
    }

    fn multi_statements(&mut self) -> Result<(), SyntaxError> {
        self.statement()?;
        while self.check(Category::Semicolon) {
            self.advance();
            self.statement()?;
        }
        Ok(())
    }

    fn statement(&mut self) -> Result<(), SyntaxError> {
        log::debug!("statement at {}", self.cursor.current().offset);
        self.expect(Category::Ident, SyntaxErrorKind::Statement)?;
        self.advance();
        self.expect(Category::Assign, SyntaxErrorKind::Assignment)?;
        self.advance();
        self.expression()
    }

    fn expression(&mut self) -> Result<(), SyntaxError> {
        self.term()?;
        while !self.cursor.is_exhausted()
            && matches!(self.cursor.category(), Category::Plus | Category::Minus)
        {
            self.advance();
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> Result<(), SyntaxError> {
        self.factor()?;
        while !self.cursor.is_exhausted()
            && matches!(self.cursor.category(), Category::Star | Category::Slash)
        {
            self.advance();
            self.factor()?;
        }
        Ok(())
    }

    fn factor(&mut self) -> Result<(), SyntaxError> {
        match self.cursor.category() {
            Category::Ident | Category::Number => {
                self.advance();
                Ok(())
            }
            Category::LParen => {
                self.advance();
                self.expression()?;
                self.expect(Category::RParen, SyntaxErrorKind::NoRightParen)?;
                self.advance();
                Ok(())
            }
            _ => Err(self.error_here(SyntaxErrorKind::Expression)),
        }
    }

    // ===== Helper methods =====

    fn advance(&mut self) {
        self.cursor.advance();
    }

    fn check(&self, category: Category) -> bool {
        self.cursor.category() == category
    }

    fn expect(&self, category: Category, kind: SyntaxErrorKind) -> Result<(), SyntaxError> {
        if self.check(category) {
            Ok(())
        } else {
            Err(self.error_here(kind))
        }
    }

    fn error_here(&self, kind: SyntaxErrorKind) -> SyntaxError {
        let found = self.cursor.current().clone();
        SyntaxError {
            kind,
            column: found.offset + 1,
            found,
        }
    }
}
