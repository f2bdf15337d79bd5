//! Lexeme → category table shared by the scanner and the parser.
//!
//! The table is built once and never mutated afterwards. Scanners and parsers
//! borrow it, so independent lines can be checked concurrently against the
//! same instance.

use super::classify::OPERATOR_SYMBOLS;
use super::lexer::Category;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Pseudo lexemes naming fallback categories rather than real source text.
pub const IDENT_KEY: &str = "ID";
pub const NUMBER_KEY: &str = "NUM";
pub const SPACE_KEY: &str = "SPACE";
pub const ERROR_KEY: &str = "ERR";

const STANDARD_ENTRIES: [(&str, Category); 26] = [
    ("$", Category::EndMarker),
    ("begin", Category::Begin),
    ("end", Category::End),
    (IDENT_KEY, Category::Ident),
    (NUMBER_KEY, Category::Number),
    (SPACE_KEY, Category::Space),
    ("if", Category::If),
    ("then", Category::Then),
    ("while", Category::While),
    ("do", Category::Do),
    ("+", Category::Plus),
    ("-", Category::Minus),
    ("*", Category::Star),
    ("/", Category::Slash),
    (":", Category::Colon),
    (":=", Category::Assign),
    ("<", Category::Lt),
    ("<>", Category::Ne),
    ("<=", Category::Le),
    (">", Category::Gt),
    (">=", Category::Ge),
    ("=", Category::Eq),
    (";", Category::Semicolon),
    ("(", Category::LParen),
    (")", Category::RParen),
    (ERROR_KEY, Category::Error),
];

/// Integrity faults in a custom symbol table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymbolTableError {
    /// A single-character operator the scanner relies on has no entry.
    #[error("operator symbol {0:?} is missing from the symbol table")]
    MissingOperator(char),

    /// A pseudo entry (`ID`, `NUM`, `SPACE`, `ERR`) is absent or points at
    /// the wrong category.
    #[error("pseudo entry {key:?} must map to {expected:?}")]
    BadPseudoEntry {
        key: &'static str,
        expected: Category,
    },

    /// The end-of-buffer category is reserved and cannot be assigned.
    #[error("lexeme {0:?} is mapped to the reserved end-of-input category")]
    ReservedCategory(String),
}

/// Immutable mapping from lexeme text to [`Category`].
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: FxHashMap<String, Category>,
}

impl SymbolTable {
    /// The language's built-in keywords and operators.
    pub fn standard() -> Self {
        let entries = STANDARD_ENTRIES
            .iter()
            .map(|&(lexeme, category)| (lexeme.to_string(), category))
            .collect();
        Self { entries }
    }

    /// Process-wide standard table, built on first use.
    pub fn shared() -> &'static SymbolTable {
        static SHARED: OnceLock<SymbolTable> = OnceLock::new();
        SHARED.get_or_init(SymbolTable::standard)
    }

    /// Build a table from arbitrary entries, rejecting tables the scanner
    /// could not rely on.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, SymbolTableError>
    where
        I: IntoIterator<Item = (S, Category)>,
        S: Into<String>,
    {
        let mut map = FxHashMap::default();
        for (lexeme, category) in entries {
            let lexeme = lexeme.into();
            if category == Category::Eof {
                return Err(SymbolTableError::ReservedCategory(lexeme));
            }
            map.insert(lexeme, category);
        }

        let table = Self { entries: map };
        table.validate()?;
        Ok(table)
    }

    /// Check the invariants the scanner depends on.
    pub fn validate(&self) -> Result<(), SymbolTableError> {
        for ch in OPERATOR_SYMBOLS.chars() {
            let mut buf = [0u8; 4];
            let lexeme: &str = ch.encode_utf8(&mut buf);
            if !self.entries.contains_key(lexeme) {
                return Err(SymbolTableError::MissingOperator(ch));
            }
        }

        let pseudo = [
            (IDENT_KEY, Category::Ident),
            (NUMBER_KEY, Category::Number),
            (SPACE_KEY, Category::Space),
            (ERROR_KEY, Category::Error),
        ];
        for (key, expected) in pseudo {
            if self.entries.get(key) != Some(&expected) {
                return Err(SymbolTableError::BadPseudoEntry { key, expected });
            }
        }

        Ok(())
    }

    pub fn lookup(&self, lexeme: &str) -> Option<Category> {
        self.entries.get(lexeme).copied()
    }

    /// Keyword category for a word, or the identifier fallback.
    pub fn keyword_or_ident(&self, word: &str) -> Category {
        self.lookup(word).unwrap_or(Category::Ident)
    }

    /// Operator category for a lexeme, or the error fallback.
    pub fn operator_or_error(&self, lexeme: &str) -> Category {
        self.lookup(lexeme).unwrap_or(Category::Error)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Category)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        let table = SymbolTable::standard();
        assert_eq!(table.len(), STANDARD_ENTRIES.len());
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    fn test_codes_are_unique() {
        let table = SymbolTable::standard();
        let mut codes: Vec<i32> = table.iter().map(|(_, c)| c.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), table.len());
        assert!(codes.iter().all(|&c| c != Category::Eof.code()));
    }

    #[test]
    fn test_lookup_fallbacks() {
        let table = SymbolTable::shared();
        assert_eq!(table.keyword_or_ident("begin"), Category::Begin);
        assert_eq!(table.keyword_or_ident("while"), Category::While);
        assert_eq!(table.keyword_or_ident("beginx"), Category::Ident);
        assert_eq!(table.operator_or_error(":="), Category::Assign);
        assert_eq!(table.operator_or_error(":+"), Category::Error);
        assert_eq!(table.lookup("$"), Some(Category::EndMarker));
    }

    #[test]
    fn test_missing_operator_rejected() {
        let entries = STANDARD_ENTRIES.iter().filter(|(lexeme, _)| *lexeme != ";").copied();
        let err = SymbolTable::from_entries(entries).unwrap_err();
        assert_eq!(err, SymbolTableError::MissingOperator(';'));
    }

    #[test]
    fn test_bad_pseudo_entry_rejected() {
        let entries = STANDARD_ENTRIES.iter().map(|&(lexeme, category)| {
            if lexeme == NUMBER_KEY {
                (lexeme, Category::Ident)
            } else {
                (lexeme, category)
            }
        });
        let err = SymbolTable::from_entries(entries).unwrap_err();
        assert!(matches!(err, SymbolTableError::BadPseudoEntry { key: "NUM", .. }));
    }

    #[test]
    fn test_reserved_category_rejected() {
        let entries = STANDARD_ENTRIES
            .iter()
            .copied()
            .chain(std::iter::once(("eof", Category::Eof)));
        let err = SymbolTable::from_entries(entries).unwrap_err();
        assert_eq!(err, SymbolTableError::ReservedCategory("eof".to_string()));
    }

    #[test]
    fn test_custom_table_without_keywords() {
        let entries = STANDARD_ENTRIES
            .iter()
            .filter(|(lexeme, _)| !matches!(*lexeme, "if" | "then" | "while" | "do"))
            .copied();
        let table = SymbolTable::from_entries(entries).unwrap();
        assert_eq!(table.keyword_or_ident("while"), Category::Ident);
    }
}
