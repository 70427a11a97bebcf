//! Public token types for parsed list pattern templates.
//!
//! These types are public so tooling can inspect templates without
//! composing them.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::error::ParseError;
use super::template::tokenize;

/// A single token within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A contiguous run of literal text, kept verbatim.
    Text(String),
    /// An ordinal placeholder: `{0}`, `{1}`, ...
    Placeholder(usize),
}

impl Token {
    /// Returns the placeholder index, if this is a placeholder.
    pub fn placeholder(&self) -> Option<usize> {
        match self {
            Token::Placeholder(index) => Some(*index),
            Token::Text(_) => None,
        }
    }
}

/// An immutable, tokenized template such as `"{0}, and {1}"`.
///
/// # Example
///
/// ```
/// use listfmt::parser::{Pattern, Token};
///
/// let pattern: Pattern = "{0} and {1}".parse().unwrap();
/// assert_eq!(pattern.arity(), 2);
/// assert_eq!(pattern.tokens()[1], Token::Text(" and ".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    tokens: Vec<Token>,
}

impl Pattern {
    /// Tokenize `source` into a pattern.
    pub fn parse(source: impl Into<String>) -> Result<Pattern, ParseError> {
        let source = source.into();
        let tokens = tokenize(&source)?;
        Ok(Pattern { source, tokens })
    }

    /// The original template string.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The ordered token sequence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Placeholder indices in textual order, duplicates included.
    pub fn placeholders(&self) -> impl Iterator<Item = usize> + '_ {
        self.tokens.iter().filter_map(Token::placeholder)
    }

    /// Number of placeholder occurrences (each duplicate counts).
    pub fn arity(&self) -> usize {
        self.placeholders().count()
    }

    /// Returns true if the pattern references each of `0..count` exactly once
    /// and nothing else.
    pub fn references_exactly(&self, count: usize) -> bool {
        let distinct: BTreeSet<usize> = self.placeholders().collect();
        self.arity() == count && distinct.len() == count && distinct.iter().all(|&i| i < count)
    }

    /// The template with placeholders stripped.
    pub fn skeleton(&self) -> String {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                Token::Text(text) => Some(text.as_str()),
                Token::Placeholder(_) => None,
            })
            .collect()
    }
}

impl FromStr for Pattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::parse(s)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.source)
    }
}
