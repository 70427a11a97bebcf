//! Template tokenizer using winnow.
//!
//! Splits a CLDR list pattern such as `"{0}, and {1}"` into literal text and
//! ordinal placeholders. No escapes are recognized: a brace that does not
//! belong to a well-formed `{N}` placeholder is an error.

use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::take_while;

use super::ast::Token;
use super::error::ParseError;

/// Tokenize a template string.
///
/// Text between placeholders (including before the first and after the last)
/// becomes a [`Token::Text`] holding the slice verbatim. Empty text runs are
/// not emitted.
///
/// # Example
///
/// ```
/// use listfmt::parser::{Token, tokenize};
///
/// let tokens = tokenize("{1}، {0}").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Placeholder(1),
///         Token::Text("، ".into()),
///         Token::Placeholder(0),
///     ]
/// );
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut remaining = input;
    let tokens = token_stream(&mut remaining).map_err(|e| ParseError::InvalidTemplate {
        template: input.to_string(),
        offset: input.len() - remaining.len(),
        message: format!("parse error: {e}"),
    })?;

    // The stream stops in front of the first brace it cannot consume.
    if let Some(first) = remaining.chars().next() {
        let message = if first == '{' {
            format!(
                "malformed placeholder '{}', expected '{{N}}' with a non-negative integer N",
                malformed_placeholder(remaining)
            )
        } else {
            "unmatched '}'".to_string()
        };
        return Err(ParseError::InvalidTemplate {
            template: input.to_string(),
            offset: input.len() - remaining.len(),
            message,
        });
    }

    Ok(tokens)
}

/// The text of a malformed placeholder, up to and including its closing brace.
fn malformed_placeholder(remaining: &str) -> &str {
    match remaining.find('}') {
        Some(end) => &remaining[..=end],
        None => remaining,
    }
}

fn token_stream(input: &mut &str) -> ModalResult<Vec<Token>> {
    repeat(0.., alt((placeholder, literal))).parse_next(input)
}

/// Parse a placeholder: `{` digits `}`
fn placeholder(input: &mut &str) -> ModalResult<Token> {
    delimited('{', digit1.try_map(|digits: &str| digits.parse::<usize>()), '}')
        .map(Token::Placeholder)
        .parse_next(input)
}

/// Parse a run of literal text (anything but braces).
fn literal(input: &mut &str) -> ModalResult<Token> {
    take_while(1.., |c: char| c != '{' && c != '}')
        .map(|text: &str| Token::Text(text.to_string()))
        .parse_next(input)
}
