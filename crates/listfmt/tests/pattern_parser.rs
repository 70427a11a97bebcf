//! Integration tests for template tokenizing.

use listfmt::parser::{ParseError, Pattern, Token, tokenize};

// =============================================================================
// Basic tokenizing
// =============================================================================

#[test]
fn empty_template_has_no_tokens() {
    assert!(tokenize("").unwrap().is_empty());
}

#[test]
fn pure_literal_is_one_text_token() {
    assert_eq!(
        tokenize("no placeholders here").unwrap(),
        vec![Token::Text("no placeholders here".into())]
    );
}

#[test]
fn placeholders_and_text_in_order() {
    assert_eq!(
        tokenize("{0}, and {1}").unwrap(),
        vec![
            Token::Placeholder(0),
            Token::Text(", and ".into()),
            Token::Placeholder(1),
        ]
    );
}

#[test]
fn leading_and_trailing_text_are_kept() {
    assert_eq!(
        tokenize("<{0}|{1}>").unwrap(),
        vec![
            Token::Text("<".into()),
            Token::Placeholder(0),
            Token::Text("|".into()),
            Token::Placeholder(1),
            Token::Text(">".into()),
        ]
    );
}

#[test]
fn adjacent_placeholders_have_no_text_between() {
    assert_eq!(
        tokenize("{0}{1}").unwrap(),
        vec![Token::Placeholder(0), Token::Placeholder(1)]
    );
}

#[test]
fn placeholders_may_be_out_of_order_and_repeat() {
    assert_eq!(
        tokenize("{1} {0} {1}").unwrap(),
        vec![
            Token::Placeholder(1),
            Token::Text(" ".into()),
            Token::Placeholder(0),
            Token::Text(" ".into()),
            Token::Placeholder(1),
        ]
    );
}

#[test]
fn multi_digit_indices() {
    assert_eq!(
        tokenize("{10}-{2}").unwrap(),
        vec![
            Token::Placeholder(10),
            Token::Text("-".into()),
            Token::Placeholder(2),
        ]
    );
}

#[test]
fn text_is_not_trimmed_or_normalized() {
    let template = "  {0} \u{200F}و{1}\t";
    let tokens = tokenize(template).unwrap();
    assert_eq!(tokens[0], Token::Text("  ".into()));
    assert_eq!(tokens[2], Token::Text(" \u{200F}و".into()));
    assert_eq!(tokens[4], Token::Text("\t".into()));
}

#[test]
fn tokenizing_is_deterministic() {
    let template = "{0}、{1}";
    assert_eq!(tokenize(template).unwrap(), tokenize(template).unwrap());
}

// =============================================================================
// Errors
// =============================================================================

fn offset_of(result: Result<Vec<Token>, ParseError>) -> usize {
    result.unwrap_err().offset()
}

#[test]
fn non_numeric_index_is_invalid() {
    let err = tokenize("{0} and {x}").unwrap_err();
    assert_eq!(err.offset(), 8);
    let message = err.to_string();
    assert!(message.contains("{x}"), "{message}");
    assert!(message.contains("{0} and {x}"), "{message}");
}

#[test]
fn negative_index_is_invalid() {
    assert_eq!(offset_of(tokenize("{-1}")), 0);
}

#[test]
fn empty_braces_are_invalid() {
    assert_eq!(offset_of(tokenize("a {} b")), 2);
}

#[test]
fn unterminated_placeholder_is_invalid() {
    assert_eq!(offset_of(tokenize("{0} and {1")), 8);
}

#[test]
fn whitespace_inside_braces_is_invalid() {
    assert!(tokenize("{ 0 }").is_err());
}

#[test]
fn stray_closing_brace_is_invalid() {
    let err = tokenize("{0}} {1}").unwrap_err();
    assert_eq!(err.offset(), 3);
    assert!(err.to_string().contains("unmatched '}'"));
}

#[test]
fn overflowing_index_is_invalid() {
    assert!(tokenize("{99999999999999999999999999}").is_err());
}

#[test]
fn error_offset_is_in_bytes() {
    // "و" is two bytes.
    assert_eq!(offset_of(tokenize("و{a}")), 2);
}

// =============================================================================
// Pattern
// =============================================================================

#[test]
fn pattern_keeps_source_and_counts_placeholders() {
    let pattern = Pattern::parse("{1} {0} {1}").unwrap();
    assert_eq!(pattern.source(), "{1} {0} {1}");
    assert_eq!(pattern.arity(), 3);
    assert_eq!(pattern.placeholders().collect::<Vec<_>>(), vec![1, 0, 1]);
    assert_eq!(pattern.to_string(), "{1} {0} {1}");
}

#[test]
fn pattern_skeleton_strips_placeholders() {
    let pattern: Pattern = "{0}, and {1}.".parse().unwrap();
    assert_eq!(pattern.skeleton(), ", and .");
}

#[test]
fn references_exactly_requires_each_index_once() {
    assert!(Pattern::parse("{1} {0}").unwrap().references_exactly(2));
    assert!(!Pattern::parse("{0} {0}").unwrap().references_exactly(2));
    assert!(!Pattern::parse("{0} {2}").unwrap().references_exactly(2));
    assert!(!Pattern::parse("{0}").unwrap().references_exactly(2));
    assert!(!Pattern::parse("{0} {1} {1}").unwrap().references_exactly(2));
    assert!(Pattern::parse("").unwrap().references_exactly(0));
}
