//! Miette diagnostic wrapper for invalid list pattern templates.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use listfmt::{ParseError, PatternError, PatternKey};
use miette::{miette, Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing at the bad brace of a template.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid template: {message}")]
#[diagnostic(
    code(listfmt::template),
    help("placeholders are written {{0}}, {{1}}, ... and braces cannot be escaped")
)]
pub struct TemplateDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl TemplateDiagnostic {
    /// Create a diagnostic for a template that failed to tokenize.
    ///
    /// Returns `None` for errors that have no position in a template.
    pub fn from_pattern_error(locale: &str, key: &PatternKey, err: &PatternError) -> Option<Self> {
        let PatternError::InvalidTemplate { slot, source } = err else {
            return None;
        };
        let ParseError::InvalidTemplate {
            template,
            offset,
            message,
        } = source;

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = (*offset).min(template.len());
        let len = template[offset..].chars().next().map_or(0, char::len_utf8);

        Some(TemplateDiagnostic {
            src: NamedSource::new(format!("{locale}.{key}.{slot}"), template.clone()),
            span: (offset, len).into(),
            message: message.clone(),
        })
    }
}

/// Turn any pattern error into a report, with source context when available.
pub fn report_pattern_error(locale: &str, key: &PatternKey, err: &PatternError) -> Report {
    match TemplateDiagnostic::from_pattern_error(locale, key, err) {
        Some(diagnostic) => diagnostic.into(),
        None => miette!("{locale} {key}: {err}"),
    }
}
