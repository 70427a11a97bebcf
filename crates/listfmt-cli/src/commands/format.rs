//! Implementation of the `listfmt format` command.

use std::ops::Range;
use std::path::Path;

use listfmt::{compose, ListMode, ListStyle, PatternKey, TextUnit};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::output::table::{format_ranges_table, ItemRange};
use crate::output::report_pattern_error;

/// Arguments for the format command.
#[derive(Debug, clap::Args)]
pub struct FormatArgs {
    /// Locale identifier (e.g., en, en-GB, zh_Hant_HK)
    #[arg(long, default_value = "root")]
    pub locale: String,

    /// List mode: standard, or, unit
    #[arg(long, default_value_t = ListMode::Standard)]
    pub mode: ListMode,

    /// List style: default, narrow, short
    #[arg(long, default_value_t = ListStyle::Default)]
    pub style: ListStyle,

    /// Unit for reported ranges: byte, char, utf16, grapheme
    #[arg(long, default_value_t = TextUnit::Byte)]
    pub unit: TextUnit,

    /// Print the range of every item
    #[arg(long)]
    pub ranges: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Items to format
    pub items: Vec<String>,
}

/// JSON output for format results.
#[derive(Serialize)]
struct FormatJson<'a> {
    locale: &'a str,
    resolved: &'a str,
    key: String,
    unit: TextUnit,
    text: &'a str,
    ranges: Vec<Range<usize>>,
}

/// Run the format command.
pub fn run_format(data: &Path, args: FormatArgs) -> Result<i32> {
    let (loader, cache) = super::open_data(data)?;
    let key = PatternKey::new(args.mode, args.style);

    let Some(format) = cache.resolve(&args.locale, &loader) else {
        eprintln!("No list pattern data for locale '{}'", args.locale);
        return Ok(exitcode::DATAERR);
    };

    let patterns = match format.try_pattern_set(args.mode, args.style) {
        Ok(Some(patterns)) => patterns,
        Ok(None) => {
            eprintln!(
                "Locale '{}' has no '{}' patterns",
                format.locale_identifier(),
                key
            );
            return Ok(exitcode::DATAERR);
        }
        Err(e) => {
            return Err(report_pattern_error(format.locale_identifier(), &key, &e));
        }
    };

    let list = compose(&args.items, &patterns);
    let ranges = list.ranges_in(args.unit);

    if args.json {
        let output = FormatJson {
            locale: &args.locale,
            resolved: format.locale_identifier(),
            key: key.to_string(),
            unit: args.unit,
            text: list.text(),
            ranges,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", list);
        if args.ranges {
            let rows: Vec<ItemRange> = ranges
                .into_iter()
                .enumerate()
                .map(|(index, range)| ItemRange {
                    index,
                    item: args.items[index].clone(),
                    range,
                })
                .collect();
            println!("{}", format_ranges_table(args.unit, &rows));
        }
    }

    Ok(exitcode::OK)
}
