//! The composed list output and its text-addressing units.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::iter::repeat_n;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Unit in which item ranges are expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextUnit {
    /// UTF-8 byte offsets, directly usable to slice a `str`.
    #[default]
    Byte,
    /// Unicode scalar values.
    Char,
    /// UTF-16 code units, as used by most UI toolkits.
    Utf16,
    /// Extended grapheme clusters.
    Grapheme,
}

/// Error returned when parsing an unknown text unit name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown text unit '{0}', expected one of: byte, char, utf16, grapheme")]
pub struct TextUnitParseError(pub String);

impl TextUnit {
    pub const ALL: [TextUnit; 4] = [
        TextUnit::Byte,
        TextUnit::Char,
        TextUnit::Utf16,
        TextUnit::Grapheme,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextUnit::Byte => "byte",
            TextUnit::Char => "char",
            TextUnit::Utf16 => "utf16",
            TextUnit::Grapheme => "grapheme",
        }
    }
}

impl Display for TextUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextUnit {
    type Err = TextUnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| TextUnitParseError(s.to_string()))
    }
}

/// A run of the composed text, either literal template text or one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    /// Index of the item this run belongs to, `None` for template text.
    pub item: Option<usize>,
}

/// The result of composing a list: the final text, the items as given, and
/// where each item sits in the text.
///
/// Ranges are stored as byte offsets and are index-aligned with the items,
/// regardless of the textual order the templates put the items in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComposedList {
    text: String,
    items: Vec<String>,
    ranges: Vec<Range<usize>>,
}

impl ComposedList {
    pub(crate) fn new(text: String, items: Vec<String>, ranges: Vec<Range<usize>>) -> Self {
        Self {
            text,
            items,
            ranges,
        }
    }

    /// The composed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The items, in input order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Byte range of each item within [`text`](Self::text), in input order.
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The slice of the composed text occupied by item `index`.
    pub fn item_text(&self, index: usize) -> Option<&str> {
        self.ranges
            .get(index)
            .and_then(|range| self.text.get(range.clone()))
    }

    /// Item ranges expressed in `unit`.
    ///
    /// Item boundaries are always `char` boundaries, so `Char` and `Utf16`
    /// ranges are exact. For `Grapheme`, a boundary that falls inside a
    /// cluster (template text starting with a combining mark, say) is
    /// widened to cover the whole cluster.
    ///
    /// ```
    /// use listfmt::{PatternSet, TextUnit, compose};
    ///
    /// let patterns = PatternSet::from_entries([
    ///     ("start", "{0}, {1}"),
    ///     ("middle", "{0}, {1}"),
    ///     ("end", "{0} & {1}"),
    /// ])
    /// .unwrap();
    /// let list = compose(&["👍🏽", "b"], &patterns);
    ///
    /// assert_eq!(list.ranges_in(TextUnit::Byte), vec![0..8, 11..12]);
    /// assert_eq!(list.ranges_in(TextUnit::Utf16), vec![0..4, 7..8]);
    /// assert_eq!(list.ranges_in(TextUnit::Grapheme), vec![0..1, 4..5]);
    /// ```
    pub fn ranges_in(&self, unit: TextUnit) -> Vec<Range<usize>> {
        if unit == TextUnit::Byte {
            return self.ranges.clone();
        }

        let starts = unit_starts(&self.text, unit);
        self.ranges
            .iter()
            .map(|range| {
                unit_index(&starts, range.start, Rounding::Down)
                    ..unit_index(&starts, range.end, Rounding::Up)
            })
            .collect()
    }

    /// The composed text split into literal runs and item runs, in textual
    /// order. Empty literal runs are omitted; empty items are kept.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut order: Vec<usize> = (0..self.ranges.len()).collect();
        order.sort_by_key(|&index| (self.ranges[index].start, self.ranges[index].end));

        let mut segments = Vec::with_capacity(order.len() * 2 + 1);
        let mut cursor = 0;
        for index in order {
            let range = self.ranges[index].clone();
            if range.start > cursor {
                segments.push(Segment {
                    text: &self.text[cursor..range.start],
                    item: None,
                });
            }
            cursor = range.end;
            segments.push(Segment {
                text: &self.text[range],
                item: Some(index),
            });
        }
        if cursor < self.text.len() {
            segments.push(Segment {
                text: &self.text[cursor..],
                item: None,
            });
        }
        segments
    }

    /// Consume the list, keeping only the text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl Display for ComposedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.text)
    }
}

impl From<ComposedList> for String {
    fn from(list: ComposedList) -> Self {
        list.text
    }
}

#[derive(Clone, Copy)]
enum Rounding {
    Down,
    Up,
}

/// Byte offset at which each unit starts, followed by the text length.
///
/// A UTF-16 surrogate pair contributes its char's offset twice.
fn unit_starts(text: &str, unit: TextUnit) -> Vec<usize> {
    let mut starts: Vec<usize> = match unit {
        TextUnit::Byte => (0..text.len()).collect(),
        TextUnit::Char => text.char_indices().map(|(offset, _)| offset).collect(),
        TextUnit::Utf16 => text
            .char_indices()
            .flat_map(|(offset, c)| repeat_n(offset, c.len_utf16()))
            .collect(),
        TextUnit::Grapheme => text
            .grapheme_indices(true)
            .map(|(offset, _)| offset)
            .collect(),
    };
    starts.push(text.len());
    starts
}

/// Convert a byte offset to a unit index.
fn unit_index(starts: &[usize], offset: usize, rounding: Rounding) -> usize {
    let index = starts.partition_point(|&start| start < offset);
    match rounding {
        Rounding::Down if starts.get(index) != Some(&offset) => index.saturating_sub(1),
        Rounding::Down | Rounding::Up => index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_index_rounds_inside_cluster() {
        // "e\u{301}x": one cluster of 3 bytes, then "x".
        let starts = unit_starts("e\u{301}x", TextUnit::Grapheme);
        assert_eq!(starts, vec![0, 3, 4]);
        assert_eq!(unit_index(&starts, 1, Rounding::Down), 0);
        assert_eq!(unit_index(&starts, 1, Rounding::Up), 1);
        assert_eq!(unit_index(&starts, 3, Rounding::Down), 1);
        assert_eq!(unit_index(&starts, 4, Rounding::Up), 2);
    }

    #[test]
    fn utf16_starts_repeat_for_surrogate_pairs() {
        let starts = unit_starts("a😀b", TextUnit::Utf16);
        assert_eq!(starts, vec![0, 1, 1, 5, 6]);
        assert_eq!(unit_index(&starts, 5, Rounding::Down), 3);
    }
}
