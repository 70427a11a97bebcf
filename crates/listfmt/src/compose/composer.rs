//! Recursive list composition with range tracking.
//!
//! Composition never searches the output for item text. Each template is
//! expanded into a sequence of components (literal runs and item markers),
//! and the composed remainder is spliced in as the previous component
//! sequence. The final string and every item range come from one walk over
//! the flattened components, so duplicate item text or item text that also
//! occurs in template punctuation cannot shift a range.

use std::collections::VecDeque;

use tracing::trace;

use crate::compose::list::ComposedList;
use crate::parser::{Pattern, Token};
use crate::patterns::PatternSet;

/// Placeholder that stands for the newly introduced item.
const NEW_ITEM: usize = 0;

/// One piece of the output string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component<'p> {
    /// Literal template text.
    Literal(&'p str),
    /// The item at this index of the input.
    Item(usize),
}

/// Compose `items` into a single list string using `patterns`.
///
/// Selection order:
/// 1. A fixed template for exactly `items.len()` items.
/// 2. No items: the empty string.
/// 3. One item: the item itself.
/// 4. Otherwise `end` for the last two items, `middle` for each inner item,
///    and `start` for the first item.
///
/// # Example
///
/// ```
/// use listfmt::{PatternSet, compose};
///
/// let patterns = PatternSet::from_entries([
///     ("2", "{0} and {1}"),
///     ("start", "{0}, {1}"),
///     ("middle", "{0}, {1}"),
///     ("end", "{0}, and {1}"),
/// ])
/// .unwrap();
///
/// let list = compose(&["Liam", "Jack", "Joe"], &patterns);
/// assert_eq!(list.text(), "Liam, Jack, and Joe");
/// assert_eq!(list.item_text(1), Some("Jack"));
/// ```
pub fn compose<S: AsRef<str>>(items: &[S], patterns: &PatternSet) -> ComposedList {
    let components = layout(items.len(), patterns);
    flatten(items, &components)
}

/// Arrange the components for `count` items without touching item text.
fn layout(count: usize, patterns: &PatternSet) -> VecDeque<Component<'_>> {
    if let Some(fixed) = patterns.fixed(count) {
        trace!(count, pattern = fixed.source(), "using fixed pattern");
        return fixed.tokens().iter().map(component_for_fixed).collect();
    }

    let Some(last) = count.checked_sub(1) else {
        return VecDeque::new();
    };

    let mut components = VecDeque::from([Component::Item(last)]);
    for head in (0..last).rev() {
        let pattern = if head + 1 == last {
            patterns.end()
        } else if head == 0 {
            patterns.start()
        } else {
            patterns.middle()
        };
        wrap(&mut components, pattern, head);
    }
    components
}

fn component_for_fixed(token: &Token) -> Component<'_> {
    match token {
        Token::Text(text) => Component::Literal(text),
        Token::Placeholder(index) => Component::Item(*index),
    }
}

/// Wrap the composed remainder in `pattern`, introducing item `head`.
///
/// Tokens before the remainder placeholder are pushed onto the front and
/// tokens after it onto the back, so the remainder keeps its components
/// untouched and in place.
fn wrap<'p>(components: &mut VecDeque<Component<'p>>, pattern: &'p Pattern, head: usize) {
    let mut before = Vec::new();
    let mut after = Vec::new();
    let mut seen_remainder = false;

    for token in pattern.tokens() {
        let component = match token {
            Token::Text(text) => Component::Literal(text),
            Token::Placeholder(NEW_ITEM) => Component::Item(head),
            Token::Placeholder(_) => {
                seen_remainder = true;
                continue;
            }
        };
        if seen_remainder {
            after.push(component);
        } else {
            before.push(component);
        }
    }

    for component in before.into_iter().rev() {
        components.push_front(component);
    }
    components.extend(after);
}

/// Build the output string and byte ranges in a single pass.
fn flatten<S: AsRef<str>>(items: &[S], components: &VecDeque<Component<'_>>) -> ComposedList {
    let capacity = components
        .iter()
        .map(|component| match component {
            Component::Literal(text) => text.len(),
            Component::Item(index) => items[*index].as_ref().len(),
        })
        .sum();

    let mut text = String::with_capacity(capacity);
    let mut ranges = vec![0..0; items.len()];
    for component in components {
        match component {
            Component::Literal(literal) => text.push_str(literal),
            Component::Item(index) => {
                let start = text.len();
                text.push_str(items[*index].as_ref());
                ranges[*index] = start..text.len();
            }
        }
    }

    let items = items.iter().map(|item| item.as_ref().to_string()).collect();
    ComposedList::new(text, items, ranges)
}
