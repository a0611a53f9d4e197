//! Line-oriented debug dumps of nodes and attributes.
//!
//! Parser tests compare these dumps against fixtures, so the format is
//! byte-stable for identical input. A record looks like
//!
//! ```text
//! [1:1]>[1:13](0,12)div: <div␣id="a">
//! ```
//!
//! i.e. start line/column, end line/column, start/end offsets, a label and
//! the raw text with whitespace made visible. Ghost nodes have no position
//! and print `N/A` in every position slot.

use crate::walk::flatten;
use crate::{Attribute, MlNode, Token};

const LINE_BREAK_GLYPH: char = '⏎';
const TAB_GLYPH: char = '→';
const SPACE_GLYPH: char = '␣';

/// One line per node of `nodes`. Children are not included.
pub fn node_list_to_debug_maps(nodes: &[MlNode<'_>]) -> Vec<String> {
    nodes.iter().map(node_debug).collect()
}

/// One line per node of the whole tree, in walk order.
pub fn tree_to_debug_maps(nodes: &[MlNode<'_>]) -> Vec<String> {
    flatten(nodes).into_iter().map(node_debug).collect()
}

/// One record per attribute.
///
/// An HTML attribute expands to its own line followed by indented lines for
/// each token field and flag; a field missing from the source still gets a
/// line, with `N/A` positions and empty text.
pub fn attributes_to_debug_maps(attributes: &[Attribute<'_>]) -> Vec<Vec<String>> {
    attributes.iter().map(attribute_debug).collect()
}

fn node_debug(node: &MlNode<'_>) -> String {
    if node.is_ghost {
        return format!(
            "[N/A]>[N/A](N/A){}: {}",
            node.node_name,
            visible_whitespace(node.raw())
        );
    }
    let label = first_non_empty([Some(node.node_name)], node.node_type.as_str());
    token_debug(&node.token, label)
}

fn attribute_debug(attr: &Attribute<'_>) -> Vec<String> {
    let label = first_non_empty([attr.node_name(), attr.potential_name()], attr.type_tag());
    let mut lines = vec![token_debug(attr.token(), label)];

    if let Attribute::Html(html) = attr {
        let fields = [
            ("bN", Some(&html.spaces_before_name)),
            ("name", Some(&html.name)),
            ("bE", html.spaces_before_equal.as_ref()),
            ("equal", html.equal.as_ref()),
            ("aE", html.spaces_after_equal.as_ref()),
            ("sQ", html.start_quote.as_ref()),
            ("value", html.value.as_ref()),
            ("eQ", html.end_quote.as_ref()),
        ];
        for (label, token) in fields {
            let line = match token {
                Some(token) => token_debug(token, label),
                None => format!("[N/A]>[N/A](N/A){label}: "),
            };
            lines.push(format!("  {line}"));
        }
        lines.push(format!("  isDirective: {}", html.is_directive));
        lines.push(format!("  isDynamicValue: {}", html.is_dynamic_value));
        lines.push(format!("  isInvalid: {}", html.is_invalid));
    }

    if let Some(potential_name) = attr.potential_name() {
        lines.push(format!(
            "  potentialName: {}",
            visible_whitespace(potential_name)
        ));
    }

    lines
}

fn token_debug(token: &Token<'_>, label: &str) -> String {
    format!(
        "[{}:{}]>[{}:{}]({},{}){}: {}",
        token.start_line,
        token.start_col,
        token.end_line,
        token.end_col,
        token.start_offset,
        token.end_offset,
        label,
        visible_whitespace(token.raw)
    )
}

fn first_non_empty<'s, const N: usize>(
    candidates: [Option<&'s str>; N],
    default: &'s str,
) -> &'s str {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or(default)
}

/// Replaces line breaks, tabs and other whitespace with visible glyphs.
///
/// The glyphs are not whitespace themselves, so the result never gets
/// escaped twice.
pub fn visible_whitespace(s: &str) -> String {
    s.chars()
        .map(|ch| match ch {
            '\n' => LINE_BREAK_GLYPH,
            '\t' => TAB_GLYPH,
            ch if is_ecma_whitespace(ch) => SPACE_GLYPH,
            ch => ch,
        })
        .collect()
}

/// The whitespace set of ECMAScript `\s`, which debug fixtures are written
/// against. Unlike `char::is_whitespace` it includes U+FEFF and excludes
/// U+0085.
fn is_ecma_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'..='\u{000D}'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
