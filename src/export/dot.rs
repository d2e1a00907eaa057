//! DOT (Graphviz) export
//!
//! Every transition contributes three statements: its source node, its
//! dest node and the labeled edge between them. Nodes are declared again
//! for every edge that touches them, which DOT accepts.

use crate::state_machine::TransitionTable;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

static BARE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_[^\x00-\x7F]][A-Za-z0-9_[^\x00-\x7F]]*$").expect("valid id regex")
});

static NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(\.[0-9]+|[0-9]+(\.[0-9]*)?)$").expect("valid numeral regex")
});

/// Quote `id` for use as a DOT identifier or attribute value.
///
/// Plain identifiers and numerals pass through untouched. Everything else,
/// including keywords and the empty string, becomes a double-quoted string
/// with `\` and `"` escaped, line breaks written as `\n` and a lone
/// carriage return written as `\r`.
pub fn quote_id(id: &str) -> Cow<'_, str> {
    let is_keyword = KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(id));
    if !is_keyword && (BARE_ID.is_match(id) || NUMERAL.is_match(id)) {
        return Cow::Borrowed(id);
    }

    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    let mut chars = id.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            // CRLF is a single line break
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' => quoted.push_str("\\r"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

/// Render `table` as a DOT digraph
pub fn to_dot(table: &TransitionTable) -> String {
    let mut dot = "digraph {\n".to_string();

    for transition in table {
        let source = quote_id(transition.source());
        let dest = quote_id(transition.dest());
        let label = transition.display_label();

        dot.push_str(&format!("\t{}\n", source));
        dot.push_str(&format!("\t{}\n", dest));
        dot.push_str(&format!(
            "\t{} -> {} [label={}]\n",
            source,
            dest,
            quote_id(&label)
        ));
    }

    dot.push_str("}\n");
    dot
}
