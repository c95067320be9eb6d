//! Syntax error reporting.

use goserde_core::TranslateError;
use std::path::Path;
use tree_sitter::Node;

/// Build a parse error for a tree known to contain errors.
///
/// Reports the first `ERROR` or missing node in document order. Line and
/// column are 1-based.
pub(crate) fn locate(root: Node<'_>, source: &str, path: &Path) -> TranslateError {
    let (node, message) = match first_error(root) {
        Some(node) if node.is_missing() => (node, format!("missing `{}`", node.kind())),
        Some(node) => (node, unexpected(node, source)),
        None => (root, "syntax error".to_string()),
    };

    let position = node.start_position();
    TranslateError::Parse {
        path: path.to_path_buf(),
        line: position.row + 1,
        column: position.column + 1,
        message,
    }
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn unexpected(node: Node<'_>, source: &str) -> String {
    let text = source[node.byte_range()].trim();
    match text.lines().next() {
        Some(line) if !line.is_empty() => format!("unexpected `{}`", truncate(line, 40)),
        _ => "syntax error".to_string(),
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
