use indexmap::IndexMap;

use crate::parser::{leading_whitespace, Block, Markers, SourceDocument};

const DEFAULT_STEP: &str = "  ";

/// Replacement text for one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteResult {
    Unchanged(Vec<String>),
    Replaced(Vec<String>),
}

impl RewriteResult {
    pub fn unchanged(doc: &SourceDocument<'_>, block: &Block) -> Self {
        let mut lines = Vec::with_capacity(block.line_count());
        lines.extend((block.start..=block.end).map(|i| doc.line(i).to_string()));
        RewriteResult::Unchanged(lines)
    }

    pub fn is_replaced(&self) -> bool {
        matches!(self, RewriteResult::Replaced(_))
    }

    pub fn into_lines(self) -> Vec<String> {
        match self {
            RewriteResult::Unchanged(lines) | RewriteResult::Replaced(lines) => lines,
        }
    }
}

/// Indentation for the `return` line and the extra step for field lines.
///
/// Taken from the initializer line when it is nested under the start line,
/// otherwise one default step below the start line.
fn body_indent(doc: &SourceDocument<'_>, block: &Block) -> (String, String) {
    let inner = leading_whitespace(doc.line(block.initializer()));
    match inner.strip_prefix(block.indent.as_str()) {
        Some(step) if !step.is_empty() => (inner.to_string(), step.to_string()),
        _ => (format!("{}{}", block.indent, DEFAULT_STEP), DEFAULT_STEP.to_string()),
    }
}

/// Build the `copyWith` form of a block.
///
/// The start and closing lines are kept as they are. Every field line ends
/// with a comma, the last one included. An empty field set leaves the block
/// untouched rather than emitting a call with no arguments.
pub fn emit_block(
    doc: &SourceDocument<'_>,
    block: &Block,
    fields: &IndexMap<String, String>,
    markers: &Markers,
) -> RewriteResult {
    if fields.is_empty() {
        return RewriteResult::unchanged(doc, block);
    }

    let header = doc.line(block.start);
    let eol = if header.ends_with('\r') { "\r" } else { "" };
    let (inner, step) = body_indent(doc, block);

    let mut lines = Vec::with_capacity(fields.len() + 4);
    lines.push(header.to_string());
    lines.push(format!("{}return {}{}", inner, markers.builder_call(), eol));
    for (name, expression) in fields {
        lines.push(format!("{}{}{}: {},{}", inner, step, name, expression, eol));
    }
    lines.push(format!("{});{}", inner, eol));
    lines.push(doc.line(block.end).to_string());

    RewriteResult::Replaced(lines)
}
