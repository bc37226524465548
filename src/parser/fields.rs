use indexmap::IndexMap;
use tracing::{debug, warn};

use super::markers::{is_identifier, Markers};
use super::types::{Block, SkippedLine, SourceDocument};

/// Field assignments read from one block body.
#[derive(Debug, Default, Clone)]
pub struct ExtractedFields {
    /// name -> expression, in first-appearance order; a re-assigned name
    /// keeps its position and takes the later expression.
    pub fields: IndexMap<String, String>,
    pub skipped: Vec<SkippedLine>,
    /// Names assigned more than once, once per extra assignment.
    pub duplicates: Vec<String>,
}

/// Cut a trailing `//` comment that is not inside a string literal.
pub fn strip_line_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut prev = '\0';

    for (i, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            prev = ch;
            continue;
        }
        match quote {
            Some(q) => {
                if ch == '\\' {
                    escaped = true;
                } else if ch == q {
                    quote = None;
                }
            }
            None => {
                if ch == '\'' || ch == '"' {
                    quote = Some(ch);
                } else if ch == '/' && prev == '/' {
                    return &line[..i - 1];
                }
            }
        }
        prev = ch;
    }
    line
}

/// Parse `assignee.name = expression;` and return `(name, expression)`.
///
/// Only single-line, plain assignments are recognized: compound operators,
/// nested member paths and lines without the trailing `;` are rejected.
/// A `//` comment after the statement is ignored.
pub fn parse_assignment<'l>(line: &'l str, assignee: &str) -> Option<(&'l str, &'l str)> {
    let rest = strip_line_comment(line)
        .trim()
        .strip_prefix(assignee)?
        .strip_prefix('.')?;
    let eq_pos = rest.find('=')?;

    let name = rest[..eq_pos].trim();
    if !is_identifier(name) {
        return None;
    }

    let value = &rest[eq_pos + 1..];
    if value.starts_with('=') {
        return None;
    }

    let expression = value.trim().strip_suffix(';')?.trim();
    if expression.is_empty() {
        return None;
    }
    Some((name, expression))
}

fn is_ignorable(line: &str) -> bool {
    let t = line.trim();
    t.is_empty() || t.starts_with("//")
}

pub fn extract_fields(doc: &SourceDocument<'_>, block: &Block, markers: &Markers) -> ExtractedFields {
    let mut out = ExtractedFields::default();

    for index in block.body.clone() {
        let line = doc.line(index);

        match parse_assignment(line, &markers.assignee) {
            Some((name, expression)) => {
                if out
                    .fields
                    .insert(name.to_string(), expression.to_string())
                    .is_some()
                {
                    debug!(line = index + 1, field = name, "field assigned again, last value wins");
                    out.duplicates.push(name.to_string());
                }
            }
            None if is_ignorable(line) => {}
            None => {
                warn!(line = index + 1, text = line.trim(), "body line is not a field assignment, dropped");
                out.skipped.push(SkippedLine {
                    line_no: index + 1,
                    text: line.trim().to_string(),
                });
            }
        }
    }

    out
}
