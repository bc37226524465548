use std::ops::Range;

/// The input document as an ordered sequence of lines.
///
/// Lines are split on `\n` only, so a trailing newline shows up as a final
/// empty line and `render` gives back the exact input.
#[derive(Debug, Clone)]
pub struct SourceDocument<'a> {
    pub lines: Vec<&'a str>,
}

impl<'a> SourceDocument<'a> {
    pub fn parse(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> &'a str {
        self.lines[index]
    }
}

/// Join output lines back into a document.
pub fn render(lines: &[String]) -> String {
    lines.join("\n")
}

/// Leading spaces/tabs of a line, verbatim.
pub fn leading_whitespace(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

/// One recognized legacy block. All indices point into the `SourceDocument`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Line holding the start marker.
    pub start: usize,
    /// Line holding the closing marker (inclusive).
    pub end: usize,
    /// Whitespace prefix of the start line.
    pub indent: String,
    /// Lines between the initializer and the terminator.
    pub body: Range<usize>,
}

impl Block {
    pub fn initializer(&self) -> usize {
        self.start + 1
    }

    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// End of document reached before the terminator.
    Unterminated,
    /// Terminator found but the next line is not the closing marker.
    MissingClosing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedBlock {
    pub start: usize,
    pub reason: MalformedReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanItem {
    Passthrough(usize),
    Block(Block),
}

/// Output of scanning: passthrough lines and blocks in document order.
#[derive(Debug, Default)]
pub struct ScanOutput {
    pub items: Vec<ScanItem>,
    pub malformed: Vec<MalformedBlock>,
}

impl ScanOutput {
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.items.iter().filter_map(|item| match item {
            ScanItem::Block(block) => Some(block),
            ScanItem::Passthrough(_) => None,
        })
    }
}

/// A body line that is not a simple single-line field assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line_no: usize,
    pub text: String,
}
