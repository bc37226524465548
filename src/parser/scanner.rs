use tracing::{debug, warn};

use super::markers::Markers;
use super::types::{
    leading_whitespace, Block, MalformedBlock, MalformedReason, ScanItem, ScanOutput,
    SourceDocument,
};

#[derive(Debug, Clone, Copy)]
enum ScanState {
    Scanning,
    InBlock { start: usize },
}

/// Walk the document and split it into passthrough lines and legacy blocks.
///
/// A block opens on a start-marker line immediately followed by an
/// initializer line, and closes on a terminator line immediately followed
/// by a closing line. Blocks do not nest: a start marker seen inside a
/// block is ordinary body text. Lines of a block that never closes
/// properly are handed back as passthrough, so nothing is lost.
pub fn scan_blocks(doc: &SourceDocument<'_>, markers: &Markers) -> ScanOutput {
    let lines = &doc.lines;
    let mut out = ScanOutput::default();
    let mut state = ScanState::Scanning;
    let mut i = 0usize;

    while i < lines.len() {
        match state {
            ScanState::Scanning => {
                let opens = markers.is_start(lines[i])
                    && i + 1 < lines.len()
                    && markers.is_initializer(lines[i + 1]);

                if opens {
                    state = ScanState::InBlock { start: i };
                    i += 2;
                } else {
                    out.items.push(ScanItem::Passthrough(i));
                    i += 1;
                }
            }
            ScanState::InBlock { start } => {
                if !markers.is_terminator(lines[i]) {
                    i += 1;
                    continue;
                }

                if i + 1 < lines.len() && markers.is_closing(lines[i + 1]) {
                    let block = Block {
                        start,
                        end: i + 1,
                        indent: leading_whitespace(lines[start]).to_string(),
                        body: start + 2..i,
                    };
                    debug!(
                        line = start + 1,
                        body_lines = block.body.len(),
                        "found legacy block"
                    );
                    out.items.push(ScanItem::Block(block));
                    i += 2;
                } else {
                    reject(&mut out, start, i + 1, MalformedReason::MissingClosing);
                    i += 1;
                }
                state = ScanState::Scanning;
            }
        }
    }

    if let ScanState::InBlock { start } = state {
        reject(&mut out, start, lines.len(), MalformedReason::Unterminated);
    }

    out
}

/// Emit `start..end` verbatim and record the malformed block.
fn reject(out: &mut ScanOutput, start: usize, end: usize, reason: MalformedReason) {
    warn!(line = start + 1, ?reason, "legacy block left untouched");
    out.items.extend((start..end).map(ScanItem::Passthrough));
    out.malformed.push(MalformedBlock { start, reason });
}
