//! The rewrite pass: scan, extract, filter, emit.

mod emitter;
mod filter;
mod report;

pub use emitter::{emit_block, RewriteResult};
pub use filter::{drop_redundant, is_redundant};
pub use report::RewriteReport;

use tracing::{debug, warn};

use crate::parser::{extract_fields, render, scan_blocks, Block, Markers, ScanItem, SourceDocument};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Keep a block verbatim when its body has unparsed lines or assigns a
    /// field twice, instead of dropping the lines and letting the last
    /// assignment win.
    pub strict: bool,
}

/// Rewritten document plus counts.
#[derive(Debug, Clone)]
pub struct Rewrite {
    pub text: String,
    pub report: RewriteReport,
}

impl Rewrite {
    pub fn changed(&self, original: &str) -> bool {
        self.text != original
    }
}

/// Rewrite every legacy block in `text`. Pure: no I/O, no shared state.
pub fn rewrite_document(text: &str, markers: &Markers, options: &RewriteOptions) -> Rewrite {
    let doc = SourceDocument::parse(text);
    let scan = scan_blocks(&doc, markers);

    let mut report = RewriteReport {
        blocks_malformed: scan.malformed.len(),
        ..Default::default()
    };
    let mut out: Vec<String> = Vec::with_capacity(doc.len());

    for item in &scan.items {
        match item {
            ScanItem::Passthrough(index) => out.push(doc.line(*index).to_string()),
            ScanItem::Block(block) => {
                report.blocks_found += 1;
                let result = rewrite_block(&doc, block, markers, options, &mut report);
                out.extend(result.into_lines());
            }
        }
    }

    let text = render(&out);
    report.builder_calls = text.matches(markers.builder_call().as_str()).count();
    report.legacy_remaining = text.matches(markers.initializer.as_str()).count();

    Rewrite { text, report }
}

/// `rewrite_document` with the default markers and options.
pub fn rewrite_source(text: &str) -> Rewrite {
    rewrite_document(text, &Markers::default(), &RewriteOptions::default())
}

fn rewrite_block(
    doc: &SourceDocument<'_>,
    block: &Block,
    markers: &Markers,
    options: &RewriteOptions,
    report: &mut RewriteReport,
) -> RewriteResult {
    let mut extracted = extract_fields(doc, block, markers);
    report.lines_skipped += extracted.skipped.len();

    if options.strict && (!extracted.skipped.is_empty() || !extracted.duplicates.is_empty()) {
        warn!(
            line = block.start + 1,
            skipped = extracted.skipped.len(),
            duplicates = ?extracted.duplicates,
            "strict mode: block kept as is"
        );
        report.blocks_rejected += 1;
        return RewriteResult::unchanged(doc, block);
    }

    report.fields_dropped_redundant += drop_redundant(&mut extracted.fields, markers);

    let result = emit_block(doc, block, &extracted.fields, markers);
    if result.is_replaced() {
        report.blocks_converted += 1;
        debug!(line = block.start + 1, fields = extracted.fields.len(), "block converted");
    } else {
        report.blocks_unchanged += 1;
        debug!(line = block.start + 1, "all assignments redundant, block kept");
    }
    result
}
