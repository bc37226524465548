mod fields;
mod markers;
mod scanner;
mod types;

pub use fields::{extract_fields, parse_assignment, strip_line_comment, ExtractedFields};
pub use markers::{is_identifier, Markers};
pub use scanner::scan_blocks;
pub use types::{
    leading_whitespace, render, Block, MalformedBlock, MalformedReason, ScanItem, ScanOutput,
    SkippedLine, SourceDocument,
};
