use serde::Serialize;

/// Tallies for one rewrite pass, returned to the caller instead of kept in
/// globals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteReport {
    pub blocks_found: usize,
    pub blocks_converted: usize,
    /// Every assignment was redundant; block kept verbatim.
    pub blocks_unchanged: usize,
    /// Kept verbatim by strict mode.
    pub blocks_rejected: usize,
    pub blocks_malformed: usize,
    pub fields_dropped_redundant: usize,
    pub lines_skipped: usize,
    /// `state.copyWith(` occurrences in the output.
    pub builder_calls: usize,
    /// Initializer-marker occurrences in the output.
    pub legacy_remaining: usize,
}

impl RewriteReport {
    pub fn is_complete(&self) -> bool {
        self.legacy_remaining == 0
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
