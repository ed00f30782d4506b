use crate::normalize::Exclusion;

use super::LineOutcome;

/// Per-run counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Records read, including blank ones.
    pub lines: u64,
    pub blank: u64,
    pub unparseable: u64,
    pub extension_filtered: u64,
    pub similar_filtered: u64,
    pub no_query: u64,
    pub duplicates: u64,
    pub emitted: u64,
}

impl RunStats {
    pub(super) fn record(&mut self, outcome: &LineOutcome) {
        self.lines += 1;
        let counter = match outcome {
            LineOutcome::Blank => &mut self.blank,
            LineOutcome::Excluded(Exclusion::Unparseable) => &mut self.unparseable,
            LineOutcome::Excluded(Exclusion::Extension) => &mut self.extension_filtered,
            LineOutcome::Excluded(Exclusion::Similar) => &mut self.similar_filtered,
            LineOutcome::Excluded(Exclusion::NoQuery) => &mut self.no_query,
            LineOutcome::Duplicate => &mut self.duplicates,
            LineOutcome::Emit => &mut self.emitted,
        };
        *counter += 1;
    }

    /// Lines dropped by the parser or any filter.
    pub fn excluded(&self) -> u64 {
        self.unparseable + self.extension_filtered + self.similar_filtered + self.no_query
    }
}
