//! Streaming driver: read lines, classify, write first-seen lines.
//!
//! Each line moves through `Reading -> (Blank | Excluded | Duplicate | Emit)`
//! before the next one is read. Output keeps input order. A read or write
//! error ends the run; lines already written are flushed and stay written.

mod stream;
mod stats;

pub use stream::{open_input, open_output, READ_BUFFER_BYTES, WRITE_BUFFER_BYTES};
pub use stats::RunStats;

use std::io::{BufRead, BufWriter, Write};

use crate::config::NormalizeConfig;
use crate::error::DedupeError;
use crate::normalize::{canonical_key, Exclusion};
use crate::seen::{LockedSeenSet, SeenSet};

/// What happened to one input record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Empty or whitespace-only; dedup state untouched.
    Blank,
    /// Dropped by the parser or a filter.
    Excluded(Exclusion),
    /// Its key was seen earlier in the run.
    Duplicate,
    /// First line with this key; written to the output.
    Emit,
}

/// Applies one [`NormalizeConfig`] and one [`SeenSet`] to a stream of lines.
pub struct Deduper<'a, S: SeenSet + ?Sized> {
    config: &'a NormalizeConfig,
    seen: &'a S,
}

impl<'a, S: SeenSet + ?Sized> Deduper<'a, S> {
    pub fn new(config: &'a NormalizeConfig, seen: &'a S) -> Self {
        Self { config, seen }
    }

    /// Classify a single raw line and record its key if it is new.
    pub fn classify(&self, line: &str) -> LineOutcome {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineOutcome::Blank;
        }
        match canonical_key(trimmed, self.config) {
            Err(reason) => {
                tracing::trace!(line = trimmed, ?reason, "excluded");
                LineOutcome::Excluded(reason)
            }
            Ok(key) if self.seen.should_include(&key) => LineOutcome::Emit,
            Ok(key) => {
                tracing::trace!(line = trimmed, key = %key, "duplicate");
                LineOutcome::Duplicate
            }
        }
    }

    /// Process `reader` to the end, writing each first-seen line (trimmed) plus
    /// `\n` to `writer`.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        writer: W,
    ) -> Result<RunStats, DedupeError> {
        let mut out = BufWriter::with_capacity(WRITE_BUFFER_BYTES, writer);
        let mut stats = RunStats::default();
        let mut buf = Vec::with_capacity(4096);

        let outcome = loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break Ok(()),
                Ok(_) => {}
                Err(e) => break Err(DedupeError::Read(e)),
            }

            let outcome = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let outcome = self.classify(line);
                    if outcome == LineOutcome::Emit {
                        if let Err(e) = writeln!(out, "{}", line.trim()) {
                            break Err(DedupeError::Write(e));
                        }
                    }
                    outcome
                }
                Err(_) => {
                    tracing::trace!("excluded non-UTF-8 line");
                    LineOutcome::Excluded(Exclusion::Unparseable)
                }
            };
            stats.record(&outcome);
        };

        let flushed = out.flush().map_err(DedupeError::Write);
        outcome?;
        flushed?;

        tracing::info!(
            lines = stats.lines,
            emitted = stats.emitted,
            duplicates = stats.duplicates,
            excluded = stats.excluded(),
            blank = stats.blank,
            "dedupe run finished"
        );
        Ok(stats)
    }
}

/// Run one pass over `reader` with a fresh [`LockedSeenSet`].
pub fn dedupe_stream<R: BufRead, W: Write>(
    config: &NormalizeConfig,
    reader: R,
    writer: W,
) -> Result<RunStats, DedupeError> {
    let seen = LockedSeenSet::new();
    Deduper::new(config, &seen).run(reader, writer)
}
