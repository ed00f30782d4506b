//! Core engine for `dedupe`: URL normalization, filter predicates, the
//! seen-key set and the streaming driver that ties them together.

pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod normalize;
pub mod pipeline;
pub mod seen;

pub use config::{DedupeConfig, NormalizeConfig};
pub use error::DedupeError;
pub use normalize::{canonical_key, normalize, Exclusion};
pub use pipeline::{dedupe_stream, Deduper, LineOutcome, RunStats};
pub use seen::{LockedSeenSet, SeenSet, ShardedSeenSet};
