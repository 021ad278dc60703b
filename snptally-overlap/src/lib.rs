//! Coordinate-overlap queries over per-sample aligned-read spans.
//!
//! This crate provides the ordered span container the tally engine queries
//! once per candidate SNP coordinate. The container keeps spans sorted by
//! start and answers "which spans cover coordinate c" with a bounded
//! binary-search narrowing step followed by a short linear scan.
//!
//! All overlap computation logic should live here. The tally engine wraps
//! this functionality but should not reimplement the search.
//!
//! ## Quick Start
//!
//! ```rust
//! use snptally_core::models::AlignedSpan;
//! use snptally_overlap::SpanIndex;
//!
//! let spans = vec![
//!     AlignedSpan::new("ACGTACGTAC".to_string(), 100),
//!     AlignedSpan::new("TTTTTTTTTT".to_string(), 104),
//! ];
//! let index = SpanIndex::build(spans);
//!
//! // both spans cover coordinate 105
//! assert_eq!(index.find(105, 0).count(), 2);
//!
//! // an edge buffer excludes calls near span ends
//! assert_eq!(index.find(105, 3).count(), 1);
//! ```
//!
//! ## A note on exactness
//!
//! The narrowing step assumes no span is longer than [`SPAN_LOOKAHEAD`]
//! bases. Spans longer than that can be skipped by the left-edge shrink; see
//! [`SpanIndex::find`] for details. This mirrors the long-standing behavior
//! of the tally algorithm and is pinned by tests rather than corrected.

pub mod span_index;

// re-exports
pub use self::span_index::{IterCover, SPAN_LOOKAHEAD, SpanIndex};
