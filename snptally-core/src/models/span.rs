use std::cmp::Ordering;

/// One contiguous reference interval covered by (part of) an aligned read.
///
/// `start` and `end` are 0-based and inclusive. `sequence` holds the read
/// bases laid over that interval; deleted reference positions are padded with
/// a space so that `sequence.len() == end - start + 1` always holds and the
/// byte for a coordinate can be found at `coord - start`.
///
/// Spans are immutable once built and are owned by the per-sample span set
/// that created them.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct AlignedSpan {
    sequence: String,
    start: u32,
    end: u32,
}

impl AlignedSpan {
    /// Build a span starting at `start`; the end is derived from the sequence
    /// length so the length invariant holds by construction.
    ///
    /// # Panics
    ///
    /// Panics if `sequence` is empty — an empty span has no valid `end`.
    pub fn new(sequence: String, start: u32) -> Self {
        assert!(!sequence.is_empty(), "AlignedSpan requires a non-empty sequence");
        let end = start + sequence.len() as u32 - 1;
        AlignedSpan {
            sequence,
            start,
            end,
        }
    }

    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    #[inline]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Number of reference positions this span covers.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Whether `coord` is covered by this span, excluding positions within
    /// `edge_buffer` bases of either end of the span.
    #[inline]
    pub fn covers(&self, coord: u32, edge_buffer: u32) -> bool {
        let coord = u64::from(coord);
        u64::from(self.start) + u64::from(edge_buffer) <= coord
            && coord + u64::from(edge_buffer) <= u64::from(self.end)
    }

    /// The read byte laid over reference coordinate `coord`, or `None` when
    /// the coordinate falls outside the span. A deleted position yields the
    /// space placeholder.
    #[inline]
    pub fn base_at(&self, coord: u32) -> Option<u8> {
        if coord < self.start || coord > self.end {
            return None;
        }
        Some(self.sequence.as_bytes()[(coord - self.start) as usize])
    }
}

// Ordering is by start only; ties are not semantically significant and keep
// insertion order under a stable sort.
impl Ord for AlignedSpan {
    #[inline]
    fn cmp(&self, other: &AlignedSpan) -> Ordering {
        self.start.cmp(&other.start)
    }
}

impl PartialOrd for AlignedSpan {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
