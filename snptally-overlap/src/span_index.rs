use snptally_core::models::AlignedSpan;

/// Assumed maximum span length used to bound the binary-search narrowing.
///
/// The left edge of the scan window only moves past a midpoint whose end lies
/// more than this many bases before the query coordinate. A span longer than
/// this that starts left of such a midpoint can be skipped entirely. Typical
/// short-read spans are far below this bound; the value matches the original
/// tally algorithm.
pub const SPAN_LOOKAHEAD: u32 = 500;

/// A per-sample set of aligned-read spans, sorted by start coordinate, with
/// approximate binary-search lookup of the spans covering a coordinate.
///
/// One `SpanIndex` exists per sample at a time; it is rebuilt whenever the
/// active reference sequence changes and is read-only while coordinates are
/// being tallied, so it can be shared freely across worker threads.
#[derive(Debug, Default, Clone)]
pub struct SpanIndex {
    spans: Vec<AlignedSpan>,
}

impl SpanIndex {
    /// Create a new `SpanIndex` from a vector of spans. The vector is
    /// immediately sorted by start; the sort is stable, so spans sharing a
    /// start keep their insertion order.
    pub fn build(mut spans: Vec<AlignedSpan>) -> Self {
        spans.sort_by_key(|span| span.start());
        SpanIndex { spans }
    }

    /// Number of spans in the index.
    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Iterate over all spans in start order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, AlignedSpan> {
        self.spans.iter()
    }

    /// Find the spans covering `coord`, excluding spans whose edge lies
    /// within `edge_buffer` bases of the coordinate.
    ///
    /// The window narrowing is heuristic: it assumes no span extends more
    /// than [`SPAN_LOOKAHEAD`] bases past a probed midpoint. Under that
    /// assumption the result is exactly the set of spans satisfying
    /// `start + edge_buffer <= coord <= end - edge_buffer`; a pathological
    /// span longer than the lookahead can be missed.
    #[inline]
    pub fn find(&self, coord: u32, edge_buffer: u32) -> IterCover<'_> {
        let (lo, hi) = self.narrow(coord);
        IterCover {
            spans: &self.spans,
            off: lo,
            last: hi,
            coord,
            edge_buffer,
        }
    }

    /// Shrink the scan window around `coord` by repeated midpoint probes.
    ///
    /// A midpoint starting past the coordinate bounds the window on the
    /// right (nothing after it can cover, since starts are sorted). A
    /// midpoint ending more than `SPAN_LOOKAHEAD` before the coordinate
    /// bounds it on the left — the heuristic step. Returns an inclusive
    /// `(lo, hi)` window; `hi < lo` means nothing can cover.
    fn narrow(&self, coord: u32) -> (i64, i64) {
        let coord = i64::from(coord);
        let mut lo: i64 = 0;
        let mut hi: i64 = self.spans.len() as i64 - 1;
        let mut changed = true;
        while changed && lo < hi {
            changed = false;
            let mid = lo + (hi - lo) / 2;
            let span = &self.spans[mid as usize];
            if i64::from(span.start()) > coord {
                changed = true;
                hi = mid - 1;
            } else if i64::from(span.end()) + i64::from(SPAN_LOOKAHEAD) < coord {
                changed = true;
                lo = mid + 1;
            }
        }
        (lo, hi)
    }
}

impl<'a> IntoIterator for &'a SpanIndex {
    type Item = &'a AlignedSpan;
    type IntoIter = std::slice::Iter<'a, AlignedSpan>;

    fn into_iter(self) -> std::slice::Iter<'a, AlignedSpan> {
        self.spans.iter()
    }
}

/// Iterator over the spans in a [`SpanIndex`] that cover a query coordinate.
///
/// Created by [`SpanIndex::find`]. Scans forward from the narrowed window's
/// left edge and stops at the first span starting past the coordinate, since
/// no later span can cover it.
#[derive(Debug)]
pub struct IterCover<'a> {
    spans: &'a [AlignedSpan],
    off: i64,
    last: i64,
    coord: u32,
    edge_buffer: u32,
}

impl<'a> Iterator for IterCover<'a> {
    type Item = &'a AlignedSpan;

    fn next(&mut self) -> Option<Self::Item> {
        while self.off <= self.last {
            let span = &self.spans[self.off as usize];
            self.off += 1;
            if span.start() > self.coord {
                return None;
            }
            if span.covers(self.coord, self.edge_buffer) {
                return Some(span);
            }
        }
        None
    }
}
