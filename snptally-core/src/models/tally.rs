/// Tally slot order, matching the output column order.
pub const BASE_CHARS: [char; 4] = ['A', 'T', 'C', 'G'];

/// Map a base byte to its tally slot: 0 = A, 1 = T, 2 = C, 3 = G.
#[inline]
pub fn base_index(base: u8) -> Option<usize> {
    match base {
        b'A' | b'a' => Some(0),
        b'T' | b't' => Some(1),
        b'C' | b'c' => Some(2),
        b'G' | b'g' => Some(3),
        _ => None,
    }
}

/// Per-sample base counts at one candidate coordinate.
///
/// `total` counts every read covering the coordinate, including reads whose
/// byte at the offset is not A/T/C/G (a deletion placeholder, for instance);
/// those contribute to the "other reads" output column but to no base slot.
/// Transient: built fresh per coordinate and discarded once the output row is
/// written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BaseTally {
    pub counts: [u32; 4],
    pub total: u32,
}

impl BaseTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one covering read contributing `base` at the coordinate.
    #[inline]
    pub fn observe(&mut self, base: u8) {
        self.total += 1;
        if let Some(slot) = base_index(base) {
            self.counts[slot] += 1;
        }
    }

    /// Reads covering the coordinate that did not contribute to `slot`.
    #[inline]
    pub fn others(&self, slot: usize) -> u32 {
        self.total - self.counts[slot]
    }
}
