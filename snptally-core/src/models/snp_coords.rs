use std::collections::{BTreeMap, BTreeSet};

/// Candidate SNP coordinates grouped per reference sequence id.
///
/// Coordinates are 0-based, ascending and duplicate-free within a reference.
/// The map is populated once from the per-sample SNP list files and lives for
/// the whole run.
#[derive(Debug, Default, Clone)]
pub struct SnpCoordMap {
    by_ref: BTreeMap<String, BTreeSet<u32>>,
}

impl SnpCoordMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ref_id: &str, coord: u32) {
        self.by_ref
            .entry(ref_id.to_string())
            .or_default()
            .insert(coord);
    }

    /// Ascending candidate coordinates for one reference, if any were loaded.
    pub fn coords_for(&self, ref_id: &str) -> Option<&BTreeSet<u32>> {
        self.by_ref.get(ref_id)
    }

    pub fn num_references(&self) -> usize {
        self.by_ref.len()
    }

    pub fn num_coords(&self) -> usize {
        self.by_ref.values().map(|coords| coords.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ref.is_empty()
    }
}
