pub mod snp_coords;
pub mod span;
pub mod tally;

// re-export for cleaner imports
pub use self::snp_coords::SnpCoordMap;
pub use self::span::AlignedSpan;
pub use self::tally::{BASE_CHARS, BaseTally, base_index};
