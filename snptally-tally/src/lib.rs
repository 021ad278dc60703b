//! SNP tallying over per-sample SAM alignments.
//!
//! Given a FASTA reference, per-sample SAM alignment files and per-sample
//! candidate SNP lists, this crate confirms and quantifies candidate SNPs:
//! for every candidate coordinate it counts, per sample, how many aligned
//! reads contribute each base, and writes one tabular row per reportable
//! variant (or allele, or position, depending on the output format).
//!
//! The pipeline is gated per reference sequence: all samples' read spans are
//! (re)loaded in parallel for the current reference, then the sorted
//! candidate coordinates are tallied one at a time, fanning the per-sample
//! counting out across a rayon pool and merging serially into the single
//! output stream.

pub mod cigar;
pub mod consts;
pub mod engine;
pub mod errors;
pub mod output;
pub mod sam;
pub mod snplist;

// re-exports
pub use cigar::spans_from_alignment;
pub use engine::{TallyConfig, tally_snps};
pub use errors::TallyError;
pub use output::{OutputFormat, SnpWriter};
pub use sam::load_sample_spans;
pub use snplist::load_snp_lists;
