/// Default output file name.
pub const DEFAULT_OUT: &str = "snpsOut.txt";

/// Default minimum read depth from a sample for a reported SNP.
pub const DEFAULT_MIN_READ_DEPTH: u32 = 5;

/// Default untested buffer at the edges of reads, in bases.
pub const DEFAULT_EDGE_BUFFER: u32 = 5;
