use clap::{Arg, Command};

pub const TALLY_CMD: &str = "tally";

pub fn create_tally_cli() -> Command {
    Command::new(TALLY_CMD)
        .about("Tally read bases at candidate SNP coordinates, one output column group per sample")
        .arg_required_else_help(true)
        .arg(
            Arg::new("samples")
                .long("samples")
                .short('i')
                .value_name("FILE")
                .help("Samples manifest: one tab-separated row per sample of label, SAM file, SNP list file")
                .required(true),
        )
        .arg(
            Arg::new("reference")
                .long("reference")
                .short('r')
                .value_name("FILE")
                .help("Reference sequences in FASTA or FASTQ, optionally gzipped")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Output table file (default: snpsOut.txt)"),
        )
        .arg(
            Arg::new("depth")
                .long("min-depth")
                .short('d')
                .value_name("NUMBER")
                .value_parser(clap::value_parser!(u32))
                .help("Minimum read depth from a sample for a reported SNP (default: 5)"),
        )
        .arg(
            Arg::new("edge")
                .long("edge-buffer")
                .short('e')
                .value_name("NUMBER")
                .value_parser(clap::value_parser!(u32))
                .help("Untested buffer at the edges of reads, in bases (default: 5)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Output table shape: variant/1, allele/2 or position/3 (default: variant)"),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .short('t')
                .value_name("NUMBER")
                .value_parser(clap::value_parser!(usize))
                .help("Worker threads for per-sample tallying (default: all cores)"),
        )
}
