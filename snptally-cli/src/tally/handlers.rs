use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Result;
use clap::ArgMatches;

use snptally_tally::consts::{DEFAULT_EDGE_BUFFER, DEFAULT_MIN_READ_DEPTH, DEFAULT_OUT};
use snptally_tally::{OutputFormat, TallyConfig, tally_snps};

use crate::samples::SampleSheet;

pub fn run_tally(matches: &ArgMatches) -> Result<()> {
    let samples_file = matches
        .get_one::<String>("samples")
        .expect("A path to a samples manifest is required.");

    let reference = matches
        .get_one::<String>("reference")
        .expect("A path to a reference sequence file is required.");

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let min_read_depth = *matches
        .get_one::<u32>("depth")
        .unwrap_or(&DEFAULT_MIN_READ_DEPTH);

    let edge_buffer = *matches
        .get_one::<u32>("edge")
        .unwrap_or(&DEFAULT_EDGE_BUFFER);

    let default_format = "variant".to_string();
    let format = OutputFormat::from_str(
        matches.get_one::<String>("format").unwrap_or(&default_format),
    )?;

    let threads = *matches.get_one::<usize>("threads").unwrap_or(&0);

    let sheet = SampleSheet::from_file(Path::new(samples_file))?;

    let config = TallyConfig {
        labels: sheet.labels,
        sam_paths: sheet.sam_paths,
        snp_paths: sheet.snp_paths,
        reference_path: PathBuf::from(reference),
        output_path: PathBuf::from(output),
        format,
        min_read_depth,
        edge_buffer,
        threads,
    };

    tally_snps(&config)
}
