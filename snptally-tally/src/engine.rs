use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use indicatif::ProgressBar;
use needletail::{FastxReader, parse_fastx_file};
use rayon::prelude::*;

use snptally_core::models::BaseTally;
use snptally_overlap::SpanIndex;

use crate::output::{OutputFormat, SnpWriter};
use crate::sam::load_sample_spans;
use crate::snplist::load_snp_lists;

/// Immutable run configuration, assembled by the CLI layer.
#[derive(Debug, Clone)]
pub struct TallyConfig {
    /// Sample display labels, in output column order.
    pub labels: Vec<String>,
    /// Per-sample SAM alignment files, parallel to `labels`.
    pub sam_paths: Vec<PathBuf>,
    /// Per-sample candidate SNP list files, parallel to `labels`.
    pub snp_paths: Vec<PathBuf>,
    /// Reference sequence file (FASTA or FASTQ, optionally gzip'd).
    pub reference_path: PathBuf,
    /// Output table file.
    pub output_path: PathBuf,
    pub format: OutputFormat,
    /// Minimum read depth from a sample for a reported SNP.
    pub min_read_depth: u32,
    /// Untested buffer at the edges of reads, in bases.
    pub edge_buffer: u32,
    /// Worker threads for the per-sample fan-out; 0 picks the rayon default.
    pub threads: usize,
}

/// Run the full SNP tally across every reference sequence.
///
/// Setup failures (unreadable SNP lists or reference, unwritable output, no
/// candidate coordinates) abort with an error. A sample whose alignments
/// cannot be read is reported and tallied with an empty span set; the run
/// continues.
pub fn tally_snps(config: &TallyConfig) -> Result<()> {
    ensure!(
        config.labels.len() == config.sam_paths.len()
            && config.labels.len() == config.snp_paths.len(),
        "Samples mismatch: {} labels, {} SAM files, {} SNP files",
        config.labels.len(),
        config.sam_paths.len(),
        config.snp_paths.len()
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .context("Failed to build worker thread pool")?;

    let snp_coords = load_snp_lists(&config.snp_paths, config.min_read_depth)?;

    let out_file = File::create(&config.output_path).with_context(|| {
        format!(
            "Unable to open output file {}",
            config.output_path.display()
        )
    })?;
    let mut writer = SnpWriter::new(
        BufWriter::new(out_file),
        config.format,
        &config.labels,
        config.min_read_depth,
    )?;

    let mut reader = parse_fastx_file(&config.reference_path).with_context(|| {
        format!(
            "Unable to open reference sequence file {}",
            config.reference_path.display()
        )
    })?;

    while let Some(record) = reader.next() {
        let record = record.with_context(|| {
            format!(
                "Invalid record in reference sequence file {}",
                config.reference_path.display()
            )
        })?;
        let id_line = String::from_utf8_lossy(record.id()).into_owned();
        let ref_id = id_line.split_whitespace().next().unwrap_or("").to_string();
        let Some(coords) = snp_coords.coords_for(&ref_id) else {
            continue;
        };
        let ref_seq = record.seq();

        println!("Working on {} (length = {})...", ref_id, ref_seq.len());

        // Rebuild every sample's span set for this reference, one task per
        // sample. A failed sample keeps an empty set.
        let span_sets: Vec<SpanIndex> = pool.install(|| {
            config
                .sam_paths
                .par_iter()
                .zip(config.labels.par_iter())
                .map(|(sam_path, label)| match load_sample_spans(sam_path, &ref_id) {
                    Ok(index) => {
                        println!(
                            "Loaded {} read spans aligned to {} from {}",
                            index.len(),
                            ref_id,
                            label
                        );
                        index
                    }
                    Err(err) => {
                        eprintln!(
                            "Unable to read SAM file {} for {}: {}",
                            sam_path.display(),
                            label,
                            err
                        );
                        SpanIndex::default()
                    }
                })
                .collect()
        });

        let bar = ProgressBar::new(coords.len() as u64);
        let mut printed = 0usize;
        for &coord in coords {
            // Per-sample tallies run concurrently over the read-only span
            // sets; the merge and write below stay on this task.
            let tallies: Vec<BaseTally> = pool.install(|| {
                span_sets
                    .par_iter()
                    .map(|spans| tally_bases(coord, spans, config.edge_buffer))
                    .collect()
            });
            let ref_base = ref_seq.get(coord as usize).copied();
            if writer.report(&ref_id, coord, ref_base, &tallies)? {
                printed += 1;
            }
            bar.inc(1);
        }
        bar.finish_and_clear();
        println!("Output SNPs at {} coords on {}", printed, ref_id);
    }

    writer.flush()?;
    Ok(())
}

/// Tally the bases one sample's spans contribute at one coordinate.
fn tally_bases(coord: u32, spans: &SpanIndex, edge_buffer: u32) -> BaseTally {
    let mut tally = BaseTally::new();
    for span in spans.find(coord, edge_buffer) {
        if let Some(base) = span.base_at(coord) {
            tally.observe(base);
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use snptally_core::models::AlignedSpan;

    #[rstest]
    fn test_tally_bases_counts_covering_spans() {
        let index = SpanIndex::build(vec![
            AlignedSpan::new("ACGTACGTAC".to_string(), 0), // [0, 9]
            AlignedSpan::new("AC TACGTAC".to_string(), 0), // deletion at coord 2
            AlignedSpan::new("TTTT".to_string(), 2),       // [2, 5]
        ]);

        let tally = tally_bases(2, &index, 0);
        // G from the first span, placeholder from the second, T from the third
        assert_eq!(tally.total, 3);
        assert_eq!(tally.counts, [0, 1, 0, 1]);

        let tally = tally_bases(2, &index, 1);
        // the edge buffer drops the span starting at 2
        assert_eq!(tally.total, 2);
        assert_eq!(tally.counts, [0, 0, 0, 1]);
    }
}
