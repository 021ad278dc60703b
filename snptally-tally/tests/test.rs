use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use rstest::*;

use snptally_tally::{OutputFormat, TallyConfig, tally_snps};

fn sam_line(read_id: &str, ref_id: &str, pos: u32, cigar: &str, seq: &str) -> String {
    format!(
        "{read_id}\t0\t{ref_id}\t{pos}\t60\t{cigar}\t*\t0\t0\t{seq}\t{}\n",
        "I".repeat(seq.len())
    )
}

fn snp_row(ref_id: &str, coord: u32, supporting: u32) -> String {
    format!(
        "1,\"SNP\",\"exp\",\"{ref_id}\",{coord},{coord},1,\"+\",43,0.003621,3,{supporting},\"C\",0,0,0,1,0,0.035157,144,3,0,0\n"
    )
}

fn write_gz(path: &Path, content: &str) {
    let file = fs::File::create(path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

struct Fixture {
    _dir: tempfile::TempDir,
    config: TallyConfig,
}

/// One reference, one sample: a single 10M read carrying a G over the
/// reference C at coordinate 9. The minimal reportable scenario.
#[fixture]
fn single_sample() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();

    fs::write(root.join("ref.fa"), ">ref1 test reference\nACGTACGTAC\n").unwrap();
    fs::write(
        root.join("s1.sam"),
        sam_line("read1", "ref1", 1, "10M", "ACGTACGTAG"),
    )
    .unwrap();
    fs::write(root.join("s1.csv"), snp_row("ref1", 9, 3)).unwrap();

    let config = TallyConfig {
        labels: vec!["s1".to_string()],
        sam_paths: vec![root.join("s1.sam")],
        snp_paths: vec![root.join("s1.csv")],
        reference_path: root.join("ref.fa"),
        output_path: root.join("out.txt"),
        format: OutputFormat::PerVariant,
        min_read_depth: 1,
        edge_buffer: 0,
        threads: 2,
    };
    Fixture { _dir: dir, config }
}

#[rstest]
fn test_end_to_end_per_variant(single_sample: Fixture) {
    tally_snps(&single_sample.config).unwrap();

    let output = fs::read_to_string(&single_sample.config.output_path).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "RefID\tSNPCoord\tRefBase\tSNPBase\ts1.snpRds\ts1.otherRds",
            "ref1\t9\tC\tG\t1\t0",
        ]
    );
}

#[rstest]
fn test_runs_are_byte_identical(single_sample: Fixture) {
    tally_snps(&single_sample.config).unwrap();
    let first = fs::read(&single_sample.config.output_path).unwrap();

    tally_snps(&single_sample.config).unwrap();
    let second = fs::read(&single_sample.config.output_path).unwrap();

    assert_eq!(first, second);
}

#[rstest]
fn test_edge_buffer_suppresses_read_end_calls(mut single_sample: Fixture) {
    // coordinate 9 is the last base of the only read; any buffer hides it
    single_sample.config.edge_buffer = 1;
    tally_snps(&single_sample.config).unwrap();

    let output = fs::read_to_string(&single_sample.config.output_path).unwrap();
    assert_eq!(output.lines().count(), 1); // header only
}

#[rstest]
fn test_zero_candidates_is_fatal(mut single_sample: Fixture) {
    single_sample.config.min_read_depth = 50;
    assert!(tally_snps(&single_sample.config).is_err());
}

#[rstest]
fn test_unreadable_sample_is_recovered(mut single_sample: Fixture) {
    single_sample.config.sam_paths = vec![PathBuf::from("/nonexistent/sample.sam")];
    tally_snps(&single_sample.config).unwrap();

    let output = fs::read_to_string(&single_sample.config.output_path).unwrap();
    assert_eq!(output.lines().count(), 1); // header only, exit clean
}

/// Two references, two samples, gzip'd inputs, all three output formats.
#[fixture]
fn two_samples() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();

    write_gz(
        &root.join("ref.fa.gz"),
        ">chrA first\nAAAAAAAAAA\n>chrB second\nCCCCCCCCCC\n",
    );

    // sample one: three T-carrying reads over chrA coord 4, one reference read
    let mut sam1 = String::new();
    for i in 0..3 {
        sam1.push_str(&sam_line(&format!("r{i}"), "chrA", 1, "10M", "AAAATAAAAA"));
    }
    sam1.push_str(&sam_line("r3", "chrA", 1, "10M", "AAAAAAAAAA"));
    write_gz(&root.join("s1.sam.gz"), &sam1);

    // sample two: reads over both references, G at chrB coord 5
    let mut sam2 = String::new();
    sam2.push_str(&sam_line("r4", "chrA", 1, "10M", "AAAAAAAAAA"));
    sam2.push_str(&sam_line("r5", "chrB", 1, "10M", "CCCCCGCCCC"));
    sam2.push_str(&sam_line("r6", "chrB", 1, "10M", "CCCCCGCCCC"));
    write_gz(&root.join("s2.sam.gz"), &sam2);

    write_gz(&root.join("s1.csv.gz"), &snp_row("chrA", 4, 5));
    write_gz(&root.join("s2.csv.gz"), &snp_row("chrB", 5, 5));

    let config = TallyConfig {
        labels: vec!["s1".to_string(), "s2".to_string()],
        sam_paths: vec![root.join("s1.sam.gz"), root.join("s2.sam.gz")],
        snp_paths: vec![root.join("s1.csv.gz"), root.join("s2.csv.gz")],
        reference_path: root.join("ref.fa.gz"),
        output_path: root.join("out.txt"),
        format: OutputFormat::PerVariant,
        min_read_depth: 2,
        edge_buffer: 0,
        threads: 0,
    };
    Fixture { _dir: dir, config }
}

#[rstest]
fn test_multi_sample_gzipped_per_variant(two_samples: Fixture) {
    tally_snps(&two_samples.config).unwrap();

    let output = fs::read_to_string(&two_samples.config.output_path).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "RefID\tSNPCoord\tRefBase\tSNPBase\ts1.snpRds\ts1.otherRds\ts2.snpRds\ts2.otherRds",
            "chrA\t4\tA\tT\t3\t1\t0\t1",
            "chrB\t5\tC\tG\t0\t0\t2\t0",
        ]
    );
}

#[rstest]
fn test_multi_sample_per_allele(mut two_samples: Fixture) {
    two_samples.config.format = OutputFormat::PerAllele;
    tally_snps(&two_samples.config).unwrap();

    let output = fs::read_to_string(&two_samples.config.output_path).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "RefID\tSNPCoord\tRowAllele\ts1\ts2",
            "chrA\t4\tA*\t1\t1",
            "chrA\t4\tT\t3\t0",
            "chrB\t5\tC*\t0\t0",
            "chrB\t5\tG\t0\t2",
        ]
    );
}

#[rstest]
fn test_multi_sample_per_position(mut two_samples: Fixture) {
    two_samples.config.format = OutputFormat::PerPosition;
    tally_snps(&two_samples.config).unwrap();

    let output = fs::read_to_string(&two_samples.config.output_path).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "RefID\tSNPCoord\tRefBase\ts1.A\ts1.T\ts1.C\ts1.G\ts2.A\ts2.T\ts2.C\ts2.G",
            "chrA\t4\tA\t1\t3\t0\t0\t1\t0\t0\t0",
            "chrB\t5\tC\t0\t0\t0\t0\t0\t0\t0\t2",
        ]
    );
}
