use std::io::BufRead;
use std::path::Path;

use anyhow::Result;

use snptally_core::utils::get_dynamic_reader;
use snptally_overlap::SpanIndex;

use crate::cigar::spans_from_alignment;

/// Minimum tab-delimited fields for a usable alignment row.
const MIN_SAM_FIELDS: usize = 11;

/// Load one sample's aligned-read spans for one reference sequence.
///
/// Streams the (possibly gzip'd) SAM text and keeps only lines carrying the
/// target reference id. The filter is a substring match on `\t<ref_id>\t` so
/// lines that cannot match are dropped without tokenizing; matching lines are
/// then split and must have at least 11 fields. Field 3 is the 1-based
/// leftmost coordinate, field 5 the CIGAR, field 9 the read bases. Malformed
/// rows are dropped silently.
///
/// A mid-stream read error (a corrupt gzip member, say) stops consumption
/// but keeps the spans decoded so far; the caller decides whether a partial
/// set is acceptable. Failure to open the file at all is returned as an
/// error.
pub fn load_sample_spans(path: &Path, ref_id: &str) -> Result<SpanIndex> {
    let reader = get_dynamic_reader(path)?;
    let needle = format!("\t{ref_id}\t");

    let mut spans = Vec::new();
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!(
                    "Error while reading SAM file {}: {}",
                    path.display(),
                    err
                );
                break;
            }
        };
        if !line.contains(&needle) {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < MIN_SAM_FIELDS {
            continue;
        }
        let Ok(pos) = fields[3].parse::<u32>() else {
            continue;
        };
        spans.extend(spans_from_alignment(pos, fields[5], fields[9]));
    }

    Ok(SpanIndex::build(spans))
}
