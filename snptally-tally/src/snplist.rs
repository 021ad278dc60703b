use std::io::BufRead;
use std::path::{Path, PathBuf};

use snptally_core::models::SnpCoordMap;
use snptally_core::utils::get_dynamic_reader;

use crate::errors::{Result, TallyError};

/// Minimum comma-separated fields for a usable SNP list row.
const MIN_SNP_FIELDS: usize = 23;

/// Build the starting candidate-coordinate map from the per-sample SNP call
/// csv files.
///
/// Rows need at least 23 comma-separated fields. Field 3 is the quoted
/// reference id, field 4 the coordinate, field 11 the count of reads
/// supporting the call, which must reach `min_read_depth` for the coordinate
/// to be admitted. The header row (first field literally `"SNP_ID"`) is
/// skipped, as is any malformed row. Coordinates from all samples accumulate
/// into one ascending, duplicate-free set per reference.
///
/// An unopenable file is fatal; a mid-stream decode error skips the rest of
/// that file only. Ending up with zero coordinates overall is fatal.
pub fn load_snp_lists(paths: &[PathBuf], min_read_depth: u32) -> Result<SnpCoordMap> {
    let mut coords = SnpCoordMap::new();

    for path in paths {
        let reader =
            get_dynamic_reader(path).map_err(|err| TallyError::SnpListOpen {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?;
        println!("Parsing SNP list from {}", path.display());
        load_one_list(reader, path, min_read_depth, &mut coords);
    }

    println!(
        "Loaded {} starting SNPs over {} reference sequences.",
        coords.num_coords(),
        coords.num_references()
    );

    if coords.is_empty() {
        return Err(TallyError::NoSnpsLoaded);
    }
    Ok(coords)
}

fn load_one_list<R: BufRead>(reader: R, path: &Path, min_read_depth: u32, coords: &mut SnpCoordMap) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!(
                    "Error while reading SNP file {}: {}",
                    path.display(),
                    err
                );
                break;
            }
        };
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < MIN_SNP_FIELDS || fields[0] == "\"SNP_ID\"" {
            continue;
        }
        let ref_id = fields[3].trim_matches('"');
        let Ok(coord) = fields[4].parse::<u32>() else {
            continue;
        };
        let Ok(supporting_reads) = fields[11].parse::<u32>() else {
            continue;
        };
        if supporting_reads >= min_read_depth {
            coords.insert(ref_id, coord);
        }
    }
}
