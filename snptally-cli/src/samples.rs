use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use snptally_core::utils::get_dynamic_reader;

/// Parsed samples manifest.
///
/// One sample per row, tab separated: display label, SAM alignments file,
/// candidate SNP list file. The three column vectors stay parallel, in
/// manifest order.
#[derive(Debug, Default)]
pub struct SampleSheet {
    pub labels: Vec<String>,
    pub sam_paths: Vec<PathBuf>,
    pub snp_paths: Vec<PathBuf>,
}

impl SampleSheet {
    pub fn from_file(path: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(path)
            .with_context(|| format!("Unable to open samples manifest {}", path.display()))?;

        let mut sheet = SampleSheet::default();
        for line in reader.lines() {
            let line = line
                .with_context(|| format!("Error reading samples manifest {}", path.display()))?;
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 3 || fields[..3].iter().any(|f| f.is_empty() || f.contains(' ')) {
                eprintln!("Skipping malformed samples manifest row: {line}");
                continue;
            }
            sheet.labels.push(fields[0].to_string());
            sheet.sam_paths.push(PathBuf::from(fields[1]));
            sheet.snp_paths.push(PathBuf::from(fields[2]));
        }

        if sheet.labels.is_empty() {
            bail!("No usable samples in manifest {}", path.display());
        }
        println!("Read {} samples from {}", sheet.labels.len(), path.display());
        Ok(sheet)
    }
}
