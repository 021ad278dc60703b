use std::io::{self, Write};
use std::str::FromStr;

use snptally_core::models::{BASE_CHARS, BaseTally, base_index};

use crate::errors::TallyError;

/// Shape of the output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One row per (coordinate, variant base): the variant's read count and
    /// the combined count of all other reads, per sample.
    PerVariant,
    /// One row per (coordinate, allele), reference allele included and
    /// starred: the raw count for that allele, per sample.
    PerAllele,
    /// One row per coordinate: all four raw base counts, per sample.
    PerPosition,
}

impl FromStr for OutputFormat {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "variant" | "1" => Ok(OutputFormat::PerVariant),
            "allele" | "2" => Ok(OutputFormat::PerAllele),
            "position" | "3" => Ok(OutputFormat::PerPosition),
            _ => Err(TallyError::InvalidFormat(s.to_string())),
        }
    }
}

/// Serialized writer for the tally output table.
///
/// All rows pass through this single writer from the coordinating task, so
/// output content and ordering are deterministic no matter how the
/// per-sample tallies were scheduled.
pub struct SnpWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    labels: Vec<String>,
    min_read_depth: u32,
}

impl<W: Write> SnpWriter<W> {
    /// Wrap `writer` and immediately emit the header row for `format`.
    pub fn new(
        mut writer: W,
        format: OutputFormat,
        labels: &[String],
        min_read_depth: u32,
    ) -> io::Result<Self> {
        match format {
            OutputFormat::PerVariant => {
                write!(writer, "RefID\tSNPCoord\tRefBase\tSNPBase")?;
                for label in labels {
                    write!(writer, "\t{label}.snpRds\t{label}.otherRds")?;
                }
            }
            OutputFormat::PerAllele => {
                write!(writer, "RefID\tSNPCoord\tRowAllele")?;
                for label in labels {
                    write!(writer, "\t{label}")?;
                }
            }
            OutputFormat::PerPosition => {
                write!(writer, "RefID\tSNPCoord\tRefBase")?;
                for label in labels {
                    write!(writer, "\t{label}.A\t{label}.T\t{label}.C\t{label}.G")?;
                }
            }
        }
        writeln!(writer)?;
        Ok(SnpWriter {
            writer,
            format,
            labels: labels.to_vec(),
            min_read_depth,
        })
    }

    /// Report one candidate coordinate given every sample's tally.
    ///
    /// Decides reportability — some non-reference base reaching the minimum
    /// read depth in some sample — and writes the row(s) for the configured
    /// format. Returns whether anything was written.
    ///
    /// `ref_base` is the reference base at the coordinate, or `None` when
    /// the coordinate lies beyond the reference sequence; a base that is not
    /// A/T/C/G leaves every slot eligible for reporting.
    pub fn report(
        &mut self,
        ref_id: &str,
        coord: u32,
        ref_base: Option<u8>,
        tallies: &[BaseTally],
    ) -> io::Result<bool> {
        debug_assert_eq!(tallies.len(), self.labels.len());

        let ref_slot = ref_base.and_then(base_index);
        let ref_char = ref_base.map(char::from).unwrap_or('N');

        let mut report_slot = [false; 4];
        let mut reportable = false;
        for slot in 0..4 {
            if Some(slot) == ref_slot {
                continue;
            }
            if tallies
                .iter()
                .any(|tally| tally.counts[slot] >= self.min_read_depth)
            {
                report_slot[slot] = true;
                reportable = true;
            }
        }
        if !reportable {
            return Ok(false);
        }

        match self.format {
            OutputFormat::PerVariant => {
                for slot in 0..4 {
                    if !report_slot[slot] {
                        continue;
                    }
                    write!(
                        self.writer,
                        "{ref_id}\t{coord}\t{ref_char}\t{}",
                        BASE_CHARS[slot]
                    )?;
                    for tally in tallies {
                        write!(self.writer, "\t{}\t{}", tally.counts[slot], tally.others(slot))?;
                    }
                    writeln!(self.writer)?;
                }
            }
            OutputFormat::PerAllele => {
                for slot in 0..4 {
                    if !report_slot[slot] && Some(slot) != ref_slot {
                        continue;
                    }
                    write!(self.writer, "{ref_id}\t{coord}\t{}", BASE_CHARS[slot])?;
                    if Some(slot) == ref_slot {
                        write!(self.writer, "*")?;
                    }
                    for tally in tallies {
                        write!(self.writer, "\t{}", tally.counts[slot])?;
                    }
                    writeln!(self.writer)?;
                }
            }
            OutputFormat::PerPosition => {
                write!(self.writer, "{ref_id}\t{coord}\t{ref_char}")?;
                for tally in tallies {
                    write!(
                        self.writer,
                        "\t{}\t{}\t{}\t{}",
                        tally.counts[0], tally.counts[1], tally.counts[2], tally.counts[3]
                    )?;
                }
                writeln!(self.writer)?;
            }
        }
        Ok(true)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
