/// Keyword reporter
///
/// Walks parsed records and writes one report block per keyword hit.

use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::core::ird::is_valid_ird;
use crate::core::keywords::find_matches;
use crate::core::record::Record;
use crate::utils::output_formatter::{format_banner, format_match};

/// Counts gathered while reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Records inspected
    pub records: usize,
    /// Report blocks written
    pub matches: usize,
    /// Blocks whose feature carries a valid IRD check digit
    pub valid_ird: usize,
}

/// Writes search results to an output stream
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the banner naming the annotated file
    pub fn write_banner(&mut self, input: &Path) -> std::io::Result<()> {
        self.out.write_all(format_banner(input).as_bytes())
    }

    /// Write a block for every keyword found in every record context.
    ///
    /// Blocks follow record order, then keyword order within a record.
    pub fn report(&mut self, records: &[Record]) -> std::io::Result<ReportSummary> {
        let mut summary = ReportSummary {
            records: records.len(),
            ..ReportSummary::default()
        };

        for hit in find_matches(records) {
            let valid = is_valid_ird(hit.record.feature());
            debug!(
                "'{}' at {}: feature {} {} the IRD check digit",
                hit.keyword,
                hit.record.location(),
                hit.record.feature(),
                if valid { "passes" } else { "fails" }
            );

            self.out
                .write_all(format_match(hit.keyword, hit.record).as_bytes())?;

            summary.matches += 1;
            if valid {
                summary.valid_ird += 1;
            }
        }

        self.out.flush()?;
        info!(
            "Reported {} matches across {} records ({} with a valid IRD check digit)",
            summary.matches, summary.records, summary.valid_ird
        );
        Ok(summary)
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
