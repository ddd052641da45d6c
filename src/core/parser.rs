/// Record parser for annotated IRD feature files
///
/// Reads the tab-delimited annotated output line by line, drops comment lines
/// and turns every remaining line into a `Record`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::core::record::Record;
use crate::error::{Result, SearchError};

/// Marker that starts a comment line
pub const COMMENT_MARKER: char = '#';

/// Column delimiter of the annotated file
pub const FIELD_DELIMITER: char = '\t';

/// What to do with a line that has an unsupported number of fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Stop parsing and report the offending line
    #[default]
    Abort,
    /// Log a warning and leave the line out of the result
    Skip,
}

/// Parse an annotated feature file into records, preserving line order.
///
/// # Arguments
///
/// * `path` - Path to the annotated file
/// * `policy` - How to handle lines that are not 3 to 5 fields wide
///
/// # Returns
///
/// The records of every non-comment line, in file order
pub fn parse_file(path: &Path, policy: MalformedPolicy) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|source| SearchError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Parsing annotated file: {}", path.display());

    // The handle is dropped when parse_reader returns
    parse_reader(BufReader::new(file), path, policy)
}

/// Parse annotated records from any buffered reader.
///
/// # Arguments
///
/// * `reader` - Source of annotated lines
/// * `origin` - Path reported when reading fails
/// * `policy` - How to handle lines that are not 3 to 5 fields wide
pub fn parse_reader<R: BufRead>(
    reader: R,
    origin: &Path,
    policy: MalformedPolicy,
) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| SearchError::FileAccess {
            path: origin.to_path_buf(),
            source,
        })?;
        let line_number = index + 1;

        if line.starts_with(COMMENT_MARKER) {
            debug!("Skipping comment on line {}", line_number);
            continue;
        }

        match parse_line(&line, line_number) {
            Ok(record) => records.push(record),
            Err(SearchError::MalformedRecord { line, field_count })
                if policy == MalformedPolicy::Skip =>
            {
                warn!(
                    "Skipping malformed record on line {} ({} fields)",
                    line, field_count
                );
            }
            Err(e) => return Err(e),
        }
    }

    info!("Parsed {} records", records.len());
    Ok(records)
}

/// Parse one non-comment line.
///
/// Surrounding whitespace is stripped before splitting, so trailing tabs do
/// not count as empty fields. A blank line has zero fields.
pub fn parse_line(line: &str, line_number: usize) -> Result<Record> {
    let stripped = line.trim();
    let fields: Vec<&str> = if stripped.is_empty() {
        Vec::new()
    } else {
        stripped.split(FIELD_DELIMITER).collect()
    };

    Record::from_fields(&fields).ok_or(SearchError::MalformedRecord {
        line: line_number,
        field_count: fields.len(),
    })
}
