/// Output formatter for keyword search results
///
/// This module builds the plain-text banner and report blocks written to
/// standard output. Output carries no colour codes so repeated runs stay
/// byte-identical.

use std::path::Path;

use crate::core::record::Record;

/// Shown in place of an optional column the line did not have
pub const ABSENT_FIELD: &str = "None";

/// Format the banner printed before any report block
///
/// # Arguments
///
/// * `input` - Path of the annotated file being searched
pub fn format_banner(input: &Path) -> String {
    format!(
        "\n>>> Process annotated IRD feature file...\n>>> Annotated file: {}\n\n",
        input.display()
    )
}

/// Format one report block for a record that matched `keyword`
///
/// # Arguments
///
/// * `keyword` - The keyword found in the record context
/// * `record` - The matching record
///
/// # Returns
///
/// The block text, ending with a blank line
pub fn format_match(keyword: &str, record: &Record) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        ">>> Potential IRD number with '{}' keyword:\n",
        keyword
    ));
    output.push_str(&format!("  > IRD Number: {}\n", record.feature()));
    output.push_str(&format!("  > Location:   {}\n", record.location()));
    output.push_str(&format!("  > Context:    {}\n", record.context()));
    output.push_str(&format!(
        "  > File name:  {}\n",
        record.filename().unwrap_or(ABSENT_FIELD)
    ));
    output.push_str(&format!(
        "  > File MD5:   {}\n\n",
        record.md5().unwrap_or(ABSENT_FIELD)
    ));

    output
}
