/// Utility modules for the IRD search
///
/// This module contains output formatting helpers.

pub mod output_formatter;
