/// Core module for the annotated feature search
///
/// This module contains the record model, the parser that reads annotated
/// files, keyword matching, IRD validation and the reporter.

pub mod ird;
pub mod keywords;
pub mod parser;
pub mod record;
pub mod reporter;
