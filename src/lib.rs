/// IRD Search - keyword search over annotated IRD feature files
///
/// This library reads the tab-delimited output of an IRD feature extractor and
/// reports every record whose context mentions one of a fixed set of
/// tax-related keywords.

pub mod core;
pub mod error;
pub mod utils;

// Re-export main types for convenience
pub use crate::core::keywords::KEYWORDS;
pub use crate::core::parser::{parse_file, MalformedPolicy};
pub use crate::core::record::Record;
pub use crate::core::reporter::{ReportSummary, Reporter};
pub use crate::error::SearchError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Search configuration
pub mod config {
    use crate::core::parser::MalformedPolicy;
    use std::path::{Path, PathBuf};

    /// Settings for one search run
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SearchConfig {
        /// Annotated feature file to read
        pub input: PathBuf,
        /// Handling of lines with an unsupported field count
        pub on_malformed: MalformedPolicy,
    }

    impl SearchConfig {
        /// Create the default configuration for `input`
        pub fn new(input: impl Into<PathBuf>) -> Self {
            Self {
                input: input.into(),
                on_malformed: MalformedPolicy::default(),
            }
        }

        /// Override the malformed-line policy
        pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
            self.on_malformed = policy;
            self
        }

        pub fn input(&self) -> &Path {
            &self.input
        }
    }
}

/// Command-line application functionality
pub mod app {
    use crate::config::SearchConfig;
    use crate::core::parser::parse_file;
    use crate::core::reporter::{ReportSummary, Reporter};
    use crate::error::Result;
    use std::io::Write;

    /// Run the search and write the report to `out`
    ///
    /// The whole file is parsed before anything is written, so a failing
    /// parse leaves `out` untouched.
    ///
    /// # Arguments
    ///
    /// * `config` - Search settings
    /// * `out` - Destination of the banner and report blocks
    ///
    /// # Returns
    ///
    /// Counts of records and matches
    pub fn run<W: Write>(config: &SearchConfig, out: W) -> Result<ReportSummary> {
        let records = parse_file(config.input(), config.on_malformed)?;

        let mut reporter = Reporter::new(out);
        reporter.write_banner(config.input())?;
        let summary = reporter.report(&records)?;

        Ok(summary)
    }
}
