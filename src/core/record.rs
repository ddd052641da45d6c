/// Record type for annotated feature lines
///
/// A record is the fixed-shape view of one data line in the annotated file:
/// three required columns followed by two optional trailing columns.

/// One parsed line of an annotated feature file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    location: String,
    feature: String,
    context: String,
    filename: Option<String>,
    md5: Option<String>,
}

impl Record {
    /// Smallest number of tab-separated fields a record accepts
    pub const MIN_FIELDS: usize = 3;

    /// Largest number of tab-separated fields a record accepts
    pub const MAX_FIELDS: usize = 5;

    /// Create a record with only the required columns
    pub fn new(
        location: impl Into<String>,
        feature: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            feature: feature.into(),
            context: context.into(),
            filename: None,
            md5: None,
        }
    }

    /// Attach the source file name column
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Attach the source file MD5 column
    pub fn with_md5(mut self, md5: impl Into<String>) -> Self {
        self.md5 = Some(md5.into());
        self
    }

    /// Build a record from already-split fields
    ///
    /// # Arguments
    ///
    /// * `fields` - The tab-separated columns of one line
    ///
    /// # Returns
    ///
    /// `None` when the field count is outside 3..=5
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        match *fields {
            [location, feature, context] => Some(Self::new(location, feature, context)),
            [location, feature, context, filename] => {
                Some(Self::new(location, feature, context).with_filename(filename))
            }
            [location, feature, context, filename, md5] => Some(
                Self::new(location, feature, context)
                    .with_filename(filename)
                    .with_md5(md5),
            ),
            _ => None,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn md5(&self) -> Option<&str> {
        self.md5.as_deref()
    }
}
