//! Idea content validation

use super::ValidationError;

/// Validated idea content: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaContent(String);

impl IdeaContent {
    /// Create idea content from raw client input.
    ///
    /// Surrounding whitespace is stripped; the trimmed value is what gets stored.
    ///
    /// # Example
    /// ```
    /// use ideaboard_server::models::IdeaContent;
    ///
    /// let content = IdeaContent::new("  Build a treehouse  ").unwrap();
    /// assert_eq!(content.as_str(), "Build a treehouse");
    /// assert!(IdeaContent::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "Content" });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the content as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for IdeaContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
