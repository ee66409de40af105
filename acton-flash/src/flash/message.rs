//! Structured flash message

use serde::{Deserialize, Serialize};

use super::FlashCategory;

/// A flash message with an optional title
///
/// Any serializable value can be flashed; this type covers the common case of
/// a message string plus a heading for the alert box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Category used for styling
    pub category: FlashCategory,
    /// Message body
    pub message: String,
    /// Optional heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl FlashMessage {
    /// Create a message in the given category
    #[must_use]
    pub fn new(category: FlashCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            title: None,
        }
    }

    /// Create a success message
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FlashCategory::Success, message)
    }

    /// Create an info message
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(FlashCategory::Info, message)
    }

    /// Create a warning message
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(FlashCategory::Warning, message)
    }

    /// Create an error message
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(FlashCategory::Error, message)
    }

    /// Attach a heading
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
