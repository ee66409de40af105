//! Flash message categories

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FlashError;

/// Category of a flash message
///
/// The four known categories are what [`FlashStore::clear_all`] empties and
/// what the `add_*` shortcuts write to. The generic
/// [`FlashStore::add`] also accepts arbitrary category names.
///
/// [`FlashStore::clear_all`]: crate::FlashStore::clear_all
/// [`FlashStore::add`]: crate::FlashStore::add
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    /// Operation completed
    Success,
    /// Neutral notice
    Info,
    /// Something needs attention
    Warning,
    /// Operation failed
    Error,
}

impl FlashCategory {
    /// All known categories, in display order
    pub const ALL: [Self; 4] = [Self::Success, Self::Info, Self::Warning, Self::Error];

    /// Session key for this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl AsRef<str> for FlashCategory {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for FlashCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlashCategory {
    type Err = FlashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| FlashError::UnknownCategory(s.to_string()))
    }
}
