//! Flash store configuration

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FlashError;

/// Session slot used when none is configured
pub const DEFAULT_SESSION_KEY: &str = "_flashdata";

/// Flash store configuration
///
/// Passed to every [`FlashStore`](crate::FlashStore) explicitly, so two stores
/// in the same process can use different slots without affecting each other.
///
/// # Example
///
/// ```rust
/// use acton_flash::FlashConfig;
///
/// let config = FlashConfig::new("notices").unwrap();
/// assert_eq!(config.session_key(), "notices");
///
/// let from_file: FlashConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(from_file.session_key(), "_flashdata");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashConfig {
    /// Name of the session slot holding the flash bucket
    #[serde(deserialize_with = "non_empty_key")]
    session_key: String,
}

fn non_empty_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let key = String::deserialize(deserializer)?;
    if key.is_empty() {
        return Err(serde::de::Error::custom(
            "flash session key must not be empty",
        ));
    }
    Ok(key)
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }
}

impl FlashConfig {
    /// Create a configuration using a custom session slot
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::Config`] if `session_key` is empty.
    pub fn new(session_key: impl Into<String>) -> Result<Self, FlashError> {
        let session_key = session_key.into();
        if session_key.is_empty() {
            return Err(FlashError::Config(
                "flash session key must not be empty".to_string(),
            ));
        }
        Ok(Self { session_key })
    }

    /// Name of the session slot holding the flash bucket
    #[must_use]
    pub fn session_key(&self) -> &str {
        &self.session_key
    }
}
