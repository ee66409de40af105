//! Error types and error handling

use thiserror::Error;

/// Flash store error type
#[derive(Debug, Error)]
pub enum FlashError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The flash slot was read or written before it was initialized
    #[error("Flash slot `{slot}` is not initialized in this session")]
    Uninitialized {
        /// Name of the missing session slot
        slot: String,
    },

    /// The session slot holds a value that is not a flash bucket
    #[error("Session slot `{slot}` does not hold flash data: {source}")]
    CorruptSlot {
        /// Name of the offending session slot
        slot: String,
        /// Underlying decode failure
        #[source]
        source: serde_json::Error,
    },

    /// A category name outside success/info/warning/error
    #[error("Unknown flash category: {0}")]
    UnknownCategory(String),

    /// A flash entry or session value could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized_message_names_slot() {
        let err = FlashError::Uninitialized {
            slot: "_flashdata".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Flash slot `_flashdata` is not initialized in this session"
        );
    }

    #[test]
    fn test_serialization_error_converts() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: FlashError = json_err.into();
        assert!(matches!(err, FlashError::Serialization(_)));
    }
}
