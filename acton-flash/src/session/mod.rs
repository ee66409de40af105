//! Session map seam
//!
//! Flash storage never owns the session. It reads and writes one slot in
//! whatever key-value map the session transport hands it. [`SessionData`] is
//! the in-memory map used by tests and by transports that keep their state as
//! JSON values.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::FlashError;
use crate::flash::FlashBucket;

/// Access to the session map slot holding a [`FlashBucket`]
///
/// Implement this for the session type of your web stack. Session lifecycle
/// (creation, persistence between requests, expiry) stays with the
/// implementor.
#[cfg_attr(test, mockall::automock)]
pub trait SessionTransport {
    /// Read the bucket stored under `slot`, or `None` if the slot is absent
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::CorruptSlot`] if the slot holds something other
    /// than a flash bucket.
    fn read_slot(&self, slot: &str) -> Result<Option<FlashBucket>, FlashError>;

    /// Store `bucket` under `slot`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the bucket cannot be encoded for the session.
    fn write_slot(&mut self, slot: &str, bucket: FlashBucket) -> Result<(), FlashError>;
}

/// In-memory session map
///
/// Values are kept as JSON so any serializable type can share the map with
/// the flash slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionData {
    values: HashMap<String, serde_json::Value>,
}

impl SessionData {
    /// Create an empty session map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a serializable value under `key`
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::Serialization`] if `value` cannot be encoded.
    pub fn set<T: Serialize>(&mut self, key: impl Into<String>, value: T) -> Result<(), FlashError> {
        self.values.insert(key.into(), serde_json::to_value(value)?);
        Ok(())
    }

    /// Decode the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::Serialization`] if the stored value is not a `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, FlashError> {
        self.values
            .get(key)
            .map(|value| T::deserialize(value).map_err(FlashError::from))
            .transpose()
    }

    /// Remove and return the raw value stored under `key`
    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.values.remove(key)
    }

    /// Whether `key` is present
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of keys in the session
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the session holds no keys at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SessionTransport for SessionData {
    fn read_slot(&self, slot: &str) -> Result<Option<FlashBucket>, FlashError> {
        self.values
            .get(slot)
            .map(|value| {
                FlashBucket::deserialize(value).map_err(|source| FlashError::CorruptSlot {
                    slot: slot.to_string(),
                    source,
                })
            })
            .transpose()
    }

    fn write_slot(&mut self, slot: &str, bucket: FlashBucket) -> Result<(), FlashError> {
        self.values
            .insert(slot.to_string(), serde_json::to_value(bucket)?);
        Ok(())
    }
}
