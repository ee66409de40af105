//! Flash store over a session slot
//!
//! A [`FlashStore`] is opened per request on top of the session map and
//! reads or writes the [`FlashBucket`] kept under the configured slot.
//!
//! Every operation goes through the [`SessionTransport`] seam: the bucket is
//! read from the slot, changed, and written back. Nothing is cached in the
//! store, so two stores opened on the same session in sequence see each
//! other's writes.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use super::{FlashBucket, FlashCategory, FlashEntry, FlashMessage};
use crate::config::FlashConfig;
use crate::error::FlashError;
use crate::session::SessionTransport;

/// Flash message store bound to one session map
///
/// # Example
///
/// ```rust
/// use acton_flash::prelude::*;
///
/// # fn main() -> Result<(), FlashError> {
/// let mut session = SessionData::new();
/// let mut flash = FlashStore::open(&mut session, FlashConfig::default())?;
///
/// flash.add_info("Check your inbox")?;
/// flash.push(FlashMessage::error("Card declined").with_title("Payment"))?;
///
/// let errors: Vec<FlashMessage> = flash.get_by_type_as(FlashCategory::Error)?;
/// assert_eq!(errors[0].title.as_deref(), Some("Payment"));
///
/// flash.clear_all()?;
/// assert!(flash.is_empty()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FlashStore<'s, S: SessionTransport + ?Sized> {
    session: &'s mut S,
    config: FlashConfig,
}

impl<'s, S: SessionTransport + ?Sized> FlashStore<'s, S> {
    /// Bind a store to `session` without touching the slot
    ///
    /// Call [`init`](Self::init) (or use [`open`](Self::open)) before reading
    /// or writing; operations on a missing slot return
    /// [`FlashError::Uninitialized`].
    #[must_use]
    pub fn new(session: &'s mut S, config: FlashConfig) -> Self {
        Self { session, config }
    }

    /// Bind a store to `session` and make sure its slot exists
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or written.
    pub fn open(session: &'s mut S, config: FlashConfig) -> Result<Self, FlashError> {
        let mut store = Self::new(session, config);
        store.init()?;
        Ok(store)
    }

    /// Insert an empty bucket under the configured slot if it is absent
    ///
    /// Meant to be called by the session layer once the session map for a
    /// request is available. Existing entries are never overwritten. Returns
    /// `true` if the slot was created.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or written.
    pub fn ensure_initialized(session: &mut S, config: &FlashConfig) -> Result<bool, FlashError> {
        let slot = config.session_key();
        if session.read_slot(slot)?.is_some() {
            return Ok(false);
        }
        session.write_slot(slot, FlashBucket::new())?;
        debug!(slot, "Initialized flash slot");
        Ok(true)
    }

    /// [`ensure_initialized`](Self::ensure_initialized) for this store's session
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or written.
    pub fn init(&mut self) -> Result<bool, FlashError> {
        Self::ensure_initialized(self.session, &self.config)
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &FlashConfig {
        &self.config
    }

    /// Switch this store to another slot
    ///
    /// The bucket under the previous slot is left as it is. The new slot is
    /// not initialized automatically.
    pub fn set_config(&mut self, config: FlashConfig) {
        self.config = config;
    }

    /// Append `value` to `category`
    ///
    /// Any category name is accepted. Duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::Uninitialized`] if the slot is missing,
    /// [`FlashError::CorruptSlot`] if it does not hold flash data, or
    /// [`FlashError::Serialization`] if `value` or the updated bucket cannot
    /// be encoded.
    pub fn add(&mut self, category: impl AsRef<str>, value: impl Serialize) -> Result<(), FlashError> {
        let category = category.as_ref();
        let entry = serde_json::to_value(value)?;
        let mut bucket = self.load()?;
        bucket.push(category, entry);
        debug!(slot = self.slot(), category, "Added flash message");
        self.store(bucket)
    }

    /// Append `value` to the success category
    ///
    /// # Errors
    ///
    /// See [`add`](Self::add).
    pub fn add_success(&mut self, value: impl Serialize) -> Result<(), FlashError> {
        self.add(FlashCategory::Success, value)
    }

    /// Append `value` to the info category
    ///
    /// # Errors
    ///
    /// See [`add`](Self::add).
    pub fn add_info(&mut self, value: impl Serialize) -> Result<(), FlashError> {
        self.add(FlashCategory::Info, value)
    }

    /// Append `value` to the warning category
    ///
    /// # Errors
    ///
    /// See [`add`](Self::add).
    pub fn add_warning(&mut self, value: impl Serialize) -> Result<(), FlashError> {
        self.add(FlashCategory::Warning, value)
    }

    /// Append `value` to the error category
    ///
    /// # Errors
    ///
    /// See [`add`](Self::add).
    pub fn add_error(&mut self, value: impl Serialize) -> Result<(), FlashError> {
        self.add(FlashCategory::Error, value)
    }

    /// Append a structured message under its own category
    ///
    /// # Errors
    ///
    /// See [`add`](Self::add).
    pub fn push(&mut self, message: FlashMessage) -> Result<(), FlashError> {
        let category = message.category;
        self.add(category, message)
    }

    /// The whole bucket as currently stored
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::Uninitialized`] if the slot is missing or
    /// [`FlashError::CorruptSlot`] if it does not hold flash data.
    pub fn get(&self) -> Result<FlashBucket, FlashError> {
        self.load()
    }

    /// Entries of `category`, empty if it was never written or was cleared
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::Uninitialized`] if the slot is missing or
    /// [`FlashError::CorruptSlot`] if it does not hold flash data.
    pub fn get_by_type(&self, category: impl AsRef<str>) -> Result<Vec<FlashEntry>, FlashError> {
        Ok(self.load()?.entries(category.as_ref()).to_vec())
    }

    /// Entries of `category` decoded as `T`
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::Uninitialized`] if the slot is missing,
    /// [`FlashError::CorruptSlot`] if it does not hold flash data, or
    /// [`FlashError::Serialization`] if an entry is not a `T`.
    pub fn get_by_type_as<T: DeserializeOwned>(
        &self,
        category: impl AsRef<str>,
    ) -> Result<Vec<T>, FlashError> {
        self.load()?
            .entries(category.as_ref())
            .iter()
            .map(|entry| T::deserialize(entry).map_err(FlashError::from))
            .collect()
    }

    /// Empty `category`
    ///
    /// A category that was never written is left absent.
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::Uninitialized`] if the slot is missing,
    /// [`FlashError::CorruptSlot`] if it does not hold flash data, or
    /// [`FlashError::Serialization`] if the updated bucket cannot be written
    /// back.
    pub fn clear_by_type(&mut self, category: impl AsRef<str>) -> Result<(), FlashError> {
        let category = category.as_ref();
        let mut bucket = self.load()?;
        if !bucket.clear(category) {
            return Ok(());
        }
        debug!(slot = self.slot(), category, "Cleared flash category");
        self.store(bucket)
    }

    /// Empty the success, info, warning and error categories
    ///
    /// Custom categories added through [`add`](Self::add) are not touched;
    /// clear those with [`clear_by_type`](Self::clear_by_type).
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::Uninitialized`] if the slot is missing,
    /// [`FlashError::CorruptSlot`] if it does not hold flash data, or
    /// [`FlashError::Serialization`] if the updated bucket cannot be written
    /// back.
    pub fn clear_all(&mut self) -> Result<(), FlashError> {
        for category in FlashCategory::ALL {
            self.clear_by_type(category)?;
        }
        Ok(())
    }

    /// Return the entries of `category` and empty it
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::Uninitialized`] if the slot is missing,
    /// [`FlashError::CorruptSlot`] if it does not hold flash data, or
    /// [`FlashError::Serialization`] if the updated bucket cannot be written
    /// back.
    pub fn take_by_type(&mut self, category: impl AsRef<str>) -> Result<Vec<FlashEntry>, FlashError> {
        let category = category.as_ref();
        let mut bucket = self.load()?;
        if !bucket.contains_category(category) {
            return Ok(Vec::new());
        }
        let entries = bucket.take(category);
        debug!(slot = self.slot(), category, count = entries.len(), "Took flash messages");
        self.store(bucket)?;
        Ok(entries)
    }

    /// Whether no category holds any entry
    ///
    /// # Errors
    ///
    /// Returns [`FlashError::Uninitialized`] if the slot is missing or
    /// [`FlashError::CorruptSlot`] if it does not hold flash data.
    pub fn is_empty(&self) -> Result<bool, FlashError> {
        Ok(self.load()?.is_empty())
    }

    fn slot(&self) -> &str {
        self.config.session_key()
    }

    fn load(&self) -> Result<FlashBucket, FlashError> {
        let slot = self.slot();
        trace!(slot, "Reading flash slot");
        self.session
            .read_slot(slot)?
            .ok_or_else(|| FlashError::Uninitialized {
                slot: slot.to_string(),
            })
    }

    fn store(&mut self, bucket: FlashBucket) -> Result<(), FlashError> {
        self.session.write_slot(self.config.session_key(), bucket)
    }
}
