//! # acton-flash
//!
//! One-time notifications carried from one request to the next.
//!
//! Flash messages live in a single named slot of the request session
//! (`_flashdata` by default), grouped by category. A handler adds messages
//! before redirecting; the next handler reads them, renders them and clears
//! them.
//!
//! The session itself (cookies, IDs, storage, expiry) is owned by whatever
//! transport the application uses. This crate only needs the
//! [`SessionTransport`] seam to read and write its slot.
//!
//! # Example
//!
//! ```rust
//! use acton_flash::prelude::*;
//!
//! # fn main() -> Result<(), FlashError> {
//! let mut session = SessionData::new();
//!
//! // Request 1: queue a message, then redirect
//! let mut flash = FlashStore::open(&mut session, FlashConfig::default())?;
//! flash.add_success("Profile saved")?;
//!
//! // Request 2: render and consume
//! let mut flash = FlashStore::open(&mut session, FlashConfig::default())?;
//! let shown = flash.take_by_type(FlashCategory::Success)?;
//! assert_eq!(shown, vec![serde_json::json!("Profile saved")]);
//! assert!(flash.is_empty()?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod flash;
pub mod session;

pub use config::{FlashConfig, DEFAULT_SESSION_KEY};
pub use error::FlashError;
pub use flash::{FlashBucket, FlashCategory, FlashEntry, FlashMessage, FlashStore};
pub use session::{SessionData, SessionTransport};

/// Common imports for handlers working with flash messages
pub mod prelude {
    pub use crate::config::FlashConfig;
    pub use crate::error::FlashError;
    pub use crate::flash::{FlashBucket, FlashCategory, FlashMessage, FlashStore};
    pub use crate::session::{SessionData, SessionTransport};
}
