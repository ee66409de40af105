//! Flash messages
//!
//! Categorized one-time notifications stored in a session slot.

mod bucket;
mod category;
mod message;
mod store;

pub use bucket::{FlashBucket, FlashEntry};
pub use category::FlashCategory;
pub use message::FlashMessage;
pub use store::FlashStore;
