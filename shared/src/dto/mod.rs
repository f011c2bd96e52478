//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the bookstore backend over REST and
//! over the live-update websocket.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration and profile management DTOs
//! - [`books`] - Book summaries, favorites, reading history, collections
//! - [`live`] - Push-channel envelope and the named event kinds
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase on the wire (`#[serde(rename_all = "camelCase")]`),
//!   with explicit renames for the backend's irregular fields (`_id`, `coverImageURL`)
//! - **Optional fields**: `#[serde(default)]` on everything the backend may omit,
//!   `skip_serializing_if = "Option::is_none"` on optional request fields
//! - **All types**: Implement both `Serialize` and `Deserialize`

pub mod auth;
pub mod books;
pub mod live;

pub use auth::*;
pub use books::*;
pub use live::*;
