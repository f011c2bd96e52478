//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the browser client and the
//! bookstore backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication and account management DTOs
//!   - **[`dto::books`]**: Book, favorites, history and collection DTOs
//!   - **[`dto::live`]**: Push-channel event envelope and event names
//! - **[`utils`]**: Shared pure helpers
//!   - **[`utils::apply_book_update`]**: Merge a pushed book summary into a list
//!   - **[`utils::format_rating`]**: Format an average rating for display
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON with MongoDB-style `_id` identifiers:
//!
//! ```text
//! {
//!   "_id": "64f1c09e2ab79c0012d80a31",
//!   "title": "The Left Hand of Darkness",
//!   "author": "Ursula K. Le Guin",
//!   "coverImageURL": "/uploads/covers/lefthand.jpg",
//!   "averageRating": 4.6,
//!   "uniqueReadersCount": 210,
//!   "genre": ["Sci-Fi"]
//! }
//! ```
//!
//! Field renames are declared on the DTOs so Rust code stays snake_case.

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
