//! # API service modules
//!
//! Single point of egress for every backend call, split by resource:
//!
//! - [`client`] - request building, bearer-token injection, response decoding
//! - [`auth`] - login, registration, profile, password, account deletion
//! - [`books`] - public and personal book endpoints, rating, search
//! - [`favorites`] - favorite membership
//! - [`history`] - reading history
//! - [`collections`] - personal collections
//!
//! Errors propagate unmodified as [`client::ApiError`]; nothing here retries.

pub mod auth;
pub mod books;
pub mod client;
pub mod collections;
pub mod favorites;
pub mod history;

pub use client::ApiError;
