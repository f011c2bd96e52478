//! Glue between the views and the outside world: the HTTP client adapter,
//! session-token inspection, and the live-update channel.

pub mod api;
pub mod live;
pub mod session;
