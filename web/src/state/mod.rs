//! Application-wide reactive state provided through the Leptos context.

pub mod live;
pub mod session;
