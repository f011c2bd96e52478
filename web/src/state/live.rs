//! Live-update context
//!
//! Opens the single application-wide websocket and hands out a cloneable
//! [`LiveHandle`] through the Leptos context. Views subscribe per event and
//! keep the returned guard alive for as long as they are mounted.

use leptos::prelude::*;

use crate::services::live::LiveHandle;

pub fn provide_live_context() -> LiveHandle {
    let handle = LiveHandle::connect();
    provide_context(handle.clone());
    handle
}

pub fn use_live_context() -> LiveHandle {
    expect_context::<LiveHandle>()
}
