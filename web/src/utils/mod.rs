//! Cross-cutting helpers: constants, token storage, media URL resolution,
//! display formatting and the shared optimistic-mutation pattern.

pub mod constants;
pub mod format;
pub mod media;
pub mod optimistic;
pub mod storage;
