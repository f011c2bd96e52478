use serde::{Deserialize, Serialize};

use crate::dto::books::BookSummary;

/// Event name: a book's average rating or rating count changed.
pub const RATING_UPDATED: &str = "rating_updated";

/// Event name: a book's unique reader count changed.
pub const READERS_COUNT_UPDATED: &str = "readers_count_updated";

/// Envelope for the live-update channel.
///
/// Every frame carries a full replacement [`BookSummary`] tagged with its
/// event kind. Consumers match on `data.id` and replace their local copy;
/// an id they don't hold is a no-op, so duplicated or reordered frames for
/// different books are harmless.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiveUpdate {
    pub event: String,
    pub data: BookSummary,
}
