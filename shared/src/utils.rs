//! Shared pure helpers for merging live updates and formatting ratings.

use crate::dto::books::{BookSummary, HistoryEntry};

/// Replace every copy of `updated.id` in `books` with the pushed summary.
///
/// This is the full-replace merge every consumer of the live-update channel
/// applies. Entries with other ids are left untouched; when the id is absent
/// the list is not modified at all. Returns whether anything was replaced.
pub fn apply_book_update(books: &mut [BookSummary], updated: &BookSummary) -> bool {
    let mut replaced = false;
    for book in books.iter_mut() {
        if book.id == updated.id {
            *book = updated.clone();
            replaced = true;
        }
    }
    replaced
}

/// Same merge as [`apply_book_update`], through the optional `book` of a
/// reading-history entry.
pub fn apply_history_update(entries: &mut [HistoryEntry], updated: &BookSummary) -> bool {
    let mut replaced = false;
    for entry in entries.iter_mut() {
        if let Some(book) = entry.book.as_mut() {
            if book.id == updated.id {
                *book = updated.clone();
                replaced = true;
            }
        }
    }
    replaced
}

/// Format an average rating for display with one decimal place.
///
/// ```rust
/// use shared::utils::format_rating;
///
/// assert_eq!(format_rating(4.56), "4.6");
/// assert_eq!(format_rating(0.0), "0.0");
/// ```
pub fn format_rating(average: f64) -> String {
    format!("{:.1}", average)
}

/// Round an average rating to a whole number of filled stars, clamped to 0..=5.
pub fn rounded_stars(average: f64) -> u8 {
    average.round().clamp(0.0, 5.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, rating: f64) -> BookSummary {
        BookSummary {
            id: id.to_string(),
            title: format!("Book {id}"),
            author: "Author".to_string(),
            cover_image_url: None,
            average_rating: rating,
            number_of_ratings: Some(10),
            unique_readers_count: Some(3),
            genre: vec!["Fiction".to_string()],
            summary: None,
            file_path: None,
            created_at: None,
            is_public: true,
        }
    }

    #[test]
    fn test_apply_book_update_replaces_every_copy() {
        let mut books = vec![book("a", 3.0), book("b", 4.0), book("a", 3.0)];
        let pushed = book("a", 4.5);

        assert!(apply_book_update(&mut books, &pushed));
        assert_eq!(books[0], pushed);
        assert_eq!(books[2], pushed);
        assert_eq!(books[1], book("b", 4.0));
    }

    #[test]
    fn test_apply_book_update_absent_id_is_noop() {
        let mut books = vec![book("a", 3.0), book("b", 4.0)];
        let before = books.clone();

        assert!(!apply_book_update(&mut books, &book("zzz", 5.0)));
        assert_eq!(books, before);
    }

    #[test]
    fn test_apply_book_update_idempotent() {
        let mut books = vec![book("a", 3.0)];
        let pushed = book("a", 4.5);

        apply_book_update(&mut books, &pushed);
        let once = books.clone();
        apply_book_update(&mut books, &pushed);
        assert_eq!(books, once);
    }

    #[test]
    fn test_apply_history_update() {
        let mut entries = vec![
            HistoryEntry {
                book: Some(book("a", 2.0)),
                last_read_at: Some("2025-01-01".to_string()),
            },
            HistoryEntry {
                book: None,
                last_read_at: None,
            },
        ];
        let pushed = book("a", 3.5);

        assert!(apply_history_update(&mut entries, &pushed));
        assert_eq!(entries[0].book.as_ref().unwrap(), &pushed);
        // timestamp untouched
        assert_eq!(entries[0].last_read_at.as_deref(), Some("2025-01-01"));
        assert!(entries[1].book.is_none());
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.56), "4.6");
        assert_eq!(format_rating(3.0), "3.0");
    }

    #[test]
    fn test_rounded_stars_clamps() {
        assert_eq!(rounded_stars(4.4), 4);
        assert_eq!(rounded_stars(4.5), 5);
        assert_eq!(rounded_stars(9.0), 5);
        assert_eq!(rounded_stars(-1.0), 0);
    }
}
