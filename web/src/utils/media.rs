//! Media URL normalization
//!
//! The backend stores cover and PDF paths in several historical shapes:
//! absolute URLs, `/uploads/...` paths, and legacy `public/uploads/...`
//! paths from before the static root moved. [`resolve_media_url`] folds all
//! of them into one absolute URL and is idempotent, so callers can apply it
//! to already-normalized values without harm.

use crate::utils::constants::{API_ORIGIN, PLACEHOLDER_IMAGE_BASE};

/// Normalize a possibly-relative media path into an absolute URL.
///
/// - empty input stays empty
/// - absolute `http(s)` URLs pass through unchanged
/// - the legacy `public/` prefix is stripped
/// - everything else is joined onto the backend origin with exactly one slash
pub fn resolve_media_url(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_prefix("public/").unwrap_or(trimmed);
    format!("{}/{}", API_ORIGIN, trimmed)
}

/// Cover URL for a book, falling back to a titled placeholder image.
pub fn cover_url(cover_image_url: Option<&str>, title: &str) -> String {
    match cover_image_url {
        Some(path) if !path.is_empty() => resolve_media_url(path),
        _ => {
            let text = urlencoding::encode(title).into_owned().replace("%20", "+");
            format!("{}?text={}", PLACEHOLDER_IMAGE_BASE, text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(resolve_media_url(""), "");
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        let url = "https://cdn.example.com/covers/a.jpg";
        assert_eq!(resolve_media_url(url), url);
        assert_eq!(resolve_media_url("http://other/x.png"), "http://other/x.png");
    }

    #[test]
    fn test_relative_paths_gain_origin() {
        assert_eq!(
            resolve_media_url("/uploads/covers/a.jpg"),
            format!("{}/uploads/covers/a.jpg", API_ORIGIN)
        );
        assert_eq!(
            resolve_media_url("uploads/covers/a.jpg"),
            format!("{}/uploads/covers/a.jpg", API_ORIGIN)
        );
    }

    #[test]
    fn test_legacy_public_prefix_is_stripped() {
        assert_eq!(
            resolve_media_url("public/uploads/covers/a.jpg"),
            format!("{}/uploads/covers/a.jpg", API_ORIGIN)
        );
    }

    #[test]
    fn test_idempotent() {
        let once = resolve_media_url("public/uploads/covers/a.jpg");
        assert_eq!(resolve_media_url(&once), once);
    }

    #[test]
    fn test_cover_url_placeholder() {
        let url = cover_url(None, "War and Peace");
        assert!(url.starts_with(PLACEHOLDER_IMAGE_BASE));
        assert!(url.contains("War+and+Peace"));

        assert_eq!(
            cover_url(Some("/uploads/covers/a.jpg"), "ignored"),
            format!("{}/uploads/covers/a.jpg", API_ORIGIN)
        );
    }
}
