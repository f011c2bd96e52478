//! Display formatting helpers for the book views.

/// Reader-count badge text ("1 read" / "12 reads").
pub fn format_reads(count: u32) -> String {
    if count == 1 {
        "1 read".to_string()
    } else {
        format!("{} reads", count)
    }
}

/// Short display form of an ISO date string ("2025-03-14T09:26:53.000Z" -> "2025-03-14").
///
/// The backend is not consistent about timestamp precision, so this just
/// takes the date part and passes anything unrecognized through unchanged.
pub fn format_date(iso: &str) -> String {
    match iso.split_once('T') {
        Some((date, _)) => date.to_string(),
        None => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_reads() {
        assert_eq!(format_reads(0), "0 reads");
        assert_eq!(format_reads(1), "1 read");
        assert_eq!(format_reads(12), "12 reads");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-14T09:26:53.000Z"), "2025-03-14");
        assert_eq!(format_date("2025-03-14"), "2025-03-14");
    }
}
