//! Display formatting helpers shared by the table and card renderers.

use chrono::DateTime;

/// `2025-11-02T09:30:00.000Z` → `Nov 2, 2025`. Timestamps that do not parse
/// are shown as received.
pub fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Like [`format_date`] but keeps the time of day.
pub fn format_datetime(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// First `max_chars` characters with a `...` tail, safe on multi-byte text.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// `blog` → `Blog`, for headings and button labels built from a noun.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_dates_format_for_display() {
        assert_eq!(format_date("2025-11-02T09:30:00.000Z"), "Nov 2, 2025");
        assert_eq!(
            format_datetime("2025-11-02T09:30:00.000Z"),
            "Nov 2, 2025 09:30"
        );
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn excerpt_truncates_on_char_boundaries() {
        assert_eq!(excerpt("short", 50), "short");
        assert_eq!(excerpt("abcdefgh", 6), "abcdef...");
        assert_eq!(excerpt("héllo wörld", 6), "héllo ...");
    }

    #[test]
    fn title_case_capitalizes_the_first_letter() {
        assert_eq!(title_case("blog"), "Blog");
        assert_eq!(title_case(""), "");
    }
}
