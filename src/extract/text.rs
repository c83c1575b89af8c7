use crate::domain::UNTITLED;

pub const SUMMARY_BUDGET: usize = 200;
pub const ELLIPSIS: &str = "...";

/// Title as given, or the placeholder when the feed gave none
pub fn title_or_placeholder(title: Option<&str>) -> String {
    match title {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => UNTITLED.to_string(),
    }
}

/// First `max_chars` characters, never splitting a code point
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// The ellipsis is appended whether or not anything was cut.
pub fn with_ellipsis(mut text: String) -> String {
    text.push_str(ELLIPSIS);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_placeholder() {
        assert_eq!(title_or_placeholder(None), "Untitled");
        assert_eq!(title_or_placeholder(Some("   ")), "Untitled");
    }

    #[test]
    fn test_title_kept_as_given() {
        assert_eq!(title_or_placeholder(Some(" Headline ")), " Headline ");
    }

    #[test]
    fn test_long_summary_cut_at_budget() {
        let long = "a".repeat(250);
        let summary = with_ellipsis(truncate_chars(&long, SUMMARY_BUDGET));

        assert_eq!(summary, format!("{}...", "a".repeat(200)));
    }

    #[test]
    fn test_short_summary_still_gets_ellipsis() {
        let summary = with_ellipsis(truncate_chars("Short text", SUMMARY_BUDGET));
        assert_eq!(summary, "Short text...");
    }

    #[test]
    fn test_empty_summary_is_only_ellipsis() {
        assert_eq!(with_ellipsis(truncate_chars("", SUMMARY_BUDGET)), "...");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let turkish = "ğüşıöç".repeat(50);
        let cut = truncate_chars(&turkish, SUMMARY_BUDGET);

        assert_eq!(cut.chars().count(), 200);
        assert!(turkish.starts_with(&cut));
    }
}
