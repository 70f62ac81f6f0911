use std::sync::LazyLock;

use regex::Regex;

use crate::models::Timestamp;

static LINE_NUMBER_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+→").unwrap());

/// Both markers must be present for a line to count as a seek directive
pub const SEEK_DIRECTIVE_MARKERS: [&str; 2] = ["Move the player to", "seconds in the call"];

/// Trim the raw line and drop a leading `<digits>→` line number, keeping
/// whatever follows the arrow as-is.
///
/// Speaker headers are classified on this form, so `1→ Bob` is not a
/// speaker line.
pub fn strip_line_number(raw: &str) -> &str {
    let line = raw.trim();
    match LINE_NUMBER_PREFIX.find(line) {
        Some(prefix) => &line[prefix.end()..],
        None => line,
    }
}

/// Like [`strip_line_number`], with the content trimmed as well.
///
/// An empty result means the line is blank.
pub fn strip_line_prefix(raw: &str) -> &str {
    strip_line_number(raw).trim()
}

pub fn is_timestamp_line(line: &str) -> bool {
    Timestamp::parse(line).is_some()
}

/// Player navigation lines left behind by the export
pub fn is_seek_directive(line: &str) -> bool {
    SEEK_DIRECTIVE_MARKERS
        .iter()
        .all(|marker| line.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_prefix() {
        assert_eq!(strip_line_prefix("42→Alice"), "Alice");
        assert_eq!(strip_line_prefix("  7→ 00:15  "), "00:15");
        assert_eq!(strip_line_prefix("Alice"), "Alice");
        assert_eq!(strip_line_prefix("12→"), "");
        assert_eq!(strip_line_prefix("   "), "");
    }

    #[test]
    fn test_strip_line_number_keeps_content_whitespace() {
        assert_eq!(strip_line_number("1→ Bob"), " Bob");
        assert_eq!(strip_line_number("  2→Bob  "), "Bob");
        assert_eq!(strip_line_number(" Bob "), "Bob");
        assert_eq!(strip_line_number("3→"), "");
    }

    #[test]
    fn test_malformed_prefix_passes_through() {
        assert_eq!(strip_line_prefix("→Alice"), "→Alice");
        assert_eq!(strip_line_prefix("4a→Alice"), "4a→Alice");
        assert_eq!(strip_line_prefix("Line 4→ here"), "Line 4→ here");
    }

    #[test]
    fn test_only_first_prefix_is_removed() {
        assert_eq!(strip_line_prefix("3→4→text"), "4→text");
    }

    #[test]
    fn test_timestamp_line() {
        assert!(is_timestamp_line("00:15"));
        assert!(!is_timestamp_line("0:15"));
        assert!(!is_timestamp_line("00:15 Alice"));
    }

    #[test]
    fn test_seek_directive_requires_both_markers() {
        assert!(is_seek_directive("Move the player to 20 seconds in the call"));
        assert!(is_seek_directive("Click: Move the player to 1200 seconds in the call."));
        assert!(!is_seek_directive("Move the player to the left"));
        assert!(!is_seek_directive("about 20 seconds in the call"));
    }
}
