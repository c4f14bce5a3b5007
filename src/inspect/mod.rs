//! The inspector: a linear scan over an input's characters producing one
//! [`CharacterReport`] per retained character.
//!
//! Both entry points are pure functions. The include-ASCII toggle is an
//! explicit parameter, so concurrent inspections with different settings
//! cannot interfere with each other.
//!
//! ```rust
//! use string_inspector::inspect::inspect;
//!
//! let reports = inspect("a€", false);
//! assert_eq!(reports.len(), 1); // 'a' is printable ASCII and skipped
//! assert_eq!(reports[0].codepoint, 0x20AC);
//! assert_eq!(reports[0].byte_offset, 1);
//! ```

use crate::core::report::CharacterReport;

/// Whether `c` lies in the printable-ASCII range skipped by default
/// (U+0021 through U+007E; space and control characters are always kept).
pub fn is_printable_ascii(c: char) -> bool {
    matches!(u32::from(c), 33..=126)
}

/// Inspect every character of `input`, in order.
///
/// When `include_ascii` is false, printable-ASCII characters produce no
/// report at all. Always succeeds; empty input yields an empty vector.
pub fn inspect(input: &str, include_ascii: bool) -> Vec<CharacterReport> {
    input
        .char_indices()
        .filter(|&(_, c)| include_ascii || !is_printable_ascii(c))
        .map(|(offset, c)| CharacterReport::new(c, offset))
        .collect()
}

/// Inspect raw bytes that may not be valid UTF-8.
///
/// Each malformed byte sequence decodes to one U+FFFD report at the
/// sequence's own byte offset; offsets of later characters still reflect
/// the original byte layout, not the layout after substitution.
pub fn inspect_bytes(input: &[u8], include_ascii: bool) -> Vec<CharacterReport> {
    let mut reports = Vec::new();
    let mut offset = 0;

    for chunk in input.utf8_chunks() {
        for (i, c) in chunk.valid().char_indices() {
            if include_ascii || !is_printable_ascii(c) {
                reports.push(CharacterReport::new(c, offset + i));
            }
        }
        offset += chunk.valid().len();

        if !chunk.invalid().is_empty() {
            reports.push(CharacterReport::new(char::REPLACEMENT_CHARACTER, offset));
            offset += chunk.invalid().len();
        }
    }

    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::category::Category;

    #[test]
    fn test_empty_input() {
        assert!(inspect("", true).is_empty());
        assert!(inspect("", false).is_empty());
    }

    #[test]
    fn test_ascii_skipped_by_default() {
        assert!(inspect("A", false).is_empty());
        assert!(inspect("hello,world!", false).is_empty());
    }

    #[test]
    fn test_ascii_included_on_request() {
        let reports = inspect("A", true);
        assert_eq!(reports.len(), 1);

        let report = &reports[0];
        assert_eq!(report.codepoint, 0x41);
        assert_eq!(report.byte_offset, 0);
        assert_eq!(report.utf8_bytes, vec![0x41]);
        assert_eq!(
            report.categories,
            vec![
                Category::Graphic,
                Category::Letter,
                Category::Uppercase,
                Category::Printable,
            ]
        );
    }

    #[test]
    fn test_space_and_controls_always_reported() {
        // Space (32) and newline (10) sit outside the 33..=126 skip range
        let reports = inspect("a b\n", false);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].codepoint, 0x20);
        assert_eq!(reports[0].byte_offset, 1);
        assert_eq!(reports[1].codepoint, 0x0A);
        assert_eq!(reports[1].byte_offset, 3);
    }

    #[test]
    fn test_report_count_equals_char_count_with_ascii() {
        let input = "aé€\n\u{1F600}";
        let reports = inspect(input, true);
        assert_eq!(reports.len(), input.chars().count());
    }

    #[test]
    fn test_offsets_match_input_byte_layout() {
        let input = "a€é";
        let reports = inspect(input, true);
        let expected: Vec<usize> = input.char_indices().map(|(i, _)| i).collect();
        let actual: Vec<usize> = reports.iter().map(|r| r.byte_offset).collect();
        assert_eq!(actual, expected);
        assert!(actual.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_euro_after_skipped_ascii_keeps_offset() {
        let reports = inspect("a€", false);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].codepoint, 0x20AC);
        assert_eq!(reports[0].byte_offset, 1);
        assert!(reports[0].has(Category::Symbol));
        assert_eq!(reports[0].utf8_bytes.len(), 3);
    }

    #[test]
    fn test_two_byte_character() {
        let reports = inspect("é", true);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].codepoint, 0xE9);
        assert_eq!(reports[0].utf8_bytes.len(), 2);
        assert!(reports[0].has(Category::Letter));
        assert!(reports[0].has(Category::Lowercase));
    }

    #[test]
    fn test_inspect_bytes_valid_input_matches_inspect() {
        let input = "a€\n";
        assert_eq!(inspect_bytes(input.as_bytes(), true), inspect(input, true));
        assert_eq!(
            inspect_bytes(input.as_bytes(), false),
            inspect(input, false)
        );
    }

    #[test]
    fn test_inspect_bytes_malformed_sequence() {
        // 'a', a lone continuation byte, then 'é'
        let input = [0x61, 0x80, 0xC3, 0xA9];
        let reports = inspect_bytes(&input, true);
        assert_eq!(reports.len(), 3);

        assert_eq!(reports[0].codepoint, 0x61);
        assert_eq!(reports[0].byte_offset, 0);

        assert_eq!(reports[1].character, char::REPLACEMENT_CHARACTER);
        assert_eq!(reports[1].byte_offset, 1);
        assert_eq!(reports[1].utf8_bytes, vec![0xEF, 0xBF, 0xBD]);

        // Offset of 'é' reflects the original bytes, not the substitution
        assert_eq!(reports[2].codepoint, 0xE9);
        assert_eq!(reports[2].byte_offset, 2);
    }

    #[test]
    fn test_inspect_bytes_truncated_multibyte_tail() {
        // '€' with its last byte missing
        let input = [0xE2, 0x82];
        let reports = inspect_bytes(&input, false);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].character, char::REPLACEMENT_CHARACTER);
        assert_eq!(reports[0].byte_offset, 0);
    }
}
