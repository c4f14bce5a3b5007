use serde::{Deserialize, Serialize};

use crate::core::category::Category;

/// Base URL of the external code point reference pages.
pub const REFERENCE_BASE_URL: &str = "http://www.fileformat.info/info/unicode/char";

/// Everything the inspector knows about one decoded character.
///
/// Reports are immutable value objects: all analysis happens in
/// [`CharacterReport::new`], the presenters only read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterReport {
    /// The decoded character itself
    pub character: char,

    /// Unicode scalar value (e.g. 0x41 for 'A')
    pub codepoint: u32,

    /// Byte index of the character's first byte within the original input
    pub byte_offset: usize,

    /// The character's UTF-8 encoding
    pub utf8_bytes: Vec<u8>,

    /// Categories from the battery that hold for this character, in
    /// battery order
    pub categories: Vec<Category>,

    /// External reference page for this code point
    pub reference_link: String,
}

impl CharacterReport {
    /// Analyze `character` found at `byte_offset`.
    pub fn new(character: char, byte_offset: usize) -> Self {
        let codepoint = u32::from(character);
        let mut utf8_bytes = vec![0u8; character.len_utf8()];
        character.encode_utf8(&mut utf8_bytes);

        CharacterReport {
            character,
            codepoint,
            byte_offset,
            utf8_bytes,
            categories: Category::matching(character),
            reference_link: reference_link(codepoint),
        }
    }

    /// Whether `category` holds for this character.
    pub fn has(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// The `U+XXXX` notation for this code point (at least four hex digits,
    /// as in code charts).
    pub fn display_code(&self) -> String {
        format!("U+{:04X}", self.codepoint)
    }

    /// The UTF-8 bytes as space-separated lowercase hex, e.g. `"e2 82 ac"`.
    pub fn hex_bytes(&self) -> String {
        self.utf8_bytes
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Reference page URL for a code point: uppercase hex, no `U+` prefix, no
/// leading zeros beyond what the value needs.
pub fn reference_link(codepoint: u32) -> String {
    format!("{REFERENCE_BASE_URL}/{codepoint:X}/index.htm")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_report() {
        let report = CharacterReport::new('A', 0);
        assert_eq!(report.codepoint, 0x41);
        assert_eq!(report.byte_offset, 0);
        assert_eq!(report.utf8_bytes, vec![0x41]);
        assert_eq!(report.display_code(), "U+0041");
        assert_eq!(report.hex_bytes(), "41");
        assert!(report.has(Category::Letter));
        assert!(report.has(Category::Uppercase));
        assert!(!report.has(Category::Lowercase));
    }

    #[test]
    fn test_multibyte_report() {
        let report = CharacterReport::new('€', 1);
        assert_eq!(report.codepoint, 0x20AC);
        assert_eq!(report.byte_offset, 1);
        assert_eq!(report.utf8_bytes, vec![0xE2, 0x82, 0xAC]);
        assert_eq!(report.hex_bytes(), "e2 82 ac");
        assert!(report.has(Category::Symbol));
    }

    #[test]
    fn test_reference_link_format() {
        assert_eq!(
            reference_link(0x41),
            "http://www.fileformat.info/info/unicode/char/41/index.htm"
        );
        assert_eq!(
            reference_link(0x20AC),
            "http://www.fileformat.info/info/unicode/char/20AC/index.htm"
        );
        // No zero padding, even below 0x10
        assert_eq!(
            reference_link(0xA),
            "http://www.fileformat.info/info/unicode/char/A/index.htm"
        );
    }

    #[test]
    fn test_display_code_pads_to_four_digits() {
        assert_eq!(CharacterReport::new('\n', 0).display_code(), "U+000A");
        assert_eq!(CharacterReport::new('\u{1F600}', 0).display_code(), "U+1F600");
    }

    #[test]
    fn test_json_round_trip() {
        let report = CharacterReport::new('é', 3);
        let json = serde_json::to_string(&report).unwrap();
        let back: CharacterReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
