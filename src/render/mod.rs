//! Presenters for inspection results.
//!
//! Each presenter consumes an ordered slice of
//! [`CharacterReport`](crate::core::CharacterReport) and renders it without
//! reordering or re-analyzing:
//!
//! - [`html`]: table fragment and full document for the web front-end
//! - [`text`]: plain text for the terminal
//!
//! JSON output needs no presenter of its own; reports serialize directly
//! with serde.

pub mod html;
pub mod text;

/// The `U+XXXX 'g'` notation shared by both presenters. Control characters
/// and other non-printing code points display via their debug escape, so a
/// newline reads `U+000A '\n'`.
pub(crate) fn display_glyph(report: &crate::core::CharacterReport) -> String {
    format!(
        "{} '{}'",
        report.display_code(),
        report.character.escape_debug()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CharacterReport;

    #[test]
    fn test_display_glyph_plain() {
        assert_eq!(display_glyph(&CharacterReport::new('A', 0)), "U+0041 'A'");
        assert_eq!(display_glyph(&CharacterReport::new('é', 0)), "U+00E9 'é'");
    }

    #[test]
    fn test_display_glyph_escapes_controls() {
        assert_eq!(
            display_glyph(&CharacterReport::new('\n', 0)),
            "U+000A '\\n'"
        );
        assert_eq!(
            display_glyph(&CharacterReport::new('\t', 0)),
            "U+0009 '\\t'"
        );
    }
}
