//! Plain text presenter for terminal output.

use crate::core::CharacterReport;
use crate::render::display_glyph;

/// Render reports as indented plain text, one block per character.
pub fn render_reports(reports: &[CharacterReport]) -> String {
    let mut out = String::new();

    for report in reports {
        out.push_str(&format!(
            "{}  starts at byte position {}\n",
            display_glyph(report),
            report.byte_offset
        ));
        out.push_str(&format!("  hex bytes: [{}]\n", report.hex_bytes()));
        for category in &report.categories {
            out.push_str(&format!("  is {} code point\n", category.label()));
        }
        out.push_str(&format!("  {}\n", report.reference_link));
    }

    out
}
