//! HTML presenter: one table, one row group per character.

use crate::core::CharacterReport;
use crate::render::display_glyph;

/// Render reports as an HTML `<table>` fragment.
///
/// Each character contributes a row linking its code point to the external
/// reference page alongside its byte offset, a row with the hex byte
/// sequence, and one row per category flag that holds, in battery order.
pub fn render_table(reports: &[CharacterReport]) -> String {
    let mut out = String::from("\t\t<table>\n");

    for report in reports {
        let link = format!(
            "<td><a href=\"{}\"> {} </a></td>",
            escape(&report.reference_link),
            escape(&display_glyph(report))
        );
        out.push_str(&format!(
            "\t\t\t<tr>{} <td>starts at byte position {}</td></tr>\n",
            link, report.byte_offset
        ));
        out.push_str(&format!(
            "\t\t\t<tr><td></td><td>is hex byte [{}]</td></tr>\n",
            report.hex_bytes()
        ));
        for category in &report.categories {
            out.push_str(&format!(
                "\t\t\t<tr><td></td><td>is {} code point</td></tr>\n",
                category.label()
            ));
        }
    }

    out.push_str("\t\t</table>\n");
    out
}

/// Wrap a fragment in the full HTML document served by the web front-end.
pub fn render_page(fragment: &str) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n\
         <html>\n\
         \t<head>\n\
         \t\t<meta charset=\"utf-8\">\n\
         \t\t<title>String Inspector</title>\n\
         \t</head>\n\
         \t<body>\n",
    );
    out.push_str(fragment);
    out.push_str("\t</body>\n</html>\n");
    out
}

/// Minimal HTML escaping for text and attribute positions.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
