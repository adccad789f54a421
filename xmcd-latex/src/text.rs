//! Text-region rendering

use xmcd_parser::Element;

/// LaTeX line break plus a source newline, inserted between output lines.
pub const LINE_BREAK: &str = "\\\\\n";

/// Render a text region: paragraph texts joined by line breaks.
///
/// No break after the last paragraph; a region with no paragraphs renders
/// as the empty string, which is valid, not an error. A paragraph without
/// text contributes an empty line rather than failing the region.
pub fn render(region: Element<'_, '_>) -> String {
    let paragraphs: Vec<&str> = region
        .children()
        .map(|p| p.text().unwrap_or_default())
        .collect();
    paragraphs.join(LINE_BREAK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use xmcd_parser::Worksheet;

    fn rendered(xml: &str) -> String {
        let ws = Worksheet::parse(xml).unwrap();
        render(ws.root())
    }

    #[test]
    fn paragraphs_join_with_line_breaks() {
        assert_eq!(
            rendered("<text><p>Hello</p><p>World</p></text>"),
            "Hello\\\\\nWorld"
        );
    }

    #[test]
    fn single_paragraph_has_no_trailing_break() {
        assert_eq!(rendered("<text><p>Just one</p></text>"), "Just one");
    }

    #[test]
    fn empty_region_renders_empty() {
        assert_eq!(rendered("<text></text>"), "");
    }

    #[test]
    fn textless_paragraph_is_an_empty_line() {
        assert_eq!(rendered("<text><p>a</p><p/><p>b</p></text>"), "a\\\\\n\\\\\nb");
    }
}
