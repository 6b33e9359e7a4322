//! Plain-text layout for non-interactive output

use crate::render::RenderedLine;

/// Lay blocks out as plain text, one output line group per block.
pub fn to_terminal_text(blocks: &[RenderedLine]) -> String {
    let mut out = String::new();

    for block in blocks {
        match block {
            RenderedLine::Heading1(text) => {
                out.push_str(&text.to_uppercase());
                out.push('\n');
                out.push_str(&"=".repeat(text.chars().count().max(1)));
            }
            RenderedLine::Heading2(text) => {
                out.push_str(text);
                out.push('\n');
                out.push_str(&"-".repeat(text.chars().count().max(1)));
            }
            RenderedLine::Heading3(text) => {
                out.push_str("» ");
                out.push_str(text);
            }
            RenderedLine::BulletItem(text) => {
                out.push_str("  • ");
                out.push_str(text);
            }
            RenderedLine::Paragraph(text) => out.push_str(text),
        }
        out.push('\n');
    }

    out
}
