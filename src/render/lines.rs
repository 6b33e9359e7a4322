//! Line classification for the markdown subset

use serde::Serialize;

/// One display block, derived from exactly one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum RenderedLine {
    Heading1(String),
    Heading2(String),
    Heading3(String),
    BulletItem(String),
    Paragraph(String),
}

impl RenderedLine {
    pub fn text(&self) -> &str {
        match self {
            Self::Heading1(text)
            | Self::Heading2(text)
            | Self::Heading3(text)
            | Self::BulletItem(text)
            | Self::Paragraph(text) => text,
        }
    }

    /// Classify a single line. No context from neighbouring lines is used.
    pub fn classify(line: &str) -> Self {
        if let Some(rest) = line.strip_prefix("# ") {
            Self::Heading1(rest.to_string())
        } else if let Some(rest) = line.strip_prefix("## ") {
            Self::Heading2(rest.to_string())
        } else if let Some(rest) = line.strip_prefix("### ") {
            Self::Heading3(rest.to_string())
        } else if let Some(rest) = line
            .strip_prefix("- ")
            .or_else(|| line.strip_prefix("* "))
        {
            Self::BulletItem(rest.to_string())
        } else {
            Self::Paragraph(line.to_string())
        }
    }
}

/// Split on `'\n'` and classify every line, keeping order and count.
///
/// An empty input still yields one empty paragraph.
pub fn render_response(text: &str) -> Vec<RenderedLine> {
    text.split('\n').map(RenderedLine::classify).collect()
}
