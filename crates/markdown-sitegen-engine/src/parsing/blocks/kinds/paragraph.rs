/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// rule matches. Inline parsing is applied to paragraph content.
pub struct Paragraph;

impl Paragraph {
    /// Joins `lines` with single spaces.
    pub fn join_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
        lines.into_iter().collect::<Vec<_>>().join(" ")
    }
}
