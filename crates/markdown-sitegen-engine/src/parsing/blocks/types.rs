/// The structural type of a block, derived from its text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// Default when no other rule matches.
    Paragraph,
    /// `#` to `######` followed by a space.
    Heading {
        /// 1 to 6, the number of leading `#`.
        level: u8,
    },
    /// Opened and closed by ```` ``` ```` within the same block.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps.
    OrderedList,
}

/// A segment of the document paired with its type.
///
/// The text is trimmed: no leading or trailing whitespace or blank lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub kind: BlockType,
}
