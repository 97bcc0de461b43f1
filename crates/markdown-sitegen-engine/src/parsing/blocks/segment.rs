use std::borrow::Cow;

use super::{classify::classify_block, types::Block};

/// Separator between blocks: one blank line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Converts `\r\n` and lone `\r` line endings to `\n`.
///
/// Borrows when the input has no carriage returns.
pub fn normalize_newlines(document: &str) -> Cow<'_, str> {
    if document.contains('\r') {
        Cow::Owned(document.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(document)
    }
}

/// Splits a document into trimmed, non-empty blocks in source order.
///
/// Blocks are separated by blank lines; longer runs of newlines act as a
/// single separator. Expects `\n` line endings (see [`normalize_newlines`]).
pub fn segment_blocks(document: &str) -> Vec<&str> {
    document
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Segments and classifies a document.
pub fn parse_blocks(document: &str) -> Vec<Block<'_>> {
    segment_blocks(document)
        .into_iter()
        .map(|text| Block {
            text,
            kind: classify_block(text),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::BlockType;
    use pretty_assertions::assert_eq;

    #[test]
    fn markdown_to_blocks() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            segment_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn empty_document() {
        assert!(segment_blocks("").is_empty());
    }

    #[test]
    fn blank_lines_only() {
        assert!(segment_blocks("\n\n\n").is_empty());
        assert!(segment_blocks("  \n\n \t \n\n").is_empty());
    }

    #[test]
    fn runs_of_blank_lines_are_one_separator() {
        assert_eq!(segment_blocks("a\n\n\n\n\nb"), vec!["a", "b"]);
    }

    #[test]
    fn blocks_are_trimmed() {
        assert_eq!(segment_blocks("  a  \n\n\tb\n"), vec!["a", "b"]);
    }

    #[test]
    fn crlf_is_normalized() {
        let doc = normalize_newlines("a\r\n\r\nb\r\nc");
        assert_eq!(segment_blocks(&doc), vec!["a", "b\nc"]);
        assert!(matches!(normalize_newlines("plain\n"), Cow::Borrowed(_)));
    }

    #[test]
    fn block_types() {
        let md = "
# This is a heading

This is a paragraph of text. It has some **bold** and _italic_ words inside of it.

- This is the first list item in a list block
- This is a list item
- This is another list item
";
        let kinds: Vec<_> = parse_blocks(md).into_iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockType::Heading { level: 1 },
                BlockType::Paragraph,
                BlockType::UnorderedList
            ]
        );
    }

    #[test]
    fn other_block_types() {
        let md = "
### This is a heading

> This is a quote of text.
> It has some **bold** and _italic_ words inside of it.

1. This is the first list item in a list block
2. This is a list item
3. This is another list item
";
        let kinds: Vec<_> = parse_blocks(md).into_iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockType::Heading { level: 3 },
                BlockType::Quote,
                BlockType::OrderedList
            ]
        );
    }
}
