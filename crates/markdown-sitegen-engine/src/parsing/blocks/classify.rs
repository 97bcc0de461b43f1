use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a block by its text.
///
/// Rules are tried in order and the first match wins:
/// heading, code, quote, unordered list, ordered list, then paragraph.
/// A block that looks like both a quote and a list is therefore a quote.
pub fn classify_block(block: &str) -> BlockType {
    if let Some(level) = Heading::level(block) {
        BlockType::Heading { level }
    } else if CodeFence::is_fenced(block) {
        BlockType::Code
    } else if BlockQuote::is_quote(block) {
        BlockType::Quote
    } else if UnorderedList::matches(block) {
        BlockType::UnorderedList
    } else if OrderedList::matches(block) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# This is a heading", BlockType::Heading { level: 1 })]
    #[case("### This is a heading", BlockType::Heading { level: 3 })]
    #[case("####### too deep", BlockType::Paragraph)]
    #[case("```\ncode\n```", BlockType::Code)]
    #[case("```\nnever closed", BlockType::Paragraph)]
    #[case("> quote\n> more", BlockType::Quote)]
    #[case("> quote\nnot quote", BlockType::Paragraph)]
    #[case("- a\n- b", BlockType::UnorderedList)]
    #[case("- a\nb", BlockType::Paragraph)]
    #[case("1. a\n2. b\n3. c", BlockType::OrderedList)]
    #[case("1. a\n3. b", BlockType::Paragraph)]
    #[case("Just some text", BlockType::Paragraph)]
    fn classifies(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(classify_block(block), expected);
    }

    #[test]
    fn heading_beats_everything() {
        assert_eq!(
            classify_block("# Title\n- not a list"),
            BlockType::Heading { level: 1 }
        );
    }

    #[test]
    fn fenced_code_beats_quote() {
        assert_eq!(classify_block("```\n> quoted\n```"), BlockType::Code);
    }
}
