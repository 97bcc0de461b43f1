use crate::{
    html::{Attributes, Node},
    parsing::{
        blocks::{
            Block, BlockType,
            kinds::{BlockQuote, CodeFence, FencedCode, Heading, OrderedList, Paragraph, UnorderedList},
        },
        inline::{ParseError, parse_inline},
    },
};

use super::span::span_to_node;

/// Builds the container node for one classified block.
///
/// | block | normalization | node |
/// |-------|---------------|------|
/// | paragraph | lines joined with spaces | `p` |
/// | heading | `#` run stripped, lines joined | `h1`..`h6` |
/// | quote | `>` stripped per line, lines joined | `blockquote` |
/// | code | fences stripped, verbatim | `pre` > `code` |
/// | lists | marker stripped per line | `ul`/`ol` > `li` |
pub fn block_to_node(block: &Block<'_>) -> Result<Node, ParseError> {
    let text = block.text;
    match block.kind {
        BlockType::Paragraph => {
            let children = inline_nodes(&Paragraph::join_lines(text.lines()))?;
            Ok(Node::container("p", children))
        }
        BlockType::Heading { level } => {
            let children = inline_nodes(&Paragraph::join_lines(Heading::strip(text).lines()))?;
            Ok(Node::container(Heading::tag(level), children))
        }
        BlockType::Quote => {
            let joined = Paragraph::join_lines(text.lines().map(BlockQuote::strip_prefix));
            Ok(Node::container("blockquote", inline_nodes(&joined)?))
        }
        BlockType::Code => Ok(code_node(text)),
        BlockType::UnorderedList => list_node("ul", UnorderedList::items(text)),
        BlockType::OrderedList => list_node("ol", OrderedList::items(text)),
    }
}

/// `pre` wrapping a single `code` leaf; the content is never inline-parsed.
fn code_node(text: &str) -> Node {
    let code = CodeFence::split(text).unwrap_or(FencedCode {
        info: "",
        content: text,
    });
    let attributes = match code.language() {
        Some(lang) => Attributes::new().with("class", format!("language-{lang}")),
        None => Attributes::new(),
    };
    Node::container("pre", vec![Node::leaf_with("code", code.content, attributes)])
}

fn list_node<'a>(
    tag: &str,
    items: impl Iterator<Item = &'a str>,
) -> Result<Node, ParseError> {
    let children = items
        .map(|item| inline_nodes(item).map(|spans| Node::container("li", spans)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Node::container(tag, children))
}

fn inline_nodes(text: &str) -> Result<Vec<Node>, ParseError> {
    Ok(parse_inline(text)?.into_iter().map(span_to_node).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::classify_block;
    use pretty_assertions::assert_eq;

    fn node(text: &str) -> Node {
        block_to_node(&Block {
            text,
            kind: classify_block(text),
        })
        .unwrap()
    }

    #[test]
    fn heading_levels() {
        assert_eq!(node("# Top").serialize(), "<h1>Top</h1>");
        assert_eq!(node("###### Deep").serialize(), "<h6>Deep</h6>");
    }

    #[test]
    fn heading_with_inline_markup() {
        assert_eq!(
            node("## A **bold** claim").serialize(),
            "<h2>A <b>bold</b> claim</h2>"
        );
    }

    #[test]
    fn multi_line_heading_is_joined() {
        assert_eq!(node("# One\ntwo").serialize(), "<h1>One two</h1>");
    }

    #[test]
    fn quote_lines_are_joined() {
        assert_eq!(
            node("> a _quiet_\n>voice").serialize(),
            "<blockquote>a <i>quiet</i> voice</blockquote>"
        );
    }

    #[test]
    fn code_block_keeps_markup_and_newlines() {
        let n = node("```\nline1\nline2\n```");
        assert_eq!(
            n,
            Node::container("pre", vec![Node::leaf("code", "line1\nline2\n")])
        );
    }

    #[test]
    fn code_block_language_class() {
        assert_eq!(
            node("```rust\nlet x = 1;\n```").serialize(),
            r#"<pre><code class="language-rust">let x = 1;
</code></pre>"#
        );
    }

    #[test]
    fn code_block_escapes_html() {
        assert_eq!(
            node("```\n<b>not bold</b>\n```").serialize(),
            "<pre><code>&lt;b&gt;not bold&lt;/b&gt;\n</code></pre>"
        );
    }

    #[test]
    fn unordered_list_items() {
        assert_eq!(
            node("- a\n- b").serialize(),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn ordered_list_items_with_links() {
        assert_eq!(
            node("1. [home](/)\n2. **two**").serialize(),
            r#"<ol><li><a href="/">home</a></li><li><b>two</b></li></ol>"#
        );
    }

    #[test]
    fn list_item_errors_propagate() {
        let text = "- fine\n- not `fine";
        let result = block_to_node(&Block {
            text,
            kind: BlockType::UnorderedList,
        });
        assert!(matches!(result, Err(ParseError::MalformedMarkdown { .. })));
    }
}
