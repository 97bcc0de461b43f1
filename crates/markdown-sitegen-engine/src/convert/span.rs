use crate::{
    html::{Attributes, Node},
    parsing::inline::{InlineSpan, SpanKind},
};

/// Converts an inline span to a leaf node.
///
/// Plain text becomes an untagged leaf; images carry their alt text as an
/// attribute and have no text of their own.
pub fn span_to_node(span: InlineSpan) -> Node {
    let url = span.url().unwrap_or_default().to_string();
    match span.kind() {
        SpanKind::Plain => Node::text(span.into_text()),
        SpanKind::Bold => Node::leaf("b", span.into_text()),
        SpanKind::Italic => Node::leaf("i", span.into_text()),
        SpanKind::Code => Node::leaf("code", span.into_text()),
        SpanKind::Link => Node::leaf_with("a", span.into_text(), Attributes::new().with("href", url)),
        SpanKind::Image => {
            let alt = span.into_text();
            Node::leaf_with("img", "", Attributes::new().with("src", url).with("alt", alt))
        }
    }
}
