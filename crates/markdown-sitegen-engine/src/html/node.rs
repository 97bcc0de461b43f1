use std::fmt;

use super::attributes::Attributes;

/// Elements that never have content and are rendered as a lone start tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// A node in the HTML output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A childless node: raw text, or a single element wrapping text.
    Leaf(Leaf),
    /// An element owning an ordered list of children.
    Container(Container),
}

/// A node without children.
///
/// With no tag the leaf is plain text passthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    tag: Option<String>,
    text: String,
    attributes: Attributes,
}

/// An element that owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    tag: String,
    children: Vec<Node>,
    attributes: Attributes,
}

impl Node {
    /// Untagged text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Leaf(Leaf {
            tag: None,
            text: text.into(),
            attributes: Attributes::new(),
        })
    }

    /// Tagged leaf, e.g. `<b>text</b>`.
    pub fn leaf(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self::leaf_with(tag, text, Attributes::new())
    }

    pub fn leaf_with(
        tag: impl Into<String>,
        text: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        Node::Leaf(Leaf {
            tag: Some(tag.into()),
            text: text.into(),
            attributes,
        })
    }

    /// Container taking ownership of `children`.
    pub fn container(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self::container_with(tag, children, Attributes::new())
    }

    pub fn container_with(
        tag: impl Into<String>,
        children: Vec<Node>,
        attributes: Attributes,
    ) -> Self {
        Node::Container(Container {
            tag: tag.into(),
            children,
            attributes,
        })
    }

    /// The element tag, `None` for a text leaf.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag.as_deref(),
            Node::Container(c) => Some(&c.tag),
        }
    }

    /// Children of a container; always empty for a leaf.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Container(c) => &c.children,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf(leaf) => &leaf.attributes,
            Node::Container(c) => &c.attributes,
        }
    }

    /// Rebuilds the tree with every attribute value passed through `f`.
    ///
    /// `f` gets `(name, value)` and returns the replacement, or `None` to keep
    /// the value. Text content is never touched.
    pub fn map_attributes<F>(self, f: &F) -> Node
    where
        F: Fn(&str, &str) -> Option<String>,
    {
        match self {
            Node::Leaf(leaf) => Node::Leaf(Leaf {
                attributes: leaf.attributes.map_values(f),
                ..leaf
            }),
            Node::Container(c) => Node::Container(Container {
                tag: c.tag,
                children: c
                    .children
                    .into_iter()
                    .map(|child| child.map_attributes(f))
                    .collect(),
                attributes: c.attributes.map_values(f),
            }),
        }
    }

    /// Renders the tree to an HTML string.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Leaf(leaf) => leaf.write_html(out),
            Node::Container(c) => {
                write_open(out, &c.tag, &c.attributes);
                for child in &c.children {
                    child.write_html(out);
                }
                write_close(out, &c.tag);
            }
        }
    }
}

impl Leaf {
    pub fn text(&self) -> &str {
        &self.text
    }

    fn write_html(&self, out: &mut String) {
        let Some(tag) = &self.tag else {
            out.push_str(&html_escape::encode_text(&self.text));
            return;
        };
        write_open(out, tag, &self.attributes);
        if is_void(tag) {
            return;
        }
        out.push_str(&html_escape::encode_text(&self.text));
        write_close(out, tag);
    }
}

fn write_open(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attributes.write_html(out);
    out.push('>');
}

fn write_close(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
