use std::{fmt, str::FromStr};

use super::error::ParseError;

/// The kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    pub const ALL: [SpanKind; 6] = [
        SpanKind::Plain,
        SpanKind::Bold,
        SpanKind::Italic,
        SpanKind::Code,
        SpanKind::Link,
        SpanKind::Image,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpanKind::Plain => "plain",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }

    /// Whether spans of this kind carry a url.
    pub fn has_url(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpanKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnrecognizedSpanKind(s.to_string()))
    }
}

/// A typed run of inline text.
///
/// The url is present exactly when the kind is [`SpanKind::Link`] or
/// [`SpanKind::Image`]; the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    kind: SpanKind,
    text: String,
    url: Option<String>,
}

impl InlineSpan {
    pub(crate) fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        debug_assert!(!kind.has_url());
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Plain, text)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Bold, text)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Italic, text)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Code, text)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Link,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    /// An image; `alt` is the span's text.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Image,
            text: alt.into(),
            url: Some(url.into()),
        }
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    pub(crate) fn into_text(self) -> String {
        self.text
    }
}
