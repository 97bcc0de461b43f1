use crate::parsing::inline::types::SpanKind;

/// A symmetric inline delimiter that wraps a span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    /// Passes run in this order. Reordering changes the output for mixed
    /// input such as a code span containing `_`.
    pub const ORDER: [Delimiter; 3] = [Delimiter::Bold, Delimiter::Italic, Delimiter::Code];

    pub const fn as_str(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "_",
            Delimiter::Code => "`",
        }
    }

    /// The span kind given to delimited text.
    pub const fn kind(self) -> SpanKind {
        match self {
            Delimiter::Bold => SpanKind::Bold,
            Delimiter::Italic => SpanKind::Italic,
            Delimiter::Code => SpanKind::Code,
        }
    }
}
