//! # Inline Parsing
//!
//! Splits normalized block text into typed inline spans.
//!
//! ## Architecture
//!
//! Parsing is a fixed sequence of passes over a `Vec<InlineSpan>` that starts
//! as one plain span holding the whole text:
//!
//! 1. delimiter passes for `**` (bold), `_` (italic), `` ` `` (code)
//! 2. image extraction `![alt](url)`
//! 3. link extraction `[text](url)`
//!
//! Every pass only rewrites spans that are still plain. Emphasis does not
//! nest: `**_x_**` is a bold span with the literal text `_x_`.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` and `SpanKind`
//! - **`kinds`**: inline-specific types owning their syntax (Delimiter, Image, Link)
//! - **`parser`**: `parse_inline()` entry point and the individual passes
//! - **`error`**: `ParseError`

pub mod error;
pub mod kinds;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use parser::{
    extract_images, extract_links, parse_inline, split_delimiter, split_images, split_links,
};
pub use types::{InlineSpan, SpanKind};
