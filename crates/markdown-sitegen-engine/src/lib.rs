pub mod convert;
pub mod html;
pub mod io;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::{ConvertError, convert, extract_title, markdown_to_html};
pub use html::{Attributes, Node};
pub use io::IoError;
pub use parsing::{BlockType, InlineSpan, ParseError, SpanKind};
pub use site::{SiteError, SiteOptions, Template, build_site};
