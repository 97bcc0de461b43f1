//! # Inline Kinds
//!
//! Inline-specific types that own their syntax.
//!
//! ## Types
//!
//! - **`Delimiter`**: `**`, `_` and `` ` ``, in the order the parser applies them
//! - **`Image`**: `![alt](url)` pattern
//! - **`Link`**: `[text](url)` pattern, never preceded by `!`
//!
//! The parser asks these types for delimiters and patterns; it never
//! hardcodes `**` or `](`.

pub mod delimiter;
pub mod reference;

pub use delimiter::Delimiter;
pub use reference::{Image, Link};
