//! # HTML Node Model
//!
//! The output tree produced by [`convert`](crate::convert::convert) and its
//! serialization to an HTML string.
//!
//! ## Modules
//!
//! - **`attributes`**: `Attributes`, an insertion-ordered name/value list
//! - **`node`**: `Node` with its `Leaf` and `Container` variants
//!
//! ## Key Invariants
//!
//! - Trees are built bottom-up: children are moved into their container and
//!   never mutated afterwards
//! - Serialization is deterministic: attributes render in insertion order
//! - Text is HTML-escaped; attribute values are double-quote escaped
//! - Void elements (`img`, `br`, ...) render as a start tag only

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::{Container, Leaf, Node};
